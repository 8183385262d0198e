use crate::bedrock::{load_sdk_config, poll_until_terminal, VideoClient};
use crate::config::ReelConfig;
use crate::error::{ReelGenError, Result};
use crate::models::{CatalogEntry, GeneratedVideo, VideoGenerationRequest};
use crate::normalize::normalize;
use crate::storage::StorageClient;

/// The end-to-end generation pipeline: normalize → submit → poll → resolve.
///
/// Stateless between calls; the only long-lived value during a generation
/// is the job handle held inside the poll loop. One outstanding job at a
/// time is the caller's contract, not enforced here.
pub struct ReelPipeline {
    video_client: VideoClient,
    storage_client: StorageClient,
    config: ReelConfig,
}

impl ReelPipeline {
    pub async fn new(config: ReelConfig) -> Result<Self> {
        if config.output.bucket.is_empty() {
            return Err(ReelGenError::Config(
                "output bucket must be configured".into(),
            ));
        }

        let sdk_config = load_sdk_config(&config.aws).await;

        Ok(Self {
            video_client: VideoClient::new(
                &sdk_config,
                &config.model_id,
                config.generation.clone(),
                config.output.s3_uri(),
            ),
            storage_client: StorageClient::new(&sdk_config),
            config,
        })
    }

    pub fn video(&self) -> &VideoClient {
        &self.video_client
    }

    pub fn storage(&self) -> &StorageClient {
        &self.storage_client
    }

    pub fn config(&self) -> &ReelConfig {
        &self.config
    }

    /// Run one full generation: optional image normalization, submission,
    /// polling to a terminal state, and resolution of a 24-hour URL for
    /// the finished clip.
    pub async fn generate(
        &self,
        prompt: &str,
        reference_image_bytes: Option<&[u8]>,
    ) -> Result<GeneratedVideo> {
        let mut request = VideoGenerationRequest::new(prompt);
        if let Some(bytes) = reference_image_bytes {
            request = request.with_reference_image(normalize(bytes)?);
        }

        let handle = self.video_client.submit(&request).await?;

        let location =
            poll_until_terminal(&self.video_client, &handle, &self.config.poll, |progress| {
                log::info!(
                    "🎥 Creating your video... {:.0}% (time-based estimate)",
                    progress * 100.0
                );
            })
            .await?;

        let url = self.storage_client.resolve_artifact_url(&location).await?;
        log::info!("🎉 Video generation completed: {}", location);

        Ok(GeneratedVideo { location, url })
    }

    /// List product images from the configured catalog bucket.
    pub async fn list_catalog_images(&self, prefix: &str) -> Result<Vec<CatalogEntry>> {
        let bucket = self.catalog_bucket()?;
        self.storage_client.list_images(bucket, prefix).await
    }

    /// Load a selected catalog image as raw bytes, verified decodable.
    pub async fn fetch_catalog_image(&self, key: &str) -> Result<Vec<u8>> {
        let bucket = self.catalog_bucket()?;
        self.storage_client.fetch_image_bytes(bucket, key).await
    }

    fn catalog_bucket(&self) -> Result<&str> {
        self.config
            .catalog_bucket
            .as_deref()
            .ok_or_else(|| ReelGenError::Config("catalog bucket not configured".into()))
    }

    /// LinkedIn share link for a finished clip announcement.
    pub fn share_url(text: &str) -> String {
        format!(
            "https://www.linkedin.com/feed/?shareActive=true&text={}",
            urlencoding::encode(text)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn share_url_percent_encodes_text() {
        let url = ReelPipeline::share_url("Check out this AI video! #AI");
        assert!(url.starts_with("https://www.linkedin.com/feed/?shareActive=true&text="));
        assert!(url.contains("Check%20out%20this%20AI%20video%21%20%23AI"));
    }
}
