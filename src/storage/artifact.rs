//! Resolution of finished artifacts into retrievable URLs.

use std::time::Duration;

use crate::error::{ReelGenError, Result};
use crate::models::S3Location;
use crate::storage::StorageClient;

/// Validity window for final artifact URLs. After expiry the clip is
/// unretrievable through the issued URL; no renewal exists here.
pub const ARTIFACT_URL_EXPIRY: Duration = Duration::from_secs(24 * 3600);

impl StorageClient {
    /// Resolve a job's output folder into a 24-hour retrieval URL for the
    /// clip the service wrote there (always `output.mp4`).
    pub async fn resolve_artifact_url(&self, location: &S3Location) -> Result<String> {
        self.presign_get(&location.bucket, &location.output_key(), ARTIFACT_URL_EXPIRY)
            .await
    }

    /// Download a finished clip through its presigned URL.
    pub async fn download_artifact(&self, url: &str) -> Result<Vec<u8>> {
        let response = reqwest::get(url)
            .await
            .map_err(|e| ReelGenError::Retrieval(e.to_string()))?
            .error_for_status()
            .map_err(|e| ReelGenError::Retrieval(e.to_string()))?;

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ReelGenError::Retrieval(e.to_string()))?;

        Ok(bytes.to_vec())
    }
}
