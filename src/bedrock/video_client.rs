use aws_sdk_bedrockruntime::types::{
    AsyncInvokeOutputDataConfig, AsyncInvokeS3OutputDataConfig, AsyncInvokeStatus,
};
use aws_sdk_bedrockruntime::Client;
use serde_json::{json, Value};

use crate::bedrock::document::json_to_document;
use crate::config::GenerationSettings;
use crate::error::{ReelGenError, Result};
use crate::models::{JobHandle, JobPoll, JobStatus, ReferenceImage, VideoGenerationRequest};

/// Task type marker the model expects for text-to-video requests.
pub const TASK_TYPE: &str = "TEXT_VIDEO";

/// Client for asynchronous video generation jobs.
///
/// Submission fires at most once per call; there is no local retry. The
/// generated artifact is always written by the service into the fixed
/// output destination this client was constructed with.
#[derive(Clone)]
pub struct VideoClient {
    client: Client,
    model_id: String,
    generation: GenerationSettings,
    output_s3_uri: String,
}

impl VideoClient {
    pub fn new(
        sdk_config: &aws_config::SdkConfig,
        model_id: impl Into<String>,
        generation: GenerationSettings,
        output_s3_uri: impl Into<String>,
    ) -> Self {
        Self {
            client: Client::new(sdk_config),
            model_id: model_id.into(),
            generation,
            output_s3_uri: output_s3_uri.into(),
        }
    }

    pub fn model_id(&self) -> &str {
        &self.model_id
    }

    pub fn output_s3_uri(&self) -> &str {
        &self.output_s3_uri
    }

    /// Start an asynchronous generation job and return its handle.
    pub async fn submit(&self, request: &VideoGenerationRequest) -> Result<JobHandle> {
        validate_prompt(&request.prompt)?;

        let model_input = build_model_input(
            &request.prompt,
            request.reference_image.as_ref(),
            &self.generation,
        );

        let output_config = AsyncInvokeOutputDataConfig::S3OutputDataConfig(
            AsyncInvokeS3OutputDataConfig::builder()
                .s3_uri(&self.output_s3_uri)
                .build()
                .map_err(|e| ReelGenError::Submission(e.to_string()))?,
        );

        log::info!("🎥 Starting video generation with model: {}", self.model_id);

        let response = self
            .client
            .start_async_invoke()
            .model_id(&self.model_id)
            .model_input(json_to_document(model_input))
            .output_data_config(output_config)
            .send()
            .await
            .map_err(|e| ReelGenError::Submission(e.to_string()))?;

        let handle = JobHandle::new(response.invocation_arn());
        log::info!("🚀 Job accepted: {}", handle);
        Ok(handle)
    }

    /// Query the current status of a job once.
    pub async fn job_status(&self, handle: &JobHandle) -> Result<JobPoll> {
        let response = self
            .client
            .get_async_invoke()
            .invocation_arn(handle.as_str())
            .send()
            .await
            .map_err(|e| ReelGenError::Polling(e.to_string()))?;

        let status = match response.status() {
            AsyncInvokeStatus::InProgress => JobStatus::InProgress,
            AsyncInvokeStatus::Completed => JobStatus::Completed,
            AsyncInvokeStatus::Failed => JobStatus::Failed,
            _ => JobStatus::Pending,
        };

        let output_uri = response
            .output_data_config()
            .and_then(|config| config.as_s3_output_data_config().ok())
            .map(|config| config.s3_uri().to_string());

        Ok(JobPoll {
            status,
            failure_message: response.failure_message().map(str::to_string),
            output_uri,
        })
    }
}

/// Reject blank prompts before anything reaches the remote service.
pub fn validate_prompt(prompt: &str) -> Result<()> {
    if prompt.trim().is_empty() {
        return Err(ReelGenError::BlankPrompt);
    }
    Ok(())
}

/// Build the fixed-shape model input. The body carries exactly one image
/// entry iff a reference image is supplied; prompt-only generation is the
/// same request minus that entry.
pub fn build_model_input(
    prompt: &str,
    image: Option<&ReferenceImage>,
    generation: &GenerationSettings,
) -> Value {
    let mut text_params = json!({ "text": prompt });

    if let Some(image) = image {
        text_params["images"] = json!([{
            "format": image.format,
            "source": { "bytes": image.data }
        }]);
    }

    json!({
        "taskType": TASK_TYPE,
        "textToVideoParams": text_params,
        "videoGenerationConfig": {
            "durationSeconds": generation.duration_seconds,
            "fps": generation.fps,
            "dimension": generation.dimension
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_prompts_are_rejected() {
        assert!(matches!(validate_prompt(""), Err(ReelGenError::BlankPrompt)));
        assert!(matches!(
            validate_prompt("   "),
            Err(ReelGenError::BlankPrompt)
        ));
        assert!(validate_prompt("a cinematic product shot").is_ok());
    }

    #[test]
    fn model_input_without_image_has_no_image_entry() {
        let body = build_model_input("showcase the bottle", None, &GenerationSettings::default());

        assert_eq!(body["taskType"], TASK_TYPE);
        assert_eq!(body["textToVideoParams"]["text"], "showcase the bottle");
        assert!(body["textToVideoParams"]["images"].is_null());
        assert_eq!(body["videoGenerationConfig"]["durationSeconds"], 6);
        assert_eq!(body["videoGenerationConfig"]["fps"], 24);
        assert_eq!(body["videoGenerationConfig"]["dimension"], "1280x720");
    }

    #[test]
    fn model_input_with_image_has_exactly_one_entry() {
        let image = ReferenceImage::jpeg("c29tZSBieXRlcw==");
        let body = build_model_input(
            "showcase the bottle",
            Some(&image),
            &GenerationSettings::default(),
        );

        let images = body["textToVideoParams"]["images"].as_array().unwrap();
        assert_eq!(images.len(), 1);
        assert_eq!(images[0]["format"], "jpeg");
        assert_eq!(images[0]["source"]["bytes"], "c29tZSBieXRlcw==");
    }
}
