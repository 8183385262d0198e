use serde::{Deserialize, Serialize};

/// A normalized reference image ready to embed in a request body.
///
/// `data` is the base64-encoded JPEG produced by [`crate::normalize`];
/// `format` is the tag the service expects alongside it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferenceImage {
    pub format: String,
    pub data: String,
}

impl ReferenceImage {
    pub fn jpeg(data: impl Into<String>) -> Self {
        ReferenceImage {
            format: "jpeg".to_string(),
            data: data.into(),
        }
    }
}

/// One video generation request: a prompt plus an optional reference image.
///
/// Prompt-only and image-guided generation share this single shape; the
/// request body contains an image entry iff one is present here.
#[derive(Debug, Clone)]
pub struct VideoGenerationRequest {
    pub prompt: String,
    pub reference_image: Option<ReferenceImage>,
}

impl VideoGenerationRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        VideoGenerationRequest {
            prompt: prompt.into(),
            reference_image: None,
        }
    }

    pub fn with_reference_image(mut self, image: ReferenceImage) -> Self {
        self.reference_image = Some(image);
        self
    }
}

/// Opaque identifier of an in-flight asynchronous job, immutable once issued.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobHandle(String);

impl JobHandle {
    pub fn new(arn: impl Into<String>) -> Self {
        JobHandle(arn.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for JobHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Remote job status. `Completed` and `Failed` are terminal; the service
/// reports a single aggregate in-flight status, so `Pending` only appears
/// for states it has not classified yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobStatus {
    Pending,
    InProgress,
    Completed,
    Failed,
}

impl JobStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, JobStatus::Completed | JobStatus::Failed)
    }
}

/// Snapshot of one status query.
#[derive(Debug, Clone)]
pub struct JobPoll {
    pub status: JobStatus,
    /// Human-readable reason, present on `Failed`.
    pub failure_message: Option<String>,
    /// `s3://` locator of the output folder, present on `Completed`.
    pub output_uri: Option<String>,
}

impl JobPoll {
    pub fn in_progress() -> Self {
        JobPoll {
            status: JobStatus::InProgress,
            failure_message: None,
            output_uri: None,
        }
    }

    pub fn completed(output_uri: impl Into<String>) -> Self {
        JobPoll {
            status: JobStatus::Completed,
            failure_message: None,
            output_uri: Some(output_uri.into()),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        JobPoll {
            status: JobStatus::Failed,
            failure_message: Some(message.into()),
            output_uri: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_states() {
        assert!(JobStatus::Completed.is_terminal());
        assert!(JobStatus::Failed.is_terminal());
        assert!(!JobStatus::Pending.is_terminal());
        assert!(!JobStatus::InProgress.is_terminal());
    }

    #[test]
    fn request_carries_image_only_when_supplied() {
        let plain = VideoGenerationRequest::new("a cinematic shot");
        assert!(plain.reference_image.is_none());

        let guided = VideoGenerationRequest::new("a cinematic shot")
            .with_reference_image(ReferenceImage::jpeg("aGVsbG8="));
        assert_eq!(guided.reference_image.unwrap().format, "jpeg");
    }
}
