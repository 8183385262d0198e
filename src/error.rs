use std::time::Duration;

use thiserror::Error;

/// Errors surfaced by the generation pipeline.
///
/// Every operation in this crate either returns a value or exactly one of
/// these variants. Content-filter rejections stay distinct from generic
/// generation failures because the caller shows a different corrective hint
/// for them (adjust the prompt or image vs. plain retry).
#[derive(Debug, Error)]
pub enum ReelGenError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid image: {0}")]
    InvalidImage(String),

    #[error("Prompt must not be blank")]
    BlankPrompt,

    #[error("Submission failed: {0}")]
    Submission(String),

    #[error("Polling failed: {0}")]
    Polling(String),

    #[error("Video generation failed: {0}")]
    GenerationFailed(String),

    #[error("Request blocked by content filters: {0}")]
    ContentFiltered(String),

    #[error("Job did not reach a terminal state within {0:?}")]
    Timeout(Duration),

    #[error("Malformed storage locator: {0}")]
    MalformedLocator(String),

    #[error("Retrieval failed: {0}")]
    Retrieval(String),

    #[error("Object is not a decodable image: {0}")]
    ImageLoad(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

pub type Result<T> = std::result::Result<T, ReelGenError>;
