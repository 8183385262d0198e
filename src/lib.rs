//! Reelgen generates short marketing videos with Amazon Nova Reel on AWS
//! Bedrock. It normalizes an arbitrary reference image into the exact
//! format the model accepts, starts an asynchronous generation job, polls
//! it to a terminal state under a bounded wait, and resolves the finished
//! clip into a time-limited presigned URL. A small catalog layer lists
//! product images from S3 and loads the bytes of a selected one.

pub mod bedrock;
pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod normalize;
pub mod pipeline;
pub mod storage;

pub use bedrock::{
    classify_failure, poll_until_terminal, progress_estimate, JobStatusSource, VideoClient,
};
pub use config::{
    AwsSettings, GenerationSettings, OutputSettings, PollSettings, ReelConfig, DEFAULT_MODEL_ID,
};
pub use error::{ReelGenError, Result};
pub use models::*;
pub use normalize::normalize;
pub use pipeline::ReelPipeline;
pub use storage::{StorageClient, ARTIFACT_URL_EXPIRY, PREVIEW_URL_EXPIRY};
