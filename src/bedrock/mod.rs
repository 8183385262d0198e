pub mod document;
pub mod poller;
pub mod video_client;

use crate::config::{AwsSettings, DEFAULT_REGION};

pub use poller::{classify_failure, poll_until_terminal, progress_estimate, JobStatusSource};
pub use video_client::VideoClient;

/// Resolve AWS credentials and region the same way for every client.
///
/// Explicit credentials are used only when both keys are configured;
/// otherwise the default provider chain (env, profile, instance role)
/// applies.
pub async fn load_sdk_config(settings: &AwsSettings) -> aws_config::SdkConfig {
    if let (Some(access_key), Some(secret_key)) = (&settings.access_key, &settings.secret_key) {
        aws_config::from_env()
            .credentials_provider(aws_sdk_bedrockruntime::config::Credentials::new(
                access_key,
                secret_key,
                None,
                None,
                "reelgen",
            ))
            .region(aws_sdk_bedrockruntime::config::Region::new(
                settings
                    .region
                    .clone()
                    .unwrap_or_else(|| DEFAULT_REGION.to_string()),
            ))
            .load()
            .await
    } else if let Some(region) = settings.region.clone() {
        aws_config::from_env()
            .region(aws_sdk_bedrockruntime::config::Region::new(region))
            .load()
            .await
    } else {
        aws_config::load_from_env().await
    }
}
