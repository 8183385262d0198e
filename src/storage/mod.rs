pub mod artifact;
pub mod catalog;

use std::time::Duration;

use aws_sdk_s3::presigning::PresigningConfig;
use aws_sdk_s3::Client;

use crate::error::{ReelGenError, Result};

pub use artifact::ARTIFACT_URL_EXPIRY;
pub use catalog::PREVIEW_URL_EXPIRY;

/// Read-only object storage client: listing, fetching, and presigning.
/// Nothing in this crate ever mutates or deletes an object.
#[derive(Clone)]
pub struct StorageClient {
    client: Client,
}

impl StorageClient {
    pub fn new(sdk_config: &aws_config::SdkConfig) -> Self {
        Self {
            client: Client::new(sdk_config),
        }
    }

    /// Generate a time-bounded retrieval URL for one object.
    pub async fn presign_get(
        &self,
        bucket: &str,
        key: &str,
        expires_in: Duration,
    ) -> Result<String> {
        let presign_config = PresigningConfig::expires_in(expires_in)
            .map_err(|e| ReelGenError::Retrieval(e.to_string()))?;

        let presigned = self
            .client
            .get_object()
            .bucket(bucket)
            .key(key)
            .presigned(presign_config)
            .await
            .map_err(|e| ReelGenError::Retrieval(e.to_string()))?;

        Ok(presigned.uri().to_string())
    }

    /// Fetch an object's raw bytes.
    pub async fn get_object_bytes(&self, bucket: &str, key: &str) -> Result<Vec<u8>> {
        let response = self
            .client
            .get_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| ReelGenError::Retrieval(e.to_string()))?;

        let bytes = response
            .body
            .collect()
            .await
            .map_err(|e| ReelGenError::Retrieval(e.to_string()))?
            .into_bytes()
            .to_vec();

        Ok(bytes)
    }

    /// List every object key under a prefix, following continuation tokens.
    pub(crate) async fn list_keys(&self, bucket: &str, prefix: &str) -> Result<Vec<String>> {
        let mut keys = Vec::new();
        let mut continuation_token: Option<String> = None;

        loop {
            let mut request = self
                .client
                .list_objects_v2()
                .bucket(bucket)
                .prefix(prefix);

            if let Some(token) = continuation_token {
                request = request.continuation_token(token);
            }

            let response = request
                .send()
                .await
                .map_err(|e| ReelGenError::Retrieval(e.to_string()))?;

            for object in response.contents() {
                if let Some(key) = object.key() {
                    keys.push(key.to_string());
                }
            }

            if response.is_truncated() == Some(true) {
                continuation_token = response.next_continuation_token().map(str::to_string);
            } else {
                break;
            }
        }

        Ok(keys)
    }
}
