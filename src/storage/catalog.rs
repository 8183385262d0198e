//! Product catalog access: listing browsable images and loading the bytes
//! of a selected one.

use std::time::Duration;

use crate::error::{ReelGenError, Result};
use crate::models::{display_name_for_key, is_image_key, CatalogEntry};
use crate::storage::StorageClient;

/// Validity window for catalog preview URLs.
pub const PREVIEW_URL_EXPIRY: Duration = Duration::from_secs(3600);

impl StorageClient {
    /// List the product images under a prefix.
    ///
    /// Objects whose keys do not carry a recognized image extension are
    /// skipped silently. Each entry carries a one-hour preview URL and a
    /// display name derived from the key.
    pub async fn list_images(&self, bucket: &str, prefix: &str) -> Result<Vec<CatalogEntry>> {
        let keys = self.list_keys(bucket, prefix).await?;

        let mut entries = Vec::new();
        for key in keys.into_iter().filter(|key| is_image_key(key)) {
            let image_url = self.presign_get(bucket, &key, PREVIEW_URL_EXPIRY).await?;
            entries.push(CatalogEntry {
                name: display_name_for_key(&key),
                image_url,
                key,
            });
        }

        log::info!(
            "🗂️ Found {} product images under {}/{}",
            entries.len(),
            bucket,
            prefix
        );
        Ok(entries)
    }

    /// Fetch a catalog image and verify it decodes before handing it back.
    pub async fn fetch_image_bytes(&self, bucket: &str, key: &str) -> Result<Vec<u8>> {
        let bytes = self.get_object_bytes(bucket, key).await?;

        image::load_from_memory(&bytes)
            .map_err(|e| ReelGenError::ImageLoad(format!("{}: {}", key, e)))?;

        Ok(bytes)
    }
}
