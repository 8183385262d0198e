use crate::error::{ReelGenError, Result};

/// Well-known file name the generation service writes inside its output folder.
pub const OUTPUT_FILE_NAME: &str = "output.mp4";

/// Structured storage address parsed from an `s3://<bucket>/<path>` locator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct S3Location {
    pub bucket: String,
    pub path: String,
}

impl S3Location {
    /// Parse an `s3://` URI into bucket and path parts.
    pub fn parse(uri: &str) -> Result<Self> {
        let rest = uri
            .strip_prefix("s3://")
            .ok_or_else(|| ReelGenError::MalformedLocator(uri.to_string()))?;

        let (bucket, path) = rest
            .split_once('/')
            .ok_or_else(|| ReelGenError::MalformedLocator(uri.to_string()))?;

        if bucket.is_empty() || path.is_empty() {
            return Err(ReelGenError::MalformedLocator(uri.to_string()));
        }

        Ok(S3Location {
            bucket: bucket.to_string(),
            path: path.to_string(),
        })
    }

    /// Object key of the generated clip inside this folder.
    pub fn output_key(&self) -> String {
        format!("{}/{}", self.path.trim_end_matches('/'), OUTPUT_FILE_NAME)
    }
}

impl std::fmt::Display for S3Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "s3://{}/{}", self.bucket, self.path)
    }
}

/// A finished generation: where the clip lives and a time-bounded URL for it.
#[derive(Debug, Clone)]
pub struct GeneratedVideo {
    pub location: S3Location,
    /// Presigned URL, valid for 24 hours after resolution.
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bucket_and_path() {
        let location = S3Location::parse("s3://ad-videos/reelgen-output/job-123").unwrap();
        assert_eq!(location.bucket, "ad-videos");
        assert_eq!(location.path, "reelgen-output/job-123");
    }

    #[test]
    fn output_key_appends_fixed_file_name() {
        let location = S3Location::parse("s3://bucket/prefix").unwrap();
        assert_eq!(location.output_key(), "prefix/output.mp4");

        let trailing = S3Location::parse("s3://bucket/prefix/").unwrap();
        assert_eq!(trailing.output_key(), "prefix/output.mp4");
    }

    #[test]
    fn rejects_locators_without_scheme_or_path() {
        assert!(matches!(
            S3Location::parse("https://bucket/prefix"),
            Err(ReelGenError::MalformedLocator(_))
        ));
        assert!(matches!(
            S3Location::parse("s3://bucket-only"),
            Err(ReelGenError::MalformedLocator(_))
        ));
        assert!(matches!(
            S3Location::parse("s3:///path"),
            Err(ReelGenError::MalformedLocator(_))
        ));
    }

    #[test]
    fn display_round_trips() {
        let location = S3Location::parse("s3://bucket/a/b").unwrap();
        assert_eq!(location.to_string(), "s3://bucket/a/b");
    }
}
