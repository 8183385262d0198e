use std::env;
use std::time::Duration;

pub const DEFAULT_MODEL_ID: &str = "amazon.nova-reel-v1:1";
pub const DEFAULT_REGION: &str = "us-east-1";

/// Fixed polling cadence between status queries.
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 15;
/// Wall-clock duration a job usually takes, used for the cosmetic progress
/// estimate only.
pub const DEFAULT_EXPECTED_DURATION_SECS: u64 = 300;
/// Ceiling on the total wait before the poller gives up with a timeout.
pub const DEFAULT_MAX_WAIT_SECS: u64 = 1800;

#[derive(Debug, Clone)]
pub struct AwsSettings {
    pub region: Option<String>,
    pub access_key: Option<String>,
    pub secret_key: Option<String>,
}

impl Default for AwsSettings {
    fn default() -> Self {
        AwsSettings {
            region: None,
            access_key: None,
            secret_key: None,
        }
    }
}

impl AwsSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let region = env::var("AWS_REGION")
            .or_else(|_| env::var("AWS_DEFAULT_REGION"))
            .ok();
        let access_key = env::var("AWS_ACCESS_KEY_ID").ok();
        let secret_key = env::var("AWS_SECRET_ACCESS_KEY").ok();

        AwsSettings {
            region,
            access_key,
            secret_key,
        }
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn with_credentials(
        mut self,
        access_key: impl Into<String>,
        secret_key: impl Into<String>,
    ) -> Self {
        self.access_key = Some(access_key.into());
        self.secret_key = Some(secret_key.into());
        self
    }
}

/// Generation parameters sent with every job.
///
/// Held as data rather than inline literals so a future variant (other
/// duration or resolution) is a config change, not a code change. The
/// defaults are the only combination the current model contract exercises.
#[derive(Debug, Clone)]
pub struct GenerationSettings {
    pub duration_seconds: u32,
    pub fps: u32,
    pub dimension: String,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        GenerationSettings {
            duration_seconds: 6,
            fps: 24,
            dimension: "1280x720".to_string(),
        }
    }
}

impl GenerationSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_duration(mut self, seconds: u32) -> Self {
        self.duration_seconds = seconds;
        self
    }

    pub fn with_fps(mut self, fps: u32) -> Self {
        self.fps = fps;
        self
    }

    pub fn with_dimension(mut self, dimension: impl Into<String>) -> Self {
        self.dimension = dimension.into();
        self
    }
}

/// Polling behavior for the job state machine.
///
/// `max_wait: None` restores unbounded waiting; the default is bounded so a
/// job that never reaches a terminal state surfaces as a timeout instead of
/// blocking the session forever.
#[derive(Debug, Clone)]
pub struct PollSettings {
    pub interval: Duration,
    pub expected_duration: Duration,
    pub max_wait: Option<Duration>,
}

impl Default for PollSettings {
    fn default() -> Self {
        PollSettings {
            interval: Duration::from_secs(DEFAULT_POLL_INTERVAL_SECS),
            expected_duration: Duration::from_secs(DEFAULT_EXPECTED_DURATION_SECS),
            max_wait: Some(Duration::from_secs(DEFAULT_MAX_WAIT_SECS)),
        }
    }
}

impl PollSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_expected_duration(mut self, expected: Duration) -> Self {
        self.expected_duration = expected;
        self
    }

    pub fn with_max_wait(mut self, max_wait: Option<Duration>) -> Self {
        self.max_wait = max_wait;
        self
    }
}

/// Fixed destination template for generated artifacts. The service writes
/// its result under this folder, always as `output.mp4`.
#[derive(Debug, Clone)]
pub struct OutputSettings {
    pub bucket: String,
    pub prefix: String,
}

impl OutputSettings {
    pub fn new(bucket: impl Into<String>, prefix: impl Into<String>) -> Self {
        OutputSettings {
            bucket: bucket.into(),
            prefix: prefix.into(),
        }
    }

    pub fn s3_uri(&self) -> String {
        format!("s3://{}/{}", self.bucket, self.prefix)
    }
}

#[derive(Debug, Clone)]
pub struct ReelConfig {
    pub aws: AwsSettings,
    pub model_id: String,
    pub generation: GenerationSettings,
    pub poll: PollSettings,
    pub output: OutputSettings,
    pub catalog_bucket: Option<String>,
}

impl Default for ReelConfig {
    fn default() -> Self {
        ReelConfig {
            aws: AwsSettings::default(),
            model_id: DEFAULT_MODEL_ID.to_string(),
            generation: GenerationSettings::default(),
            poll: PollSettings::default(),
            output: OutputSettings::new("", ""),
            catalog_bucket: None,
        }
    }
}

impl ReelConfig {
    pub fn new(output: OutputSettings) -> Self {
        ReelConfig {
            output,
            ..Self::default()
        }
    }

    pub fn from_env() -> Self {
        let bucket = env::var("REELGEN_OUTPUT_BUCKET").unwrap_or_default();
        let prefix =
            env::var("REELGEN_OUTPUT_PREFIX").unwrap_or_else(|_| "reelgen-output/".to_string());
        let model_id = env::var("REELGEN_MODEL_ID").unwrap_or_else(|_| DEFAULT_MODEL_ID.to_string());
        let catalog_bucket = env::var("REELGEN_CATALOG_BUCKET").ok();

        let mut poll = PollSettings::default();
        if let Some(secs) = env::var("REELGEN_POLL_INTERVAL_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
        {
            poll.interval = Duration::from_secs(secs);
        }
        if let Some(secs) = env::var("REELGEN_MAX_WAIT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
        {
            poll.max_wait = Some(Duration::from_secs(secs));
        }

        ReelConfig {
            aws: AwsSettings::from_env(),
            model_id,
            generation: GenerationSettings::default(),
            poll,
            output: OutputSettings::new(bucket, prefix),
            catalog_bucket,
        }
    }

    pub fn with_aws(mut self, aws: AwsSettings) -> Self {
        self.aws = aws;
        self
    }

    pub fn with_model(mut self, model_id: impl Into<String>) -> Self {
        self.model_id = model_id.into();
        self
    }

    pub fn with_generation(mut self, generation: GenerationSettings) -> Self {
        self.generation = generation;
        self
    }

    pub fn with_poll(mut self, poll: PollSettings) -> Self {
        self.poll = poll;
        self
    }

    pub fn with_catalog_bucket(mut self, bucket: impl Into<String>) -> Self {
        self.catalog_bucket = Some(bucket.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generation_defaults_match_model_contract() {
        let settings = GenerationSettings::default();
        assert_eq!(settings.duration_seconds, 6);
        assert_eq!(settings.fps, 24);
        assert_eq!(settings.dimension, "1280x720");
    }

    #[test]
    fn poll_defaults_are_bounded() {
        let poll = PollSettings::default();
        assert_eq!(poll.interval, Duration::from_secs(15));
        assert_eq!(poll.expected_duration, Duration::from_secs(300));
        assert_eq!(poll.max_wait, Some(Duration::from_secs(1800)));
    }

    #[test]
    fn output_settings_render_s3_uri() {
        let output = OutputSettings::new("ad-videos", "reelgen-output/");
        assert_eq!(output.s3_uri(), "s3://ad-videos/reelgen-output/");
    }

    #[test]
    fn config_builders_compose() {
        let config = ReelConfig::new(OutputSettings::new("bucket", "prefix/"))
            .with_model("amazon.nova-reel-v1:0")
            .with_catalog_bucket("catalog")
            .with_aws(AwsSettings::new().with_region("eu-west-1"));

        assert_eq!(config.model_id, "amazon.nova-reel-v1:0");
        assert_eq!(config.catalog_bucket.as_deref(), Some("catalog"));
        assert_eq!(config.aws.region.as_deref(), Some("eu-west-1"));
    }
}
