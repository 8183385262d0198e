//! Job polling state machine.
//!
//! A submitted job is queried at a fixed cadence until it reaches a
//! terminal state. Progress reported along the way is a wall-clock
//! estimate against the expected duration, capped below 100%; it says
//! nothing about actual remote progress. The wait is bounded: a job that
//! never terminates surfaces as a timeout instead of blocking forever.

use std::time::{Duration, Instant};

use async_trait::async_trait;

use crate::bedrock::video_client::VideoClient;
use crate::config::PollSettings;
use crate::error::{ReelGenError, Result};
use crate::models::{JobHandle, JobPoll, JobStatus, S3Location};

/// Highest progress value reported before the terminal success transition.
pub const PROGRESS_CAP: f32 = 0.99;

/// Phrase the service embeds in failure messages when a request was
/// rejected by content-safety filtering.
const CONTENT_FILTER_MARKER: &str = "content filters";

/// Anything that can report the status of a job. Implemented by
/// [`VideoClient`] against the live service and by scripted sources in
/// tests.
#[async_trait]
pub trait JobStatusSource {
    async fn job_status(&self, handle: &JobHandle) -> Result<JobPoll>;
}

#[async_trait]
impl JobStatusSource for VideoClient {
    async fn job_status(&self, handle: &JobHandle) -> Result<JobPoll> {
        VideoClient::job_status(self, handle).await
    }
}

/// Cosmetic progress estimate: elapsed time over expected duration, capped
/// below completion.
pub fn progress_estimate(elapsed: Duration, expected: Duration) -> f32 {
    if expected.is_zero() {
        return PROGRESS_CAP;
    }
    (elapsed.as_secs_f32() / expected.as_secs_f32()).min(PROGRESS_CAP)
}

/// Turn a terminal failure message into the matching error kind.
pub fn classify_failure(message: Option<String>) -> ReelGenError {
    let message = message.unwrap_or_else(|| "Unknown error".to_string());
    if message.to_lowercase().contains(CONTENT_FILTER_MARKER) {
        ReelGenError::ContentFiltered(message)
    } else {
        ReelGenError::GenerationFailed(message)
    }
}

/// Poll a job until it reaches a terminal state.
///
/// Returns the parsed output location on success. A failed job maps to
/// [`ReelGenError::ContentFiltered`] or [`ReelGenError::GenerationFailed`];
/// a transport failure during any poll is terminal immediately (no retry
/// of the poll itself); exceeding `max_wait` yields
/// [`ReelGenError::Timeout`]. `on_progress` is invoked once per poll and a
/// final time with `1.0` on success.
pub async fn poll_until_terminal<S, F>(
    source: &S,
    handle: &JobHandle,
    settings: &PollSettings,
    mut on_progress: F,
) -> Result<S3Location>
where
    S: JobStatusSource + Sync + ?Sized,
    F: FnMut(f32) + Send,
{
    let started = Instant::now();

    loop {
        let poll = source.job_status(handle).await?;

        match poll.status {
            JobStatus::Completed => {
                on_progress(1.0);
                let uri = poll.output_uri.ok_or_else(|| {
                    ReelGenError::Polling("job completed without an output location".to_string())
                })?;
                return S3Location::parse(&uri);
            }
            JobStatus::Failed => return Err(classify_failure(poll.failure_message)),
            JobStatus::Pending | JobStatus::InProgress => {
                on_progress(progress_estimate(started.elapsed(), settings.expected_duration));

                if let Some(max_wait) = settings.max_wait {
                    if started.elapsed() >= max_wait {
                        log::warn!(
                            "⏰ Job {} still running after {:?}, giving up",
                            handle,
                            max_wait
                        );
                        return Err(ReelGenError::Timeout(max_wait));
                    }
                }

                tokio::time::sleep(settings.interval).await;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    struct ScriptedSource {
        polls: Mutex<VecDeque<Result<JobPoll>>>,
    }

    impl ScriptedSource {
        fn new(polls: Vec<Result<JobPoll>>) -> Self {
            Self {
                polls: Mutex::new(polls.into()),
            }
        }
    }

    #[async_trait]
    impl JobStatusSource for ScriptedSource {
        async fn job_status(&self, _handle: &JobHandle) -> Result<JobPoll> {
            self.polls
                .lock()
                .unwrap()
                .pop_front()
                .expect("status script exhausted")
        }
    }

    fn fast_settings() -> PollSettings {
        PollSettings::new()
            .with_interval(Duration::ZERO)
            .with_expected_duration(Duration::from_secs(300))
            .with_max_wait(Some(Duration::from_secs(60)))
    }

    fn handle() -> JobHandle {
        JobHandle::new("arn:aws:bedrock:us-east-1:123456789012:async-invoke/abc123")
    }

    #[tokio::test]
    async fn pending_in_progress_completed_returns_location() {
        let source = ScriptedSource::new(vec![
            Ok(JobPoll {
                status: JobStatus::Pending,
                failure_message: None,
                output_uri: None,
            }),
            Ok(JobPoll::in_progress()),
            Ok(JobPoll::completed("s3://ad-videos/reelgen-output/job-1")),
        ]);

        let mut seen = Vec::new();
        let location = poll_until_terminal(&source, &handle(), &fast_settings(), |p| seen.push(p))
            .await
            .unwrap();

        assert_eq!(location.bucket, "ad-videos");
        assert_eq!(location.output_key(), "reelgen-output/job-1/output.mp4");

        // Never full before the terminal transition, exactly full on it.
        let (last, before) = seen.split_last().unwrap();
        assert_eq!(*last, 1.0);
        assert!(before.iter().all(|p| *p < 1.0));
    }

    #[tokio::test]
    async fn content_filter_failures_are_distinguished() {
        let source = ScriptedSource::new(vec![Ok(JobPoll::failed(
            "Request blocked by AWS Content Filters.",
        ))]);

        let result = poll_until_terminal(&source, &handle(), &fast_settings(), |_| {}).await;
        assert!(matches!(result, Err(ReelGenError::ContentFiltered(_))));
    }

    #[tokio::test]
    async fn other_failures_are_generic() {
        let source =
            ScriptedSource::new(vec![Ok(JobPoll::failed("internal capacity error"))]);

        let result = poll_until_terminal(&source, &handle(), &fast_settings(), |_| {}).await;
        assert!(matches!(result, Err(ReelGenError::GenerationFailed(_))));
    }

    #[tokio::test]
    async fn transport_errors_terminate_immediately() {
        let source = ScriptedSource::new(vec![
            Ok(JobPoll::in_progress()),
            Err(ReelGenError::Polling("connection reset".to_string())),
        ]);

        let result = poll_until_terminal(&source, &handle(), &fast_settings(), |_| {}).await;
        assert!(matches!(result, Err(ReelGenError::Polling(_))));
    }

    #[tokio::test]
    async fn exceeding_max_wait_times_out() {
        let source = ScriptedSource::new(vec![Ok(JobPoll::in_progress())]);
        let settings = fast_settings().with_max_wait(Some(Duration::ZERO));

        let result = poll_until_terminal(&source, &handle(), &settings, |_| {}).await;
        assert!(matches!(result, Err(ReelGenError::Timeout(_))));
    }

    #[tokio::test]
    async fn completion_without_location_is_a_polling_error() {
        let source = ScriptedSource::new(vec![Ok(JobPoll {
            status: JobStatus::Completed,
            failure_message: None,
            output_uri: None,
        })]);

        let result = poll_until_terminal(&source, &handle(), &fast_settings(), |_| {}).await;
        assert!(matches!(result, Err(ReelGenError::Polling(_))));
    }

    #[test]
    fn progress_never_reaches_full_while_waiting() {
        let expected = Duration::from_secs(300);
        assert_eq!(progress_estimate(Duration::ZERO, expected), 0.0);
        assert!(progress_estimate(Duration::from_secs(150), expected) < 0.51);
        assert_eq!(progress_estimate(Duration::from_secs(10_000), expected), PROGRESS_CAP);
        assert_eq!(progress_estimate(Duration::from_secs(1), Duration::ZERO), PROGRESS_CAP);
    }

    #[test]
    fn classification_is_case_insensitive_and_defaults_to_generic() {
        assert!(matches!(
            classify_failure(Some("Blocked by CONTENT FILTERS".to_string())),
            ReelGenError::ContentFiltered(_)
        ));
        assert!(matches!(
            classify_failure(Some("quota exceeded".to_string())),
            ReelGenError::GenerationFailed(_)
        ));
        match classify_failure(None) {
            ReelGenError::GenerationFailed(message) => assert_eq!(message, "Unknown error"),
            other => panic!("unexpected classification: {:?}", other),
        }
    }
}
