//! Caller-side retry of failed model calls
//!
//! Only [`ExtractionError::UpstreamFailure`] is retried. An answer that failed
//! parsing or shape checks is returned at once.

use std::future::Future;

use crate::model::PipelineConfig;
use crate::service::ExtractionError;

/// Bounded exponential backoff for upstream failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub initial_delay_ms: u64,
}

impl From<&PipelineConfig> for RetryPolicy {
    fn from(config: &PipelineConfig) -> Self {
        Self {
            max_retries: config.upstream_max_retries,
            initial_delay_ms: config.upstream_retry_delay_ms,
        }
    }
}

impl RetryPolicy {
    /// Delay before retry number `attempt + 1`
    pub fn delay_ms(&self, attempt: u32) -> u64 {
        self.initial_delay_ms.saturating_mul(1u64 << attempt.min(16))
    }

    /// Run `call`, retrying upstream failures with exponential backoff
    pub async fn run<T, F, Fut>(&self, operation: &str, mut call: F) -> Result<T, ExtractionError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, ExtractionError>>,
    {
        let mut attempt = 0;
        loop {
            match call().await {
                Ok(value) => {
                    if attempt > 0 {
                        tracing::info!(
                            operation = operation,
                            attempt = attempt,
                            "Model call succeeded after retry"
                        );
                    }
                    return Ok(value);
                }
                Err(e @ ExtractionError::UpstreamFailure(_)) if attempt < self.max_retries => {
                    let delay_ms = self.delay_ms(attempt);
                    tracing::warn!(
                        operation = operation,
                        attempt = attempt + 1,
                        max_retries = self.max_retries,
                        delay_ms = delay_ms,
                        error = %e,
                        "Model call failed, retrying"
                    );
                    tokio::time::sleep(tokio::time::Duration::from_millis(delay_ms)).await;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn policy(max_retries: u32) -> RetryPolicy {
        RetryPolicy {
            max_retries,
            initial_delay_ms: 1,
        }
    }

    #[test]
    fn test_delay_doubles_per_attempt() {
        let policy = RetryPolicy {
            max_retries: 3,
            initial_delay_ms: 500,
        };
        assert_eq!(policy.delay_ms(0), 500);
        assert_eq!(policy.delay_ms(1), 1000);
        assert_eq!(policy.delay_ms(2), 2000);
    }

    #[test]
    fn test_from_pipeline_config_defaults() {
        let policy = RetryPolicy::from(&PipelineConfig::default());
        assert_eq!(policy.max_retries, 2);
        assert_eq!(policy.initial_delay_ms, 500);
    }

    #[tokio::test]
    async fn test_upstream_failure_is_retried_until_success() {
        let calls = AtomicU32::new(0);
        let counter = &calls;
        let result = policy(2)
            .run("test", move || async move {
                if counter.fetch_add(1, Ordering::SeqCst) < 2 {
                    Err(ExtractionError::UpstreamFailure("timeout".to_string()))
                } else {
                    Ok("done")
                }
            })
            .await;

        assert_eq!(result, Ok("done"));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_retries_are_bounded() {
        let calls = AtomicU32::new(0);
        let counter = &calls;
        let result: Result<(), _> = policy(2)
            .run("test", move || async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Err(ExtractionError::UpstreamFailure("timeout".to_string()))
            })
            .await;

        assert!(matches!(result, Err(ExtractionError::UpstreamFailure(_))));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_parse_failure_is_not_retried() {
        let calls = AtomicU32::new(0);
        let counter = &calls;
        let result: Result<(), _> = policy(2)
            .run("test", move || async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Err(ExtractionError::ParseFailure("no JSON".to_string()))
            })
            .await;

        assert!(matches!(result, Err(ExtractionError::ParseFailure(_))));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
