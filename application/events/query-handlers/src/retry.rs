use std::{future::Future, time::Duration};

use events_errors::SourceError;
use tracing::warn;

/// Bounded retry with exponential backoff.
///
/// The n-th retry waits `base * 2^n`, so the defaults (3 retries, 1s base)
/// wait 2s, 4s and 8s for at most four attempts in total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub retries: u32,
    pub base: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            retries: 3,
            base: Duration::from_secs(1),
        }
    }
}

impl RetryPolicy {
    pub fn new(retries: u32, base: Duration) -> Self { Self { retries, base } }

    /// Reads `RETRY_COUNT` and `RETRY_BASE_MILLIS`, keeping defaults for
    /// anything unset or unparsable.
    pub fn from_env() -> Self {
        let mut policy = Self::default();

        if let Ok(raw) = std::env::var("RETRY_COUNT") {
            match raw.parse() {
                Ok(retries) => policy.retries = retries,
                Err(_) => warn!(value = %raw, "Ignoring invalid RETRY_COUNT"),
            }
        }

        if let Ok(raw) = std::env::var("RETRY_BASE_MILLIS") {
            match raw.parse() {
                Ok(millis) => policy.base = Duration::from_millis(millis),
                Err(_) => {
                    warn!(value = %raw, "Ignoring invalid RETRY_BASE_MILLIS")
                }
            }
        }

        policy
    }

    pub fn max_attempts(&self) -> u32 { self.retries.saturating_add(1) }

    /// Wait before the given retry, counting retries from 1.
    pub fn delay_for(&self, retry_attempt: u32) -> Duration {
        let factor = 2u32.saturating_pow(retry_attempt);
        self.base.saturating_mul(factor)
    }

    /// Runs `operation` until it succeeds, fails with a non-retryable fault,
    /// or the retry budget is spent. The last fault is returned.
    pub async fn execute<T, F, Fut>(
        &self, mut operation: F,
    ) -> Result<T, SourceError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, SourceError>>,
    {
        let mut retry_attempt = 0;
        loop {
            match operation().await {
                Ok(value) => return Ok(value),
                Err(err)
                    if err.is_retryable() && retry_attempt < self.retries =>
                {
                    retry_attempt += 1;
                    let delay = self.delay_for(retry_attempt);
                    warn!(
                        retry_attempt,
                        delay_secs = delay.as_secs_f64(),
                        fault = ?err.kind(),
                        error = %err,
                        "Failed to fetch data. Retrying in {} seconds. Retry \
                         attempt {retry_attempt}",
                        delay.as_secs_f64()
                    );
                    tokio::time::sleep(delay).await;
                }
                Err(err) => return Err(err),
            }
        }
    }
}
