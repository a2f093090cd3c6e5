//! Fixed-delay retry loop
//!
//! The loop is parameterized by a policy (attempt budget and delay) and a
//! predicate deciding which errors are worth another attempt. Any error the
//! predicate rejects is returned at once.

use std::future::Future;
use std::time::Duration;

/// Attempt budget and delay between attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_attempts: u32,
    delay: Duration,
}

impl RetryPolicy {
    /// Total attempts PubChem searches get by default.
    pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

    /// Fixed wait between attempts by default.
    pub const DEFAULT_DELAY: Duration = Duration::from_secs(5);

    /// Creates a policy. `max_attempts` is clamped to at least one.
    #[must_use]
    pub const fn new(max_attempts: u32, delay: Duration) -> Self {
        Self {
            max_attempts: if max_attempts == 0 { 1 } else { max_attempts },
            delay,
        }
    }

    /// A policy that never retries.
    #[must_use]
    pub const fn no_retry() -> Self {
        Self::new(1, Duration::ZERO)
    }

    /// Total number of attempts, first one included.
    #[must_use]
    pub const fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Wait between two attempts.
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_ATTEMPTS, Self::DEFAULT_DELAY)
    }
}

/// Runs `operation` until it succeeds, fails with an error `should_retry`
/// rejects, or the attempt budget is spent.
///
/// `operation` receives the 1-based attempt number. The error of the last
/// attempt is returned when the budget runs out.
///
/// # Errors
///
/// Returns the first non-retryable error, or the last retryable one.
pub async fn retry<T, E, F, Fut, P>(
    policy: &RetryPolicy,
    should_retry: P,
    mut operation: F,
) -> Result<T, E>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T, E>>,
    P: Fn(&E) -> bool,
    E: std::fmt::Display,
{
    let mut attempt = 1;
    loop {
        match operation(attempt).await {
            Ok(value) => return Ok(value),
            Err(error) if attempt < policy.max_attempts && should_retry(&error) => {
                tracing::warn!(
                    attempt,
                    max_attempts = policy.max_attempts,
                    delay_ms = u64::try_from(policy.delay.as_millis()).unwrap_or(u64::MAX),
                    %error,
                    "transient failure, retrying"
                );
                tokio::time::sleep(policy.delay).await;
                attempt += 1;
            }
            Err(error) => {
                if should_retry(&error) {
                    tracing::info!(attempts = attempt, %error, "retry budget exhausted");
                }
                return Err(error);
            }
        }
    }
}
