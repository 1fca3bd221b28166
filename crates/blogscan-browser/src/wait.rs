//! Polling waits for page conditions.
//!
//! Conditions are async closures checked at a fixed interval until they
//! report success or the policy's timeout elapses. A condition that errors
//! is treated like one that is not yet satisfied: the page may still be
//! loading.

use crate::error::{BrowserError, Result};
use std::future::Future;
use std::time::{Duration, Instant};
use tokio::time::sleep;

/// Default timeout for wait operations (30 seconds).
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default poll interval for checking conditions (100ms).
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Timeout and poll interval for a wait.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitPolicy {
    pub timeout: Duration,
    pub poll_interval: Duration,
}

impl WaitPolicy {
    pub fn new(timeout: Duration, poll_interval: Duration) -> Self {
        Self {
            timeout,
            poll_interval,
        }
    }

    /// Custom timeout with the default poll interval.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self::new(timeout, DEFAULT_POLL_INTERVAL)
    }

    /// Builds a policy from millisecond values, as they appear in config files.
    pub fn from_millis(timeout_ms: u64, poll_interval_ms: u64) -> Self {
        Self::new(
            Duration::from_millis(timeout_ms),
            Duration::from_millis(poll_interval_ms.max(1)),
        )
    }
}

impl Default for WaitPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT, DEFAULT_POLL_INTERVAL)
    }
}

/// Polls `condition` until it returns `Ok(true)` or the timeout expires.
///
/// # Errors
///
/// Returns [`BrowserError::WaitTimeout`] naming `description` when the
/// condition is still unsatisfied after `policy.timeout`.
pub async fn poll_until<F, Fut>(condition: F, policy: WaitPolicy, description: &str) -> Result<()>
where
    F: Fn() -> Fut,
    Fut: Future<Output = Result<bool>>,
{
    let start = Instant::now();

    loop {
        if let Ok(true) = condition().await {
            return Ok(());
        }

        if start.elapsed() >= policy.timeout {
            return Err(BrowserError::WaitTimeout {
                condition: description.to_string(),
                timeout: policy.timeout,
            });
        }

        sleep(policy.poll_interval).await;
    }
}
