//! Retry with capped exponential backoff

use std::{future::Future, time::Duration};

use tracing::{debug, warn};

use crate::error::{HttpError, Result};

/// Delay growth between retries
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Backoff {
    /// Wait before the first retry
    pub first: Duration,
    /// No wait exceeds this
    pub ceiling: Duration,
    /// Growth per retry
    pub factor: f64,
}

impl Default for Backoff {
    fn default() -> Self {
        Self {
            first: Duration::from_millis(500),
            ceiling: Duration::from_secs(30),
            factor: 2.0,
        }
    }
}

impl Backoff {
    /// Wait before retry number `retry` (0-based)
    pub fn delay(&self, retry: u32) -> Duration {
        let scaled = self.first.as_secs_f64() * self.factor.powi(retry.min(i32::MAX as u32) as i32);
        if !scaled.is_finite() || scaled >= self.ceiling.as_secs_f64() {
            self.ceiling
        } else {
            Duration::from_secs_f64(scaled.max(0.0))
        }
    }
}

/// How often and how patiently to retry transient failures
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RetryPolicy {
    /// Retries after the first attempt
    pub retries: u32,
    pub backoff: Backoff,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            retries: 3,
            backoff: Backoff::default(),
        }
    }
}

impl RetryPolicy {
    /// Single attempt
    pub fn none() -> Self {
        Self {
            retries: 0,
            ..Default::default()
        }
    }
}

/// Runs an operation under a [`RetryPolicy`]
///
/// Errors that [`HttpError::is_retryable`] rejects come back untouched, so a
/// 404 stays a 404 for callers that branch on it.
#[derive(Debug, Clone)]
pub struct RetryMiddleware {
    policy: RetryPolicy,
}

impl RetryMiddleware {
    pub fn new(policy: RetryPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// Call `operation` until it succeeds, fails permanently, or retries run out
    pub async fn execute<F, Fut, T>(&self, operation: F) -> Result<T>
    where
        F: Fn() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let attempts = self.policy.retries.saturating_add(1);
        let mut retry = 0;
        loop {
            let err = match operation().await {
                Ok(value) => return Ok(value),
                Err(err) if err.is_retryable() => err,
                Err(err) => {
                    debug!("Giving up on permanent failure: {}", err);
                    return Err(err);
                }
            };

            if retry >= self.policy.retries {
                return Err(HttpError::RetryLimitExceeded {
                    attempts,
                    last_error: err.to_string(),
                });
            }

            let wait = self.policy.backoff.delay(retry);
            warn!("Attempt {}/{} failed, next in {:?}: {}", retry + 1, attempts, wait, err);
            tokio::time::sleep(wait).await;
            retry += 1;
        }
    }
}
