//! Retry policy for the hosting API
//!
//! Rate limits wait for the reset time the API reports. Server errors back
//! off exponentially.

use std::time::Duration;

/// Retry budget and backoff bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryConfig {
    /// Maximum number of retry attempts
    pub max_retries: u32,
    /// Initial backoff duration (doubles each retry)
    pub initial_backoff: Duration,
    /// Maximum backoff duration
    pub max_backoff: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 5,
            initial_backoff: Duration::from_millis(500),
            max_backoff: Duration::from_secs(30),
        }
    }
}

/// How to react to a response status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Use the response
    Success,
    /// Wait for the rate limit window to reset, then retry
    RateLimited {
        /// Reset time in seconds since the epoch, when reported
        reset_at: Option<i64>,
    },
    /// Back off and retry
    ServerError,
    /// Give up
    Fatal,
}

/// Classify a response by status and rate-limit headers
#[must_use]
pub const fn classify(status: u16, remaining: Option<u64>, reset_at: Option<i64>) -> Outcome {
    match status {
        200..=299 => Outcome::Success,
        429 => Outcome::RateLimited { reset_at },
        403 if matches!(remaining, Some(0)) => Outcome::RateLimited { reset_at },
        500..=599 => Outcome::ServerError,
        _ => Outcome::Fatal,
    }
}

/// Longest wait for a rate limit window, whatever the reset header says
pub const MAX_RATE_LIMIT_WAIT: Duration = Duration::from_secs(60 * 60);

/// Time left until the rate limit resets, capped at [`MAX_RATE_LIMIT_WAIT`]
///
/// Without a usable reset time, retry straight away.
#[must_use]
pub fn rate_limit_wait(reset_at: Option<i64>, now: i64) -> Duration {
    reset_at
        .and_then(|reset| u64::try_from(reset.saturating_sub(now)).ok())
        .map_or(Duration::ZERO, |secs| Duration::from_secs(secs).min(MAX_RATE_LIMIT_WAIT))
}

/// Exponential backoff sequence
#[derive(Debug, Clone, Copy)]
pub struct Backoff {
    next: Duration,
    max: Duration,
}

impl Backoff {
    /// Start a sequence from the configured bounds
    #[must_use]
    pub const fn new(config: &RetryConfig) -> Self {
        Self {
            next: config.initial_backoff,
            max: config.max_backoff,
        }
    }

    /// Next delay; each call doubles the following one up to the maximum
    pub fn next_delay(&mut self) -> Duration {
        let delay = self.next.min(self.max);
        self.next = (self.next * 2).min(self.max);
        delay
    }
}
