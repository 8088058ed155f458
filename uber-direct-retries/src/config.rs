//! Retry configuration.

use crate::error::Retryable;
use std::time::Duration;

/// HTTP status returned by the upstream gateway when a backend is too slow.
pub const GATEWAY_TIMEOUT: u16 = 504;

/// Configuration for retry behavior.
#[derive(Debug, Clone, PartialEq)]
pub struct RetryConfig {
    /// Maximum number of retries after the first attempt.
    pub max_retries: u32,
    /// Wait strategy.
    pub wait: WaitStrategy,
    /// Retry condition.
    pub retry_on: RetryCondition,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            wait: WaitStrategy::Fixed(Duration::from_secs(5)),
            retry_on: RetryCondition::new().on_gateway_timeout(),
        }
    }
}

impl RetryConfig {
    /// Create a new default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set max retries.
    #[must_use]
    pub fn max_retries(mut self, n: u32) -> Self {
        self.max_retries = n;
        self
    }

    /// Set the wait strategy.
    #[must_use]
    pub fn wait(mut self, strategy: WaitStrategy) -> Self {
        self.wait = strategy;
        self
    }

    /// Use a fixed delay.
    #[must_use]
    pub fn fixed(mut self, delay: Duration) -> Self {
        self.wait = WaitStrategy::Fixed(delay);
        self
    }

    /// Set retry condition.
    #[must_use]
    pub fn retry_on(mut self, condition: RetryCondition) -> Self {
        self.retry_on = condition;
        self
    }

    /// Three retries, five seconds apart, on `504 Gateway Timeout` only.
    pub fn for_gateway_timeouts() -> Self {
        Self::default()
    }

    /// Create config that never retries.
    pub fn no_retry() -> Self {
        Self::new().max_retries(0).wait(WaitStrategy::None)
    }

    /// Total number of attempts, including the first one.
    pub fn max_attempts(&self) -> u32 {
        self.max_retries.saturating_add(1)
    }
}

/// Strategy for waiting between retries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitStrategy {
    /// No waiting.
    None,
    /// Fixed delay before every retry.
    Fixed(Duration),
}

impl WaitStrategy {
    /// Calculate the wait duration after the given (1-indexed) failed attempt.
    pub fn calculate(&self, _attempt: u32) -> Duration {
        match self {
            WaitStrategy::None => Duration::ZERO,
            WaitStrategy::Fixed(d) => *d,
        }
    }
}

/// Condition for retrying.
///
/// Only the listed status codes are retried; failures without a status
/// (transport errors, decode errors, cancellation) never are.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RetryCondition {
    /// HTTP status codes to retry on.
    pub on_status_codes: Vec<u16>,
}

impl RetryCondition {
    /// Create a new empty condition.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add status codes to retry on.
    #[must_use]
    pub fn on_status(mut self, codes: impl IntoIterator<Item = u16>) -> Self {
        self.on_status_codes.extend(codes);
        self
    }

    /// Retry on `504 Gateway Timeout`.
    #[must_use]
    pub fn on_gateway_timeout(self) -> Self {
        self.on_status([GATEWAY_TIMEOUT])
    }

    /// Check if an error should be retried.
    pub fn should_retry<E: Retryable + ?Sized>(&self, error: &E) -> bool {
        error
            .status()
            .is_some_and(|status| self.on_status_codes.contains(&status))
    }
}
