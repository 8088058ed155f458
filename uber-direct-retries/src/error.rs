//! Error classification for retries.

use thiserror::Error;

/// Errors the retry executor can classify.
///
/// The executor only needs to know which HTTP status, if any, produced the
/// failure. Everything without a status is treated as terminal unless a
/// [`RetryCondition`](crate::RetryCondition) says otherwise.
pub trait Retryable: std::fmt::Display {
    /// HTTP status code attached to this failure.
    fn status(&self) -> Option<u16> {
        None
    }
}

/// A retry sequence was aborted through its cancellation token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Error)]
#[error("Retry sequence cancelled")]
pub struct Cancelled;

impl Retryable for Cancelled {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancelled_has_no_status() {
        assert_eq!(Cancelled.status(), None);
        assert_eq!(Cancelled.to_string(), "Retry sequence cancelled");
    }
}
