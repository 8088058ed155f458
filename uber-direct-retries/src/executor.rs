//! Retry executor for running operations with retries.

use crate::config::RetryConfig;
use crate::error::{Cancelled, Retryable};
use std::future::{pending, Future};
use std::time::Duration;
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// State of a retry attempt.
#[derive(Debug, Clone, Default)]
pub struct RetryState {
    /// Current attempt number (1-indexed).
    pub attempt: u32,
    /// Last error message.
    pub last_error: Option<String>,
    /// Total time spent waiting.
    pub total_wait_time: Duration,
    /// History of attempts.
    pub history: Vec<AttemptInfo>,
}

/// Information about a single attempt.
#[derive(Debug, Clone)]
pub struct AttemptInfo {
    /// Attempt number.
    pub attempt: u32,
    /// Whether it succeeded.
    pub success: bool,
    /// Error message if failed.
    pub error: Option<String>,
    /// Time waited after this attempt.
    pub wait_time: Duration,
}

/// Execute an operation with retries.
///
/// # Example
///
/// ```ignore
/// use uber_direct_retries::{with_retry, RetryConfig};
///
/// let config = RetryConfig::for_gateway_timeouts();
/// let result = with_retry(&config, || async {
///     // Your async operation here
///     Ok("success")
/// }).await?;
/// ```
pub async fn with_retry<F, Fut, T, E>(config: &RetryConfig, operation: F) -> Result<T, E>
where
    F: Fn() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Retryable,
{
    run(config, operation, pending()).await.0
}

/// Execute with retries and get state information.
pub async fn with_retry_state<F, Fut, T, E>(
    config: &RetryConfig,
    operation: F,
) -> (Result<T, E>, RetryState)
where
    F: Fn() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Retryable,
{
    run(config, operation, pending()).await
}

/// Execute with retries, stopping as soon as `token` is cancelled.
///
/// Cancellation interrupts both an in-flight attempt and the wait between
/// attempts. The returned state records the attempts started so far.
pub async fn with_retry_cancellable<F, Fut, T, E>(
    config: &RetryConfig,
    token: &CancellationToken,
    operation: F,
) -> (Result<T, E>, RetryState)
where
    F: Fn() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Retryable + From<Cancelled>,
{
    let cancelled = async move {
        token.cancelled().await;
        E::from(Cancelled)
    };
    run(config, operation, cancelled).await
}

async fn run<F, Fut, T, E, C>(
    config: &RetryConfig,
    operation: F,
    cancelled: C,
) -> (Result<T, E>, RetryState)
where
    F: Fn() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Retryable,
    C: Future<Output = E>,
{
    let mut state = RetryState::default();
    let max_attempts = config.max_attempts();
    tokio::pin!(cancelled);

    loop {
        state.attempt += 1;

        debug!(
            attempt = state.attempt,
            max_attempts,
            max_retries = config.max_retries,
            "Executing retry attempt"
        );

        let outcome = tokio::select! {
            biased;
            error = &mut cancelled => {
                debug!(attempt = state.attempt, "Retry sequence cancelled");
                return (Err(error), state);
            }
            outcome = operation() => outcome,
        };

        match outcome {
            Ok(result) => {
                state.history.push(AttemptInfo {
                    attempt: state.attempt,
                    success: true,
                    error: None,
                    wait_time: Duration::ZERO,
                });
                return (Ok(result), state);
            }
            Err(error) => {
                let retryable = config.retry_on.should_retry(&error);

                if !retryable || state.attempt >= max_attempts {
                    if retryable {
                        warn!(
                            attempt = state.attempt,
                            error = %error,
                            "Retries exhausted"
                        );
                    } else {
                        debug!(
                            attempt = state.attempt,
                            error = %error,
                            "Error not retryable"
                        );
                    }
                    state.last_error = Some(error.to_string());
                    state.history.push(AttemptInfo {
                        attempt: state.attempt,
                        success: false,
                        error: Some(error.to_string()),
                        wait_time: Duration::ZERO,
                    });
                    return (Err(error), state);
                }

                let wait = config.wait.calculate(state.attempt);
                state.total_wait_time += wait;
                state.last_error = Some(error.to_string());

                state.history.push(AttemptInfo {
                    attempt: state.attempt,
                    success: false,
                    error: Some(error.to_string()),
                    wait_time: wait,
                });

                warn!(
                    attempt = state.attempt,
                    wait_ms = wait.as_millis(),
                    error = %error,
                    "Retrying after error"
                );

                tokio::select! {
                    biased;
                    error = &mut cancelled => {
                        debug!(attempt = state.attempt, "Retry sequence cancelled while waiting");
                        return (Err(error), state);
                    }
                    () = sleep(wait) => {}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WaitStrategy;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;
    use tokio_test::{assert_err, assert_ok};

    #[derive(Debug, PartialEq)]
    enum TestError {
        Http(u16),
        Network,
        Cancelled,
    }

    impl std::fmt::Display for TestError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            match self {
                TestError::Http(code) => write!(f, "HTTP {code}"),
                TestError::Network => write!(f, "network"),
                TestError::Cancelled => write!(f, "cancelled"),
            }
        }
    }

    impl Retryable for TestError {
        fn status(&self) -> Option<u16> {
            match self {
                TestError::Http(code) => Some(*code),
                _ => None,
            }
        }
    }

    impl From<Cancelled> for TestError {
        fn from(_: Cancelled) -> Self {
            TestError::Cancelled
        }
    }

    fn fast_config() -> RetryConfig {
        RetryConfig::new().fixed(Duration::from_millis(1))
    }

    #[tokio::test]
    async fn test_with_retry_immediate_success() {
        let config = RetryConfig::new();
        let result = with_retry(&config, || async { Ok::<_, TestError>(42) }).await;
        assert_eq!(assert_ok!(result), 42);
    }

    #[tokio::test]
    async fn test_with_retry_eventual_success() {
        let config = fast_config();

        let attempts = Arc::new(AtomicU32::new(0));
        let attempts_clone = attempts.clone();

        let result = with_retry(&config, || {
            let attempts = attempts_clone.clone();
            async move {
                let n = attempts.fetch_add(1, Ordering::SeqCst);
                if n < 2 {
                    Err(TestError::Http(504))
                } else {
                    Ok(42)
                }
            }
        })
        .await;

        assert_eq!(assert_ok!(result), 42);
        assert_eq!(attempts.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_with_retry_exhausted_after_four_attempts() {
        let config = fast_config();

        let attempts = Arc::new(AtomicU32::new(0));
        let attempts_clone = attempts.clone();

        let (result, state) = with_retry_state(&config, || {
            let attempts = attempts_clone.clone();
            async move {
                attempts.fetch_add(1, Ordering::SeqCst);
                Err::<i32, _>(TestError::Http(504))
            }
        })
        .await;

        assert_eq!(assert_err!(result), TestError::Http(504));
        assert_eq!(attempts.load(Ordering::SeqCst), 4);
        assert_eq!(state.attempt, 4);
        assert_eq!(state.history.len(), 4);
        assert_eq!(state.last_error.as_deref(), Some("HTTP 504"));
    }

    #[tokio::test]
    async fn test_with_retry_non_retryable_status() {
        let config = fast_config();

        let attempts = Arc::new(AtomicU32::new(0));
        let attempts_clone = attempts.clone();

        let result = with_retry(&config, || {
            let attempts = attempts_clone.clone();
            async move {
                attempts.fetch_add(1, Ordering::SeqCst);
                Err::<i32, _>(TestError::Http(500))
            }
        })
        .await;

        assert_eq!(assert_err!(result), TestError::Http(500));
        // 500 is not a gateway timeout
        assert_eq!(attempts.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_with_retry_network_error_not_retried() {
        let config = fast_config();
        let (result, state) =
            with_retry_state(&config, || async { Err::<i32, _>(TestError::Network) }).await;

        assert_eq!(assert_err!(result), TestError::Network);
        assert_eq!(state.attempt, 1);
    }

    #[tokio::test]
    async fn test_retry_state() {
        let config = fast_config();

        let attempts = Arc::new(AtomicU32::new(0));
        let attempts_clone = attempts.clone();

        let (result, state) = with_retry_state(&config, || {
            let attempts = attempts_clone.clone();
            async move {
                let n = attempts.fetch_add(1, Ordering::SeqCst);
                if n < 1 {
                    Err(TestError::Http(504))
                } else {
                    Ok(42)
                }
            }
        })
        .await;

        assert!(result.is_ok());
        assert_eq!(state.attempt, 2);
        assert_eq!(state.history.len(), 2);
        assert!(!state.history[0].success);
        assert!(state.history[1].success);
        assert_eq!(state.total_wait_time, Duration::from_millis(1));
    }

    #[tokio::test(start_paused = true)]
    async fn test_fixed_wait_between_attempts() {
        let config = RetryConfig::for_gateway_timeouts();
        let started = tokio::time::Instant::now();

        let (result, state) =
            with_retry_state(&config, || async { Err::<i32, _>(TestError::Http(504)) }).await;

        assert!(result.is_err());
        assert_eq!(state.total_wait_time, Duration::from_secs(15));
        assert!(started.elapsed() >= Duration::from_secs(15));
    }

    #[tokio::test]
    async fn test_no_retry_config() {
        let config = RetryConfig::no_retry();
        let (result, state) =
            with_retry_state(&config, || async { Err::<i32, _>(TestError::Http(504)) }).await;

        assert!(result.is_err());
        assert_eq!(state.attempt, 1);
    }

    #[tokio::test]
    async fn test_cancel_before_start() {
        let config = fast_config();
        let token = CancellationToken::new();
        token.cancel();

        let attempts = Arc::new(AtomicU32::new(0));
        let attempts_clone = attempts.clone();

        let (result, _) = with_retry_cancellable(&config, &token, || {
            let attempts = attempts_clone.clone();
            async move {
                attempts.fetch_add(1, Ordering::SeqCst);
                Ok::<_, TestError>(1)
            }
        })
        .await;

        assert_eq!(assert_err!(result), TestError::Cancelled);
        assert_eq!(attempts.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_during_wait() {
        let config = RetryConfig::new().wait(WaitStrategy::Fixed(Duration::from_secs(60)));
        let token = CancellationToken::new();

        let canceller = token.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_secs(1)).await;
            canceller.cancel();
        });

        let (result, state) = with_retry_cancellable(&config, &token, || async {
            Err::<i32, _>(TestError::Http(504))
        })
        .await;

        assert_eq!(assert_err!(result), TestError::Cancelled);
        assert_eq!(state.attempt, 1);
    }

    #[tokio::test]
    async fn test_cancellable_success_passes_through() {
        let config = fast_config();
        let token = CancellationToken::new();

        let (result, state) =
            with_retry_cancellable(&config, &token, || async { Ok::<_, TestError>("done") }).await;

        assert_eq!(assert_ok!(result), "done");
        assert_eq!(state.attempt, 1);
    }
}
