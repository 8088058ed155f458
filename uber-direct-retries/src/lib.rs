//! # uber-direct-retries
//!
//! Bounded retry execution for the uber-direct client.
//!
//! The delivery API fronts its services with a gateway that occasionally
//! answers `504 Gateway Timeout`. This crate provides the small retry loop
//! used to absorb those responses: a fixed number of attempts, a fixed wait
//! between them, and an explicit list of retryable status codes.
//!
//! ## Core Concepts
//!
//! - **[`RetryConfig`]**: How many retries, how long to wait, what to retry
//! - **[`WaitStrategy`]**: Delay inserted before each retry
//! - **[`RetryCondition`]**: Status codes that are worth another attempt
//! - **[`Retryable`]**: Implemented by error types the executor inspects
//! - **[`with_retry`]**: Execute an operation with automatic retries
//! - **[`with_retry_cancellable`]**: Same, aborting on a cancellation token
//!
//! ## Example
//!
//! ```ignore
//! use uber_direct_retries::{with_retry, RetryConfig};
//!
//! let config = RetryConfig::for_gateway_timeouts();
//!
//! let body = with_retry(&config, || async {
//!     call_upstream().await
//! }).await?;
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod executor;

// Re-exports
pub use config::{RetryCondition, RetryConfig, WaitStrategy, GATEWAY_TIMEOUT};
pub use error::{Cancelled, Retryable};
pub use executor::{with_retry, with_retry_cancellable, with_retry_state, AttemptInfo, RetryState};

/// Prelude for common imports.
pub mod prelude {
    pub use crate::{
        with_retry, with_retry_cancellable, with_retry_state, Cancelled, RetryCondition,
        RetryConfig, RetryState, Retryable, WaitStrategy,
    };
}
