//! # uber-direct-core
//!
//! Core types, configuration, and error handling for the uber-direct client.
//!
//! This crate provides the foundational pieces used throughout the workspace:
//!
//! - **Errors**: [`UberDirectError`] and its struct errors with diagnostics
//! - **Config**: [`ClientConfig`] and [`WebhookConfig`], loadable from the environment
//! - **Credentials**: OAuth client credentials with a redacted `Debug`
//! - **Types**: Deliveries, quotes, organizations, and webhook events
//!
//! ## Feature Flags
//!
//! - `fixtures`: Sample API payloads for tests in dependent crates
//!
//! ## Example
//!
//! ```rust
//! use uber_direct_core::{ClientConfig, Credentials};
//!
//! let credentials = Credentials::new("client-id", "client-secret", "cus_123")?;
//! let config = ClientConfig::new().with_scope("eats.deliveries");
//!
//! let url = config.endpoint(&format!("customers/{}/deliveries", credentials.customer_id()))?;
//! assert_eq!(url.as_str(), "https://api.uber.com/v1/customers/cus_123/deliveries");
//! # Ok::<(), uber_direct_core::UberDirectError>(())
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod config;
pub mod credentials;
pub mod errors;
#[cfg(any(test, feature = "fixtures"))]
pub mod fixtures;
pub mod types;

// Re-exports for convenience
pub use config::{
    ClientConfig, WebhookConfig, DEFAULT_API_BASE_URL, DEFAULT_SCOPE, DEFAULT_TOKEN_URL,
    POSTMATES_SIGNATURE_HEADER, UBER_SIGNATURE_HEADER,
};
pub use credentials::Credentials;
pub use errors::{
    AuthenticationError, ConfigurationError, RequestError, Result, UberDirectError,
    ValidationError,
};
pub use types::*;

/// Prelude for common imports.
pub mod prelude {
    pub use crate::config::{ClientConfig, WebhookConfig};
    pub use crate::credentials::Credentials;
    pub use crate::errors::{Result, UberDirectError};
    pub use crate::types::{
        CourierUpdateEvent, DeliveryList, DeliveryRequest, DeliveryResponse, DeliveryStatus,
        DeliveryStatusEvent, EventKind, ManifestItem, PodRequest, PodResponse, QuoteRequest,
        QuoteResponse, RefundRequestEvent, UpdateDeliveryRequest,
    };
}
