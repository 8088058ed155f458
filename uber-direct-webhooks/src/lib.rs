//! # uber-direct-webhooks
//!
//! Inbound webhook authentication and event decoding.
//!
//! Uber signs each webhook body with HMAC-SHA256 using the shared webhook
//! secret and sends the lower-case hex digest in a signature header
//! (`x-postmates-signature` by default). [`WebhookHandler`] checks that
//! signature before touching the body, then classifies the payload by its
//! `kind` and decodes it into a [`WebhookEvent`].
//!
//! ## Example
//!
//! ```ignore
//! use uber_direct_core::WebhookConfig;
//! use uber_direct_webhooks::{headers_from_http, WebhookEvent, WebhookHandler};
//!
//! let handler = WebhookHandler::new(WebhookConfig::from_env()?);
//! let event = handler.handle(body, &headers_from_http(request.headers()))?;
//!
//! if let WebhookEvent::CourierUpdate(update) = event.event {
//!     if let Some(update) = update.valid() {
//!         println!("courier at {:?}", update.location);
//!     }
//! }
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod dispatcher;
pub mod handler;
pub mod headers;
pub mod signature;

pub use dispatcher::{classify, DispatchedEvent, EventDispatcher, WebhookEvent};
pub use handler::{WebhookBody, WebhookHandler};
pub use headers::{extract_signature, headers_from_http, WebhookHeaders};
pub use signature::{compute_signature, verify_signature, SignatureVerifier};

/// Prelude for common imports.
pub mod prelude {
    pub use crate::{
        DispatchedEvent, WebhookBody, WebhookEvent, WebhookHandler, WebhookHeaders,
    };
}
