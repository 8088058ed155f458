//! # uber-direct
//!
//! Typed async client for the Uber Direct delivery-as-a-service API.
//!
//! The crate ties together:
//!
//! - OAuth2 client-credentials authentication with a cached, self-renewing
//!   bearer token and bounded retry of `504 Gateway Timeout` answers
//! - delivery endpoints ([`DaasClient`]) and organization management
//!   ([`OrganizationClient`]), with every response checked against its
//!   typed shape
//! - inbound webhook signature verification and event decoding
//!   ([`WebhookHandler`])
//!
//! ## Quick Start
//!
//! ```ignore
//! use uber_direct::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = UberDirect::from_env()?;
//!
//!     let quote = client
//!         .deliveries()
//!         .quote(&QuoteRequest::new("1 Market St, San Francisco", "2 Mission St, San Francisco"))
//!         .await?;
//!
//!     if let Some(quote) = quote.valid() {
//!         println!("fee: {} {}", quote.fee, quote.currency_type);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Crates
//!
//! - [`uber_direct_core`] - errors, configuration, credentials and data shapes
//! - [`uber_direct_auth`] - token lifecycle and authenticated requests
//! - [`uber_direct_schema`] - response validation gate
//! - [`uber_direct_webhooks`] - webhook signatures and dispatch
//! - [`uber_direct_retries`] - bounded retry executor

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

use std::sync::Arc;

pub mod daas;
pub mod organization;

// ============================================================================
// Crate Re-exports
// ============================================================================

/// Errors, configuration, credentials and data shapes.
pub use uber_direct_core as core;

/// Token lifecycle and authenticated requests.
pub use uber_direct_auth as auth;

/// Response validation.
pub use uber_direct_schema as schema;

/// Webhook signatures and dispatch.
pub use uber_direct_webhooks as webhooks;

/// Retry executor.
pub use uber_direct_retries as retries;

// ============================================================================
// Flat Re-exports
// ============================================================================

pub use daas::DaasClient;
pub use organization::OrganizationClient;

pub use uber_direct_auth::{ApiTransport, AuthClient, AuthSnapshot, Method, TokenState};
pub use uber_direct_core::types;
pub use uber_direct_core::{
    AuthenticationError, ClientConfig, ConfigurationError, Credentials, RequestError, Result,
    UberDirectError, ValidationError, WebhookConfig,
};
pub use uber_direct_retries::{RetryConfig, WaitStrategy};
pub use uber_direct_schema::{Checked, OnValidationFailure, SchemaId, ValidationGate};
pub use uber_direct_webhooks::{
    headers_from_http, DispatchedEvent, WebhookBody, WebhookEvent, WebhookHandler,
    WebhookHeaders,
};

/// One authenticated client shared by the delivery and organization APIs.
#[derive(Debug, Clone)]
pub struct UberDirect {
    auth: Arc<AuthClient>,
    deliveries: DaasClient,
    organizations: OrganizationClient,
}

impl UberDirect {
    /// Create a client with the default configuration.
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::with_config(credentials, ClientConfig::default())
    }

    /// Create a client with a custom configuration.
    pub fn with_config(credentials: Credentials, config: ClientConfig) -> Result<Self> {
        Ok(Self::from_auth(AuthClient::with_config(credentials, config)?))
    }

    /// Create a client from credentials and configuration in the environment.
    pub fn from_env() -> Result<Self> {
        Self::with_config(Credentials::from_env()?, ClientConfig::from_env())
    }

    /// Wrap an existing authenticated client.
    pub fn from_auth(auth: AuthClient) -> Self {
        let auth = Arc::new(auth);
        Self {
            deliveries: DaasClient::from_shared(Arc::clone(&auth)),
            organizations: OrganizationClient::from_shared(Arc::clone(&auth)),
            auth,
        }
    }

    /// Validate every response through `gate`.
    #[must_use]
    pub fn with_gate(mut self, gate: ValidationGate) -> Self {
        self.deliveries = self.deliveries.with_gate(gate.clone());
        self.organizations = self.organizations.with_gate(gate);
        self
    }

    /// The authenticated client.
    pub fn auth(&self) -> &AuthClient {
        &self.auth
    }

    /// Delivery endpoints.
    pub fn deliveries(&self) -> &DaasClient {
        &self.deliveries
    }

    /// Organization endpoints.
    pub fn organizations(&self) -> &OrganizationClient {
        &self.organizations
    }

    /// Export the credentials and current token.
    pub fn snapshot(&self) -> AuthSnapshot {
        self.auth.snapshot()
    }

    /// Webhook handler for `secret`, reading the signature from the
    /// configured `signature_header`.
    pub fn webhook_handler(&self, secret: impl Into<String>) -> WebhookHandler {
        let config = WebhookConfig::new(secret)
            .with_signature_header(self.auth.config().signature_header.as_str());
        WebhookHandler::new(config)
    }
}

/// Prelude for common imports.
pub mod prelude {
    pub use crate::{
        Checked, ClientConfig, Credentials, DaasClient, OrganizationClient, Result, UberDirect,
        UberDirectError, ValidationGate, WebhookConfig, WebhookEvent, WebhookHandler,
    };
    pub use uber_direct_core::prelude::*;
}
