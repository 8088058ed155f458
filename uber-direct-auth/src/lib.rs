//! # uber-direct-auth
//!
//! OAuth2 client-credentials authentication and authenticated requests.
//!
//! [`AuthClient`] owns the credentials and a [`TokenState`] cache. Every
//! request obtains a usable token (exchanging credentials when the cache is
//! empty or stale), calls the API with `Authorization: Bearer <token>`, and
//! retries `504 Gateway Timeout` answers a bounded number of times.
//!
//! ## Example
//!
//! ```ignore
//! use uber_direct_auth::{AuthClient, Method};
//! use uber_direct_core::Credentials;
//!
//! let client = AuthClient::new(Credentials::from_env()?)?;
//! let deliveries = client
//!     .request(Method::GET, &format!("customers/{}/deliveries", client.customer_id()), None)
//!     .await?;
//!
//! // Persist and restore without a new token exchange.
//! let saved = serde_json::to_string(&client.snapshot())?;
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod client;
pub mod exchange;
pub mod snapshot;
pub mod token;

pub use client::{ApiTransport, AuthClient};
pub use exchange::{exchange_client_credentials, TokenResponse};
pub use reqwest::Method;
pub use snapshot::AuthSnapshot;
pub use token::{expiry_ms, TokenState};
