//! Client credentials.

use crate::errors::{ConfigurationError, Result};
use std::fmt;

/// Environment variable holding the OAuth client id.
pub const ENV_CLIENT_ID: &str = "UBER_DIRECT_CLIENT_ID";
/// Environment variable holding the OAuth client secret.
pub const ENV_CLIENT_SECRET: &str = "UBER_DIRECT_CLIENT_SECRET";
/// Environment variable holding the customer id.
pub const ENV_CUSTOMER_ID: &str = "UBER_DIRECT_CUSTOMER_ID";

/// OAuth client credentials plus the customer they act for.
///
/// Immutable once built. `Debug` never prints the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    client_id: String,
    client_secret: String,
    customer_id: String,
}

impl Credentials {
    /// Build credentials, rejecting empty fields.
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        customer_id: impl Into<String>,
    ) -> Result<Self> {
        let credentials = Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            customer_id: customer_id.into(),
        };

        for (name, value) in [
            ("client_id", &credentials.client_id),
            ("client_secret", &credentials.client_secret),
            ("customer_id", &credentials.customer_id),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigurationError::new(format!("{name} must not be empty")).into());
            }
        }

        Ok(credentials)
    }

    /// Read credentials from `UBER_DIRECT_CLIENT_ID`, `UBER_DIRECT_CLIENT_SECRET`
    /// and `UBER_DIRECT_CUSTOMER_ID`.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Read credentials using an arbitrary variable lookup.
    pub fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key).ok_or_else(|| {
                ConfigurationError::new(format!("Missing environment variable {key}"))
            })
        };
        Self::new(get(ENV_CLIENT_ID)?, get(ENV_CLIENT_SECRET)?, get(ENV_CUSTOMER_ID)?)
    }

    /// OAuth client id.
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// OAuth client secret.
    pub fn client_secret(&self) -> &str {
        &self.client_secret
    }

    /// Customer id used in delivery paths.
    pub fn customer_id(&self) -> &str {
        &self.customer_id
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .field("customer_id", &self.customer_id)
            .finish()
    }
}
