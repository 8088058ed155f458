//! Client configuration.
//!
//! Defaults target the production Uber endpoints. Every value can be
//! overridden with a `with_*` builder method or from the environment.

use crate::errors::{ConfigurationError, Result};
use std::fmt;
use std::time::Duration;
use uber_direct_retries::RetryConfig;
use url::Url;

/// Default REST base URL.
pub const DEFAULT_API_BASE_URL: &str = "https://api.uber.com/v1/";
/// Default OAuth2 token endpoint.
pub const DEFAULT_TOKEN_URL: &str = "https://login.uber.com/oauth/v2/token";
/// Default OAuth2 scope.
pub const DEFAULT_SCOPE: &str = "eats.deliveries";
/// Webhook signature header used by the current signing scheme.
pub const POSTMATES_SIGNATURE_HEADER: &str = "x-postmates-signature";
/// Webhook signature header used by the newer signing scheme.
pub const UBER_SIGNATURE_HEADER: &str = "x-uber-signature";

/// Environment variable overriding [`ClientConfig::api_base_url`].
pub const ENV_BASE_URL: &str = "UBER_DIRECT_BASE_URL";
/// Environment variable overriding [`ClientConfig::token_url`].
pub const ENV_TOKEN_URL: &str = "UBER_DIRECT_TOKEN_URL";
/// Environment variable overriding [`ClientConfig::scope`].
pub const ENV_SCOPE: &str = "UBER_DIRECT_SCOPE";
/// Environment variable overriding the signature header name.
pub const ENV_SIGNATURE_HEADER: &str = "UBER_DIRECT_SIGNATURE_HEADER";
/// Environment variable holding the webhook signing secret.
pub const ENV_WEBHOOK_SECRET: &str = "UBER_DIRECT_WEBHOOK_SECRET";

/// Configuration for the API client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL every API path is resolved against.
    pub api_base_url: String,
    /// OAuth2 token endpoint.
    pub token_url: String,
    /// Scope requested in the token exchange.
    pub scope: String,
    /// Per-request timeout.
    pub request_timeout: Duration,
    /// Retry policy for API calls.
    pub retry: RetryConfig,
    /// Subtracted from `expires_in` when computing token expiry.
    pub refresh_margin: Duration,
    /// Webhook signature header name.
    pub signature_header: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            token_url: DEFAULT_TOKEN_URL.to_string(),
            scope: DEFAULT_SCOPE.to_string(),
            request_timeout: Duration::from_secs(30),
            retry: RetryConfig::for_gateway_timeouts(),
            refresh_margin: Duration::from_secs(300),
            signature_header: POSTMATES_SIGNATURE_HEADER.to_string(),
        }
    }
}

impl ClientConfig {
    /// Create a new default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary variable lookup.
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(url) = lookup(ENV_BASE_URL) {
            config.api_base_url = url;
        }
        if let Some(url) = lookup(ENV_TOKEN_URL) {
            config.token_url = url;
        }
        if let Some(scope) = lookup(ENV_SCOPE) {
            config.scope = scope;
        }
        if let Some(header) = lookup(ENV_SIGNATURE_HEADER) {
            config.signature_header = header.to_ascii_lowercase();
        }
        config
    }

    /// Set the API base URL.
    #[must_use]
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    /// Set the token endpoint.
    #[must_use]
    pub fn with_token_url(mut self, url: impl Into<String>) -> Self {
        self.token_url = url.into();
        self
    }

    /// Set the OAuth scope.
    #[must_use]
    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = scope.into();
        self
    }

    /// Set the request timeout.
    #[must_use]
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Set the retry policy.
    #[must_use]
    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    /// Set the token refresh margin.
    #[must_use]
    pub fn with_refresh_margin(mut self, margin: Duration) -> Self {
        self.refresh_margin = margin;
        self
    }

    /// Set the webhook signature header name.
    #[must_use]
    pub fn with_signature_header(mut self, header: impl Into<String>) -> Self {
        self.signature_header = header.into().to_ascii_lowercase();
        self
    }

    /// Parsed API base URL, normalized to end with `/`.
    pub fn base_url(&self) -> Result<Url> {
        let mut raw = self.api_base_url.clone();
        if !raw.ends_with('/') {
            raw.push('/');
        }
        Url::parse(&raw).map_err(|e| {
            ConfigurationError::new(format!("Invalid API base URL '{}': {}", self.api_base_url, e))
                .into()
        })
    }

    /// Resolve a relative API path against the base URL.
    pub fn endpoint(&self, path: &str) -> Result<Url> {
        let base = self.base_url()?;
        base.join(path.trim_start_matches('/')).map_err(|e| {
            ConfigurationError::new(format!("Invalid API path '{}': {}", path, e)).into()
        })
    }

    /// Parsed token endpoint.
    pub fn token_endpoint(&self) -> Result<Url> {
        Url::parse(&self.token_url).map_err(|e| {
            ConfigurationError::new(format!("Invalid token URL '{}': {}", self.token_url, e))
                .into()
        })
    }
}

/// Configuration for receiving webhooks.
#[derive(Clone)]
pub struct WebhookConfig {
    /// Shared signing secret.
    pub secret: String,
    /// Header carrying the signature.
    pub signature_header: String,
}

impl fmt::Debug for WebhookConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebhookConfig")
            .field("secret", &"[REDACTED]")
            .field("signature_header", &self.signature_header)
            .finish()
    }
}

impl WebhookConfig {
    /// Create a config using the default signature header.
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            signature_header: POSTMATES_SIGNATURE_HEADER.to_string(),
        }
    }

    /// Load from `UBER_DIRECT_WEBHOOK_SECRET` and `UBER_DIRECT_SIGNATURE_HEADER`.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary variable lookup.
    pub fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret = lookup(ENV_WEBHOOK_SECRET)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| {
                ConfigurationError::new(format!("Missing environment variable {ENV_WEBHOOK_SECRET}"))
            })?;
        let mut config = Self::new(secret);
        if let Some(header) = lookup(ENV_SIGNATURE_HEADER) {
            config = config.with_signature_header(header);
        }
        Ok(config)
    }

    /// Set the signature header name.
    #[must_use]
    pub fn with_signature_header(mut self, header: impl Into<String>) -> Self {
        self.signature_header = header.into().to_ascii_lowercase();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.api_base_url, "https://api.uber.com/v1/");
        assert_eq!(config.token_url, "https://login.uber.com/oauth/v2/token");
        assert_eq!(config.scope, "eats.deliveries");
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.refresh_margin, Duration::from_secs(300));
        assert_eq!(config.retry.max_retries, 3);
        assert_eq!(config.signature_header, "x-postmates-signature");
    }

    #[test]
    fn test_from_vars_overlays() {
        let config = ClientConfig::from_vars(vars(&[
            (ENV_BASE_URL, "http://localhost:8080/v1"),
            (ENV_SCOPE, "direct.organizations"),
            (ENV_SIGNATURE_HEADER, "X-Uber-Signature"),
        ]));
        assert_eq!(config.api_base_url, "http://localhost:8080/v1");
        assert_eq!(config.token_url, DEFAULT_TOKEN_URL);
        assert_eq!(config.scope, "direct.organizations");
        assert_eq!(config.signature_header, UBER_SIGNATURE_HEADER);
    }

    #[test]
    fn test_endpoint_join() {
        let config = ClientConfig::new();
        let url = config.endpoint("customers/cus_1/deliveries").unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.uber.com/v1/customers/cus_1/deliveries"
        );
    }

    #[test]
    fn test_endpoint_join_without_trailing_slash() {
        let config = ClientConfig::new().with_api_base_url("http://127.0.0.1:9000/v1");
        let url = config.endpoint("/direct/organizations").unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:9000/v1/direct/organizations");
    }

    #[test]
    fn test_invalid_base_url() {
        let config = ClientConfig::new().with_api_base_url("not a url");
        assert!(config.base_url().is_err());
    }

    #[test]
    fn test_webhook_config_from_vars() {
        let config = WebhookConfig::from_vars(vars(&[(ENV_WEBHOOK_SECRET, "whsec")])).unwrap();
        assert_eq!(config.secret, "whsec");
        assert_eq!(config.signature_header, POSTMATES_SIGNATURE_HEADER);
    }

    #[test]
    fn test_webhook_config_missing_secret() {
        let err = WebhookConfig::from_vars(vars(&[])).unwrap_err();
        assert!(err.to_string().contains(ENV_WEBHOOK_SECRET));
    }

    #[test]
    fn test_webhook_config_debug_redacts_secret() {
        let debug = format!("{:?}", WebhookConfig::new("super-secret"));
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("REDACTED"));
    }
}
