//! OAuth2 client-credentials exchange.

use serde::Deserialize;
use tracing::debug;
use uber_direct_core::{AuthenticationError, ConfigurationError, Credentials, Result};
use url::Url;

/// Token endpoint response.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    /// Access token.
    pub access_token: String,
    /// Token type. Only `Bearer` is accepted.
    pub token_type: String,
    /// Lifetime in seconds.
    pub expires_in: i64,
    /// Granted scope.
    #[serde(default)]
    pub scope: Option<String>,
}

/// Exchange client credentials for a bearer token.
///
/// Network failures and non-2xx answers are [`AuthenticationError`]s; a token
/// type other than `Bearer` is a [`ConfigurationError`]. Not retried.
pub async fn exchange_client_credentials(
    http: &reqwest::Client,
    token_url: &Url,
    credentials: &Credentials,
    scope: &str,
) -> Result<TokenResponse> {
    let params = [
        ("grant_type", "client_credentials"),
        ("client_id", credentials.client_id()),
        ("client_secret", credentials.client_secret()),
        ("scope", scope),
    ];

    debug!(token_url = %token_url, scope, "Exchanging client credentials");

    let response = http
        .post(token_url.clone())
        .form(&params)
        .send()
        .await
        .map_err(|e| AuthenticationError::new(format!("Token request failed: {e}")))?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(AuthenticationError::new("Token exchange rejected")
            .with_status(status.as_u16())
            .with_body(body)
            .into());
    }

    let token: TokenResponse = response
        .json()
        .await
        .map_err(|e| AuthenticationError::new(format!("Malformed token response: {e}")))?;

    if token.token_type != "Bearer" {
        return Err(ConfigurationError::new(format!(
            "Invalid token type '{}', expected 'Bearer'",
            token.token_type
        ))
        .into());
    }

    Ok(token)
}
