//! Authenticated API client.

use crate::exchange::exchange_client_credentials;
use crate::snapshot::AuthSnapshot;
use crate::token::TokenState;
use async_trait::async_trait;
use parking_lot::RwLock;
use reqwest::header::{HeaderValue, CONTENT_TYPE};
use reqwest::Method;
use serde_json::Value;
use std::fmt;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};
use uber_direct_core::{
    ClientConfig, ConfigurationError, Credentials, RequestError, Result, UberDirectError,
};
use uber_direct_retries::{with_retry_cancellable, with_retry_state, RetryState};
use url::Url;

/// Something that can perform authenticated API calls.
///
/// [`AuthClient`] is the production implementation; endpoint clients are
/// generic over this trait.
#[async_trait]
pub trait ApiTransport: Send + Sync {
    /// Call `path` relative to the API base URL and return the JSON body.
    async fn request(&self, method: Method, path: &str, body: Option<Value>) -> Result<Value>;

    /// Customer id used to build delivery paths.
    fn customer_id(&self) -> &str;
}

/// OAuth2 client-credentials client for the delivery API.
///
/// Owns the credentials and the token cache. The cache is filled on the
/// first call and silently replaced whenever it goes stale. Concurrent
/// callers that find it stale may each exchange; the last writer wins.
pub struct AuthClient {
    http: reqwest::Client,
    credentials: Credentials,
    config: ClientConfig,
    base_url: Url,
    token_url: Url,
    token: RwLock<TokenState>,
}

impl fmt::Debug for AuthClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthClient")
            .field("credentials", &self.credentials)
            .field("base_url", &self.base_url.as_str())
            .field("token", &*self.token.read())
            .finish()
    }
}

impl AuthClient {
    /// Create a client with the default configuration.
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::with_config(credentials, ClientConfig::default())
    }

    /// Create a client with a custom configuration.
    pub fn with_config(credentials: Credentials, config: ClientConfig) -> Result<Self> {
        let base_url = config.base_url()?;
        let token_url = config.token_endpoint()?;
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| ConfigurationError::new(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            credentials,
            config,
            base_url,
            token_url,
            token: RwLock::new(TokenState::empty()),
        })
    }

    /// Rebuild a client from exported state.
    pub fn from_snapshot(snapshot: AuthSnapshot, config: ClientConfig) -> Result<Self> {
        let credentials = Credentials::new(
            snapshot.client_id,
            snapshot.client_secret,
            snapshot.customer_id,
        )?;
        let client = Self::with_config(credentials, config)?;
        client.set_token(TokenState::new(
            snapshot.access_token,
            snapshot.token_expiration_time,
        ));
        Ok(client)
    }

    /// Export credentials and the cached token.
    pub fn snapshot(&self) -> AuthSnapshot {
        let token = self.token_state();
        AuthSnapshot {
            client_id: self.credentials.client_id().to_string(),
            client_secret: self.credentials.client_secret().to_string(),
            customer_id: self.credentials.customer_id().to_string(),
            access_token: token.access_token().map(str::to_string),
            token_expiration_time: token.expires_at_ms(),
        }
    }

    /// Customer id.
    pub fn customer_id(&self) -> &str {
        self.credentials.customer_id()
    }

    /// Credentials.
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Copy of the current token cache.
    pub fn token_state(&self) -> TokenState {
        self.token.read().clone()
    }

    fn set_token(&self, state: TokenState) {
        *self.token.write() = state;
    }

    /// Return a usable bearer token, exchanging credentials if needed.
    pub async fn access_token(&self) -> Result<String> {
        let cached = self.token.read().usable_token(now_ms()).map(str::to_string);
        if let Some(token) = cached {
            return Ok(token);
        }

        let response = exchange_client_credentials(
            &self.http,
            &self.token_url,
            &self.credentials,
            &self.config.scope,
        )
        .await?;

        let state = TokenState::issued(
            response.access_token.clone(),
            now_ms(),
            response.expires_in,
            self.config.refresh_margin,
        );
        info!(
            customer_id = self.customer_id(),
            expires_in = response.expires_in,
            expires_at_ms = state.expires_at_ms(),
            "Obtained access token"
        );
        self.set_token(state);

        Ok(response.access_token)
    }

    /// Call `path` with a bearer token, retrying gateway timeouts.
    ///
    /// A fresh token is obtained for every attempt. An empty response body
    /// decodes to `null`.
    pub async fn request(&self, method: Method, path: &str, body: Option<Value>) -> Result<Value> {
        let (result, state) = with_retry_state(&self.config.retry, || {
            self.attempt(&method, path, body.as_ref())
        })
        .await;
        annotate_attempts(result, &state)
    }

    /// Like [`request`](Self::request), aborting when `cancel` fires.
    ///
    /// Cancellation interrupts both the HTTP call and the wait between
    /// retries, and fails with [`UberDirectError::Cancelled`].
    pub async fn request_with_cancel(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        cancel: &CancellationToken,
    ) -> Result<Value> {
        let (result, state) = with_retry_cancellable(&self.config.retry, cancel, || {
            self.attempt(&method, path, body.as_ref())
        })
        .await;
        annotate_attempts(result, &state)
    }

    async fn attempt(&self, method: &Method, path: &str, body: Option<&Value>) -> Result<Value> {
        let token = self.access_token().await?;
        let url = self.base_url.join(path.trim_start_matches('/')).map_err(|e| {
            ConfigurationError::new(format!("Invalid API path '{}': {}", path, e))
        })?;

        debug!(method = %method, path, "Sending API request");

        let mut request = self
            .http
            .request(method.clone(), url)
            .bearer_auth(token)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(body) = body {
            request = request.body(serde_json::to_vec(body)?);
        }

        let request_error = |message: String| {
            RequestError::new(method.as_str(), path, message).with_request_body(body.cloned())
        };

        let response = request
            .send()
            .await
            .map_err(|e| request_error(format!("Request failed: {e}")))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| request_error(format!("Failed to read response body: {e}")))?;

        if !status.is_success() {
            let response_body = (!text.is_empty()).then(|| {
                serde_json::from_str(&text).unwrap_or(Value::String(text))
            });
            return Err(request_error(format!(
                "Request failed with status code {}",
                status.as_u16()
            ))
            .with_response(status.as_u16(), response_body)
            .into());
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&text)?)
    }
}

fn annotate_attempts(result: Result<Value>, state: &RetryState) -> Result<Value> {
    result.map_err(|error| match error {
        UberDirectError::Request(e) => e.with_attempts(state.attempt).into(),
        other => other,
    })
}

fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

#[async_trait]
impl ApiTransport for AuthClient {
    async fn request(&self, method: Method, path: &str, body: Option<Value>) -> Result<Value> {
        AuthClient::request(self, method, path, body).await
    }

    fn customer_id(&self) -> &str {
        AuthClient::customer_id(self)
    }
}
