//! Cached bearer token and its expiry.

use std::fmt;
use std::time::Duration;

/// Bearer token cache.
///
/// A token is usable when it is set and either has no expiry or the
/// current time is strictly before the expiry.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct TokenState {
    access_token: Option<String>,
    expires_at_ms: Option<i64>,
}

impl TokenState {
    /// An empty cache.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A cache holding `access_token` until `expires_at_ms`.
    pub fn new(access_token: Option<String>, expires_at_ms: Option<i64>) -> Self {
        Self {
            access_token,
            expires_at_ms,
        }
    }

    /// Cache a token issued at `now_ms` that lives `expires_in_secs`, minus `margin`.
    pub fn issued(
        access_token: impl Into<String>,
        now_ms: i64,
        expires_in_secs: i64,
        margin: Duration,
    ) -> Self {
        Self::new(
            Some(access_token.into()),
            Some(expiry_ms(now_ms, expires_in_secs, margin)),
        )
    }

    /// The cached token, usable or not.
    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    /// Expiry in epoch milliseconds.
    pub fn expires_at_ms(&self) -> Option<i64> {
        self.expires_at_ms
    }

    /// Whether the cached token can be sent at `now_ms`.
    pub fn is_usable(&self, now_ms: i64) -> bool {
        self.access_token.is_some() && self.expires_at_ms.map_or(true, |at| now_ms < at)
    }

    /// The cached token if it can be sent at `now_ms`.
    pub fn usable_token(&self, now_ms: i64) -> Option<&str> {
        if self.is_usable(now_ms) {
            self.access_token()
        } else {
            None
        }
    }
}

impl fmt::Debug for TokenState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenState")
            .field(
                "access_token",
                &self.access_token.as_ref().map(|_| "[REDACTED]"),
            )
            .field("expires_at_ms", &self.expires_at_ms)
            .finish()
    }
}

/// Expiry for a token issued at `now_ms` with lifetime `expires_in_secs`.
pub fn expiry_ms(now_ms: i64, expires_in_secs: i64, margin: Duration) -> i64 {
    let margin_ms = i64::try_from(margin.as_millis()).unwrap_or(i64::MAX);
    now_ms
        .saturating_add(expires_in_secs.saturating_mul(1000))
        .saturating_sub(margin_ms)
}
