//! Exportable authentication state.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Everything needed to rebuild an [`AuthClient`](crate::AuthClient) without
/// a fresh token exchange.
///
/// Serializes with camelCase keys so persisted state stays readable by
/// other clients of the same API.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthSnapshot {
    /// OAuth client id.
    pub client_id: String,
    /// OAuth client secret.
    pub client_secret: String,
    /// Customer id.
    pub customer_id: String,
    /// Cached bearer token.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    /// Token expiry in epoch milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_expiration_time: Option<i64>,
}

impl fmt::Debug for AuthSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthSnapshot")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .field("customer_id", &self.customer_id)
            .field(
                "access_token",
                &self.access_token.as_ref().map(|_| "[REDACTED]"),
            )
            .field("token_expiration_time", &self.token_expiration_time)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_camel_case_format() {
        let snapshot = AuthSnapshot {
            client_id: "id".into(),
            client_secret: "secret".into(),
            customer_id: "cus_1".into(),
            access_token: Some("tok".into()),
            token_expiration_time: Some(1_700_000_000_000),
        };
        assert_eq!(
            serde_json::to_value(&snapshot).unwrap(),
            json!({
                "clientId": "id",
                "clientSecret": "secret",
                "customerId": "cus_1",
                "accessToken": "tok",
                "tokenExpirationTime": 1_700_000_000_000i64
            })
        );
    }

    #[test]
    fn test_token_fields_optional() {
        let snapshot: AuthSnapshot = serde_json::from_value(json!({
            "clientId": "id",
            "clientSecret": "secret",
            "customerId": "cus_1"
        }))
        .unwrap();
        assert_eq!(snapshot.access_token, None);
        assert_eq!(snapshot.token_expiration_time, None);
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let snapshot = AuthSnapshot {
            client_id: "id".into(),
            client_secret: "hunter2".into(),
            customer_id: "cus_1".into(),
            access_token: Some("tok-xyz".into()),
            token_expiration_time: None,
        };
        let debug = format!("{:?}", snapshot);
        assert!(!debug.contains("hunter2"));
        assert!(!debug.contains("tok-xyz"));
    }
}
