//! Verify-then-dispatch webhook handling.

use serde_json::Value;
use tracing::{debug, warn};
use uber_direct_core::{Result, UberDirectError, WebhookConfig};
use uber_direct_schema::ValidationGate;

use crate::dispatcher::{DispatchedEvent, EventDispatcher};
use crate::headers::{extract_signature, WebhookHeaders};
use crate::signature::SignatureVerifier;

/// An inbound request body.
#[derive(Debug, Clone, PartialEq)]
pub enum WebhookBody {
    /// The raw text as received. Signed as-is.
    Raw(String),
    /// An already parsed body. Signed over its compact serialization.
    Json(Value),
}

impl WebhookBody {
    /// The text the signature is computed over.
    pub fn signed_text(&self) -> Result<String> {
        match self {
            Self::Raw(text) => Ok(text.clone()),
            Self::Json(value) => Ok(serde_json::to_string(value)?),
        }
    }

    /// Parse into a JSON value.
    pub fn into_value(self) -> Result<Value> {
        match self {
            Self::Raw(text) => serde_json::from_str(&text)
                .map_err(|e| UberDirectError::InvalidPayload(format!("body is not JSON: {e}"))),
            Self::Json(value) => Ok(value),
        }
    }
}

impl From<String> for WebhookBody {
    fn from(text: String) -> Self {
        Self::Raw(text)
    }
}

impl From<&str> for WebhookBody {
    fn from(text: &str) -> Self {
        Self::Raw(text.to_string())
    }
}

impl From<Value> for WebhookBody {
    fn from(value: Value) -> Self {
        Self::Json(value)
    }
}

/// Authenticates and decodes inbound webhooks.
#[derive(Debug, Clone)]
pub struct WebhookHandler {
    verifier: SignatureVerifier,
    signature_header: String,
    dispatcher: EventDispatcher,
}

impl WebhookHandler {
    /// Create a handler from webhook configuration.
    pub fn new(config: WebhookConfig) -> Self {
        Self {
            verifier: SignatureVerifier::new(config.secret),
            signature_header: config.signature_header,
            dispatcher: EventDispatcher::new(),
        }
    }

    /// Validate payloads through `gate`.
    #[must_use]
    pub fn with_gate(mut self, gate: ValidationGate) -> Self {
        self.dispatcher = EventDispatcher::with_gate(gate);
        self
    }

    /// Header the signature is read from.
    pub fn signature_header(&self) -> &str {
        &self.signature_header
    }

    /// Check the request signature without decoding the body.
    pub fn verify(&self, body: &WebhookBody, headers: &WebhookHeaders) -> Result<()> {
        let provided = extract_signature(headers, &self.signature_header)?;
        let text = body.signed_text()?;

        if self.verifier.verify(&text, &provided) {
            Ok(())
        } else {
            warn!(header = %self.signature_header, "Webhook signature mismatch");
            Err(UberDirectError::invalid_signature("Signature mismatch"))
        }
    }

    /// Verify the signature, then classify and decode the body.
    ///
    /// Nothing is parsed or dispatched unless the signature matches.
    pub fn handle(
        &self,
        body: impl Into<WebhookBody>,
        headers: &WebhookHeaders,
    ) -> Result<DispatchedEvent> {
        let body = body.into();
        self.verify(&body, headers)?;

        let event = self.dispatcher.dispatch(body.into_value()?)?;
        debug!(kind = %event.kind, "Webhook accepted");
        Ok(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatcher::WebhookEvent;
    use crate::signature::compute_signature;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use uber_direct_core::fixtures;
    use uber_direct_core::types::EventKind;
    use uber_direct_schema::Checked;

    const SECRET: &str = "whsec_test";
    const HEADER: &str = "x-postmates-signature";

    fn handler() -> WebhookHandler {
        WebhookHandler::new(WebhookConfig::new(SECRET))
    }

    fn headers(value: Value) -> WebhookHeaders {
        let mut headers = WebhookHeaders::new();
        headers.insert(HEADER.to_string(), value);
        headers
    }

    fn sign(body: &str) -> String {
        compute_signature(SECRET, body).unwrap()
    }

    #[test]
    fn test_handle_raw_body() {
        let body = serde_json::to_string(&fixtures::courier_update_event_json()).unwrap();
        let headers = headers(json!(sign(&body)));

        let event = handler().handle(body.as_str(), &headers).unwrap();
        assert_eq!(event.kind, EventKind::CourierUpdate);
        assert!(matches!(
            event.event,
            WebhookEvent::CourierUpdate(Checked::Valid(_))
        ));
    }

    #[test]
    fn test_handle_parsed_body() {
        let value = fixtures::refund_request_event_json("event.refund_request");
        let text = serde_json::to_string(&value).unwrap();
        let headers = headers(json!(sign(&text)));

        let event = handler().handle(value, &headers).unwrap();
        assert_eq!(event.kind, EventKind::RefundRequest);
    }

    #[test]
    fn test_signature_array_accepted() {
        let body = serde_json::to_string(&fixtures::delivery_status_event_json(
            "event.delivery_status",
        ))
        .unwrap();
        let headers = headers(json!([sign(&body)]));

        assert!(handler().handle(body, &headers).is_ok());
    }

    #[test]
    fn test_numeric_signature_rejected() {
        let body = serde_json::to_string(&fixtures::courier_update_event_json()).unwrap();
        let err = handler()
            .handle(body, &headers(json!(42)))
            .unwrap_err();
        assert!(matches!(err, UberDirectError::InvalidSignature { .. }));
    }

    #[test]
    fn test_missing_signature() {
        let err = handler()
            .handle("{}", &WebhookHeaders::new())
            .unwrap_err();
        assert!(matches!(err, UberDirectError::MissingSignature { ref header } if header == HEADER));
    }

    #[test]
    fn test_mismatch_never_dispatches() {
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&calls);
        let gate = ValidationGate::new().with_callback(move |_| {
            seen.fetch_add(1, Ordering::SeqCst);
        });

        let body = r#"{"kind":"event.refund_request"}"#;
        let err = handler()
            .with_gate(gate)
            .handle(body, &headers(json!(sign("{}"))))
            .unwrap_err();

        assert!(matches!(err, UberDirectError::InvalidSignature { .. }));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_tampered_body_rejected() {
        let body = serde_json::to_string(&fixtures::courier_update_event_json()).unwrap();
        let signature = sign(&body);
        let tampered = body.replace("del_1", "del_9");
        let err = handler()
            .handle(tampered, &headers(json!(signature)))
            .unwrap_err();
        assert!(matches!(err, UberDirectError::InvalidSignature { .. }));
    }

    #[test]
    fn test_signed_non_json_body() {
        let body = "not json";
        let err = handler()
            .handle(body, &headers(json!(sign(body))))
            .unwrap_err();
        assert!(matches!(err, UberDirectError::InvalidPayload(_)));
    }

    #[test]
    fn test_signed_unknown_kind() {
        let body = r#"{"kind":"event.unknown"}"#;
        let err = handler()
            .handle(body, &headers(json!(sign(body))))
            .unwrap_err();
        assert!(matches!(err, UberDirectError::UnknownEventKind(_)));
    }

    #[test]
    fn test_configured_header() {
        let handler = WebhookHandler::new(
            WebhookConfig::new(SECRET).with_signature_header("X-Uber-Signature"),
        );
        assert_eq!(handler.signature_header(), "x-uber-signature");

        let body = r#"{"kind":"event.courier_update"}"#;
        let mut headers = WebhookHeaders::new();
        headers.insert("X-Uber-Signature".to_string(), json!(sign(body)));
        assert!(handler.verify(&WebhookBody::from(body), &headers).is_ok());
    }

    #[test]
    fn test_preserves_key_order_when_signing_parsed_body() {
        let text = r#"{"kind":"event.courier_update","delivery_id":"del_1","live_mode":false}"#;
        let value: Value = serde_json::from_str(text).unwrap();
        assert_eq!(WebhookBody::from(value).signed_text().unwrap(), text);
    }
}
