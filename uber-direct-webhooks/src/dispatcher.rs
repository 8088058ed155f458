//! Event classification and dispatch.

use serde_json::Value;
use tracing::debug;
use uber_direct_core::types::{CourierUpdateEvent, DeliveryStatusEvent, EventKind, RefundRequestEvent};
use uber_direct_core::{Result, UberDirectError};
use uber_direct_schema::{Checked, ValidationGate};

/// A decoded webhook event.
#[derive(Debug, Clone, PartialEq)]
pub enum WebhookEvent {
    /// `event.delivery_status` or `dapi.status_changed`.
    DeliveryStatus(Checked<DeliveryStatusEvent>),
    /// `event.courier_update`.
    CourierUpdate(Checked<CourierUpdateEvent>),
    /// `event.refund_request` or `dapi.refund_requested`.
    RefundRequest(Checked<RefundRequestEvent>),
}

/// A webhook event tagged with the kind it arrived as.
#[derive(Debug, Clone, PartialEq)]
pub struct DispatchedEvent {
    /// Kind as sent, including legacy kinds.
    pub kind: EventKind,
    /// Decoded payload.
    pub event: WebhookEvent,
}

/// Read the `kind` discriminator of a webhook payload.
pub fn classify(payload: &Value) -> Result<EventKind> {
    let object = payload
        .as_object()
        .ok_or_else(|| UberDirectError::InvalidPayload("payload is not a JSON object".into()))?;

    match object.get("kind") {
        Some(Value::String(kind)) => kind.parse(),
        Some(_) => Err(UberDirectError::InvalidPayload(
            "`kind` is not a string".into(),
        )),
        None => Err(UberDirectError::InvalidPayload("missing `kind`".into())),
    }
}

/// Routes payloads to their typed shape by `kind`.
#[derive(Debug, Clone, Default)]
pub struct EventDispatcher {
    gate: ValidationGate,
}

impl EventDispatcher {
    /// Create a dispatcher with the default (notify) gate.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a dispatcher validating through `gate`.
    pub fn with_gate(gate: ValidationGate) -> Self {
        Self { gate }
    }

    /// Gate used for payload validation.
    pub fn gate(&self) -> &ValidationGate {
        &self.gate
    }

    /// Classify and decode `payload`.
    pub fn dispatch(&self, payload: Value) -> Result<DispatchedEvent> {
        let kind = classify(&payload)?;
        debug!(kind = %kind, "Dispatching webhook event");

        let event = match kind {
            EventKind::DeliveryStatus | EventKind::DapiStatusChanged => {
                WebhookEvent::DeliveryStatus(self.gate.check(payload)?)
            }
            EventKind::CourierUpdate => WebhookEvent::CourierUpdate(self.gate.check(payload)?),
            EventKind::RefundRequest | EventKind::DapiRefundRequested => {
                WebhookEvent::RefundRequest(self.gate.check(payload)?)
            }
        };

        Ok(DispatchedEvent { kind, event })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;
    use uber_direct_core::fixtures;
    use uber_direct_schema::OnValidationFailure;

    #[rstest]
    #[case(json!({"kind": "event.courier_update"}), EventKind::CourierUpdate)]
    #[case(json!({"kind": "dapi.status_changed"}), EventKind::DapiStatusChanged)]
    fn test_classify(#[case] payload: Value, #[case] expected: EventKind) {
        assert_eq!(classify(&payload).unwrap(), expected);
    }

    #[test]
    fn test_classify_unknown() {
        let err = classify(&json!({"kind": "event.unknown"})).unwrap_err();
        assert!(matches!(err, UberDirectError::UnknownEventKind(ref k) if k == "event.unknown"));
    }

    #[rstest]
    #[case(json!({"delivery_id": "del_1"}))]
    #[case(json!({"kind": 7}))]
    #[case(json!({"kind": null}))]
    #[case(json!("event.courier_update"))]
    #[case(json!([{"kind": "event.courier_update"}]))]
    fn test_classify_invalid(#[case] payload: Value) {
        assert!(matches!(
            classify(&payload),
            Err(UberDirectError::InvalidPayload(_))
        ));
    }

    #[test]
    fn test_dispatch_courier_update() {
        let dispatched = EventDispatcher::new()
            .dispatch(fixtures::courier_update_event_json())
            .unwrap();
        assert_eq!(dispatched.kind, EventKind::CourierUpdate);
        match dispatched.event {
            WebhookEvent::CourierUpdate(Checked::Valid(event)) => {
                assert_eq!(event.delivery_id, "del_1");
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn test_legacy_status_changed_decodes_as_delivery_status() {
        let dispatched = EventDispatcher::new()
            .dispatch(fixtures::delivery_status_event_json("dapi.status_changed"))
            .unwrap();
        assert_eq!(dispatched.kind, EventKind::DapiStatusChanged);
        assert!(matches!(
            dispatched.event,
            WebhookEvent::DeliveryStatus(Checked::Valid(_))
        ));
    }

    #[test]
    fn test_legacy_refund_requested_decodes_as_refund() {
        let dispatched = EventDispatcher::new()
            .dispatch(fixtures::refund_request_event_json("dapi.refund_requested"))
            .unwrap();
        assert!(matches!(
            dispatched.event,
            WebhookEvent::RefundRequest(Checked::Valid(ref e)) if e.data.total_uber_refund == 1834
        ));
    }

    #[rstest]
    #[case("event.delivery_status", "delivery_status")]
    #[case("dapi.status_changed", "delivery_status")]
    #[case("event.courier_update", "courier_update")]
    #[case("event.refund_request", "refund_request")]
    #[case("dapi.refund_requested", "refund_request")]
    fn test_every_kind_dispatches(#[case] kind: &str, #[case] expected: &str) {
        let dispatched = EventDispatcher::new()
            .dispatch(json!({"kind": kind}))
            .unwrap();
        let variant = match dispatched.event {
            WebhookEvent::DeliveryStatus(_) => "delivery_status",
            WebhookEvent::CourierUpdate(_) => "courier_update",
            WebhookEvent::RefundRequest(_) => "refund_request",
        };
        assert_eq!(variant, expected);
        assert_eq!(dispatched.kind.as_str(), kind);
    }

    #[test]
    fn test_shape_mismatch_notifies() {
        let payload = json!({"kind": "event.refund_request", "id": "evt_1"});
        let dispatched = EventDispatcher::new().dispatch(payload.clone()).unwrap();
        assert_eq!(
            dispatched.event,
            WebhookEvent::RefundRequest(Checked::Unvalidated(payload))
        );
    }

    #[test]
    fn test_shape_mismatch_throws() {
        let gate = ValidationGate::new().with_policy(OnValidationFailure::Throw);
        let err = EventDispatcher::with_gate(gate)
            .dispatch(json!({"kind": "event.delivery_status"}))
            .unwrap_err();
        assert!(matches!(err, UberDirectError::Validation(_)));
    }
}
