//! Webhook event shapes and the closed set of event kinds.

use super::delivery::{DeliveryResponse, LatLng, RefundData};
use crate::errors::UberDirectError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Webhook event kind, read from the payload's `kind` field.
///
/// The `dapi.*` kinds come from the older notification generation and
/// decode exactly like their `event.*` counterparts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    /// Delivery status changed.
    #[serde(rename = "event.delivery_status")]
    DeliveryStatus,
    /// Courier location update.
    #[serde(rename = "event.courier_update")]
    CourierUpdate,
    /// Refund requested.
    #[serde(rename = "event.refund_request")]
    RefundRequest,
    /// Legacy delivery status change.
    #[serde(rename = "dapi.status_changed")]
    DapiStatusChanged,
    /// Legacy refund request.
    #[serde(rename = "dapi.refund_requested")]
    DapiRefundRequested,
}

impl EventKind {
    /// All known kinds.
    pub const ALL: [EventKind; 5] = [
        EventKind::DeliveryStatus,
        EventKind::CourierUpdate,
        EventKind::RefundRequest,
        EventKind::DapiStatusChanged,
        EventKind::DapiRefundRequested,
    ];

    /// Wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DeliveryStatus => "event.delivery_status",
            Self::CourierUpdate => "event.courier_update",
            Self::RefundRequest => "event.refund_request",
            Self::DapiStatusChanged => "dapi.status_changed",
            Self::DapiRefundRequested => "dapi.refund_requested",
        }
    }

    /// The current-generation kind this one decodes as.
    pub fn canonical(&self) -> EventKind {
        match self {
            Self::DapiStatusChanged => Self::DeliveryStatus,
            Self::DapiRefundRequested => Self::RefundRequest,
            other => *other,
        }
    }

    /// Whether this is a legacy `dapi.*` kind.
    pub fn is_legacy(&self) -> bool {
        self.canonical() != *self
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventKind {
    type Err = UberDirectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UberDirectError::UnknownEventKind(s.to_string()))
    }
}

/// `event.delivery_status` payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryStatusEvent {
    /// Delivery status the event refers to.
    pub status: String,
    /// Event kind.
    pub kind: String,
    /// When the event was generated.
    pub created: String,
    /// Live or test delivery.
    pub live_mode: bool,
    /// Delivery id.
    pub delivery_id: String,
    /// Event id.
    pub id: String,
    /// Delivery snapshot.
    pub data: DeliveryResponse,
    /// Customer (`cus_...`).
    pub customer_id: String,
    /// Developer (`dev_...`).
    pub developer_id: String,
    /// Account (`acc_...`).
    pub account_id: String,
    /// Batch (`bat_...`), shared by deliveries batched on one courier.
    pub batch_id: String,
    /// Courier route (`rte_...`).
    pub route_id: String,
}

/// `event.courier_update` payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourierUpdateEvent {
    /// Courier location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<LatLng>,
    /// Event kind.
    pub kind: EventKind,
    /// Live or test delivery.
    pub live_mode: bool,
    /// Delivery id.
    pub delivery_id: String,
    /// Job id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,
    /// Delivery snapshot.
    pub data: DeliveryResponse,
}

/// `event.refund_request` payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefundRequestEvent {
    /// Event kind.
    pub kind: EventKind,
    /// When the event was generated, seconds since the epoch.
    pub created: i64,
    /// Delivery id.
    pub delivery_id: String,
    /// Event id.
    pub id: String,
    /// Refund details.
    pub data: RefundData,
    /// Partner account id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    /// Partner order id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_order_id: Option<String>,
}
