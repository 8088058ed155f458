//! Delivery quotes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Request body for `POST customers/{customer_id}/delivery_quotes`.
///
/// Addresses are single strings in the form `"Street Address, City, State, Zip"`,
/// or a JSON-encoded [`StructuredAddress`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuoteRequest {
    /// Dropoff address.
    pub dropoff_address: String,
    /// Pickup address.
    pub pickup_address: String,
    /// Dropoff latitude.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dropoff_latitude: Option<f64>,
    /// Dropoff longitude.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dropoff_longitude: Option<f64>,
    /// Dropoff phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dropoff_phone_number: Option<String>,
    /// Pickup latitude.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pickup_latitude: Option<f64>,
    /// Pickup longitude.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pickup_longitude: Option<f64>,
    /// Pickup phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pickup_phone_number: Option<String>,
    /// Start of the pickup window.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pickup_ready_dt: Option<DateTime<Utc>>,
    /// End of the pickup window.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pickup_deadline_dt: Option<DateTime<Utc>>,
    /// Start of the dropoff window.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dropoff_ready_dt: Option<DateTime<Utc>>,
    /// End of the dropoff window.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dropoff_deadline_dt: Option<DateTime<Utc>>,
    /// Value of the items in cents, VAT free (`$10.99` is `1099`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manifest_total_value: Option<i64>,
    /// Partner store identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_store_id: Option<String>,
}

impl QuoteRequest {
    /// Create a quote request between two addresses.
    pub fn new(pickup_address: impl Into<String>, dropoff_address: impl Into<String>) -> Self {
        Self {
            pickup_address: pickup_address.into(),
            dropoff_address: dropoff_address.into(),
            ..Default::default()
        }
    }

    /// Set the pickup ready time.
    #[must_use]
    pub fn with_pickup_ready(mut self, at: DateTime<Utc>) -> Self {
        self.pickup_ready_dt = Some(at);
        self
    }

    /// Set the manifest total value in cents.
    #[must_use]
    pub fn with_manifest_total_value(mut self, cents: i64) -> Self {
        self.manifest_total_value = Some(cents);
        self
    }
}

/// A priced delivery quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteResponse {
    /// When the quote was created.
    pub created: DateTime<Utc>,
    /// Currency of `fee`.
    pub currency_type: String,
    /// Dropoff deadline.
    pub dropoff_deadline: DateTime<Utc>,
    /// Estimated dropoff time.
    pub dropoff_eta: DateTime<Utc>,
    /// Estimated minutes to reach dropoff.
    pub duration: f64,
    /// When the quote stops being accepted.
    pub expires: DateTime<Utc>,
    /// Fee in cents.
    pub fee: i64,
    /// Quote id, passed as `quote_id` when creating the delivery.
    pub id: String,
    /// Object kind, always `delivery_quote`.
    pub kind: String,
    /// Estimated minutes until pickup.
    pub pickup_duration: f64,
    /// Partner store identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_store_id: Option<String>,
}

/// Structured form of an address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructuredAddress {
    /// Street lines.
    pub street_address: Vec<String>,
    /// City.
    pub city: String,
    /// State.
    pub state: String,
    /// Zip code.
    pub zip_code: String,
    /// Country.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

impl StructuredAddress {
    /// Encode as the JSON string the address fields expect.
    pub fn to_address_string(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
