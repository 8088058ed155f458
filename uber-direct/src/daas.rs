//! Delivery endpoints.
//!
//! All paths are relative to the API base URL and scoped to a customer:
//! `customers/{customer_id}/...`.

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;
use tracing::debug;
use uber_direct_auth::{ApiTransport, AuthClient, Method};
use uber_direct_core::types::{
    DeliveryList, DeliveryRequest, DeliveryResponse, DeliveryStatus, PodRequest, PodResponse,
    QuoteRequest, QuoteResponse, UpdateDeliveryRequest,
};
use uber_direct_core::Result;
use uber_direct_schema::{Checked, Schema, ValidationGate};

/// Client for quotes, deliveries and proof of delivery.
///
/// Every response passes through the client's [`ValidationGate`]; with the
/// default gate a response that does not match its typed shape comes back
/// as [`Checked::Unvalidated`].
#[derive(Debug)]
pub struct DaasClient<T: ApiTransport = AuthClient> {
    transport: Arc<T>,
    gate: ValidationGate,
}

impl<T: ApiTransport> Clone for DaasClient<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            gate: self.gate.clone(),
        }
    }
}

impl<T: ApiTransport> DaasClient<T> {
    /// Create a client over `transport`.
    pub fn new(transport: T) -> Self {
        Self::from_shared(Arc::new(transport))
    }

    /// Create a client over a shared transport.
    pub fn from_shared(transport: Arc<T>) -> Self {
        Self {
            transport,
            gate: ValidationGate::default(),
        }
    }

    /// Validate responses through `gate`.
    #[must_use]
    pub fn with_gate(mut self, gate: ValidationGate) -> Self {
        self.gate = gate;
        self
    }

    /// The underlying transport.
    pub fn transport(&self) -> &Arc<T> {
        &self.transport
    }

    fn deliveries_path(&self, customer_id: &str) -> String {
        format!("customers/{customer_id}/deliveries")
    }

    async fn call<R: Schema>(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<Checked<R>> {
        debug!(method = %method, path, "Calling delivery endpoint");
        let value = self.transport.request(method, path, body).await?;
        self.gate.check(value)
    }

    /// Price a delivery between two addresses.
    pub async fn quote(&self, request: &QuoteRequest) -> Result<Checked<QuoteResponse>> {
        let path = format!("customers/{}/delivery_quotes", self.transport.customer_id());
        self.call(Method::POST, &path, Some(to_body(request)?)).await
    }

    /// Create a delivery.
    pub async fn create_delivery(
        &self,
        request: &DeliveryRequest,
    ) -> Result<Checked<DeliveryResponse>> {
        let path = self.deliveries_path(self.transport.customer_id());
        self.call(Method::POST, &path, Some(to_body(request)?)).await
    }

    /// Fetch a delivery by id.
    pub async fn get_delivery(&self, delivery_id: &str) -> Result<Checked<DeliveryResponse>> {
        let path = format!(
            "{}/{delivery_id}",
            self.deliveries_path(self.transport.customer_id())
        );
        self.call(Method::GET, &path, None).await
    }

    /// Modify an ongoing delivery.
    pub async fn update_delivery(
        &self,
        delivery_id: &str,
        request: &UpdateDeliveryRequest,
    ) -> Result<Checked<DeliveryResponse>> {
        let path = format!(
            "{}/{delivery_id}",
            self.deliveries_path(self.transport.customer_id())
        );
        self.call(Method::POST, &path, Some(to_body(request)?)).await
    }

    /// Cancel a delivery. Returns whether the delivery ended up canceled.
    pub async fn cancel_delivery(&self, delivery_id: &str) -> Result<bool> {
        let path = format!(
            "{}/{delivery_id}/cancel",
            self.deliveries_path(self.transport.customer_id())
        );
        let checked: Checked<DeliveryResponse> = self.call(Method::POST, &path, None).await?;

        Ok(match &checked {
            Checked::Valid(delivery) => delivery.is_canceled(),
            Checked::Unvalidated(raw) => {
                raw.get("status").and_then(Value::as_str) == Some(DeliveryStatus::Canceled.as_str())
            }
        })
    }

    /// List the customer's deliveries.
    pub async fn list_deliveries(&self) -> Result<Checked<DeliveryList>> {
        let path = self.deliveries_path(self.transport.customer_id());
        self.call(Method::GET, &path, None).await
    }

    /// Fetch a proof-of-delivery image for a delivery of `customer_id`.
    pub async fn proof_of_delivery(
        &self,
        customer_id: &str,
        delivery_id: &str,
        request: &PodRequest,
    ) -> Result<Checked<PodResponse>> {
        let path = format!(
            "{}/{delivery_id}/proof-of-delivery",
            self.deliveries_path(customer_id)
        );
        self.call(Method::POST, &path, Some(to_body(request)?)).await
    }
}

pub(crate) fn to_body<B: Serialize>(body: &B) -> Result<Value> {
    Ok(serde_json::to_value(body)?)
}
