//! Schema registry.
//!
//! A schema is the strict serde shape of one of the typed API payloads.
//! Validating a JSON value means deserializing it into that shape without
//! keeping the result.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use std::fmt;
use uber_direct_core::types::{
    CourierUpdateEvent, CreateOrganizationResponse, DeliveryList, DeliveryResponse,
    DeliveryStatusEvent, InviteMemberResponse, OrganizationDetails, PodResponse, QuoteResponse,
    RefundRequestEvent,
};
use uber_direct_core::ValidationError;

/// Identifies a payload shape that can be validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemaId {
    /// [`QuoteResponse`]
    QuoteResponse,
    /// [`DeliveryResponse`]
    DeliveryResponse,
    /// [`DeliveryList`]
    DeliveryList,
    /// [`PodResponse`]
    PodResponse,
    /// [`OrganizationDetails`]
    OrganizationDetails,
    /// [`CreateOrganizationResponse`]
    CreateOrganizationResponse,
    /// [`InviteMemberResponse`]
    InviteMemberResponse,
    /// [`DeliveryStatusEvent`]
    DeliveryStatusEvent,
    /// [`CourierUpdateEvent`]
    CourierUpdateEvent,
    /// [`RefundRequestEvent`]
    RefundRequestEvent,
}

impl SchemaId {
    /// Schema name used in diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Self::QuoteResponse => "QuoteResponse",
            Self::DeliveryResponse => "DeliveryResponse",
            Self::DeliveryList => "DeliveryList",
            Self::PodResponse => "PodResponse",
            Self::OrganizationDetails => "OrganizationDetails",
            Self::CreateOrganizationResponse => "CreateOrganizationResponse",
            Self::InviteMemberResponse => "InviteMemberResponse",
            Self::DeliveryStatusEvent => "DeliveryStatusEvent",
            Self::CourierUpdateEvent => "CourierUpdateEvent",
            Self::RefundRequestEvent => "RefundRequestEvent",
        }
    }
}

impl fmt::Display for SchemaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A typed payload with a registered schema.
pub trait Schema: DeserializeOwned {
    /// Schema this type validates against.
    const ID: SchemaId;
}

macro_rules! register_schemas {
    ($($ty:ident),* $(,)?) => {
        $(
            impl Schema for $ty {
                const ID: SchemaId = SchemaId::$ty;
            }
        )*

        /// Check `value` against the schema identified by `id`.
        pub fn validate(id: SchemaId, value: &Value) -> Result<(), ValidationError> {
            match id {
                $(SchemaId::$ty => decode::<$ty>(value).map(drop),)*
            }
        }
    };
}

register_schemas!(
    QuoteResponse,
    DeliveryResponse,
    DeliveryList,
    PodResponse,
    OrganizationDetails,
    CreateOrganizationResponse,
    InviteMemberResponse,
    DeliveryStatusEvent,
    CourierUpdateEvent,
    RefundRequestEvent,
);

/// Decode `value` into `T`, reporting a mismatch as a [`ValidationError`].
pub fn decode<T: Schema>(value: &Value) -> Result<T, ValidationError> {
    T::deserialize(value).map_err(|e| ValidationError::new(T::ID.name(), e.to_string()))
}
