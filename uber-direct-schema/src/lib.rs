//! # uber-direct-schema
//!
//! Response shape validation for uber-direct.
//!
//! Every payload the client receives, from an API response or a webhook, is
//! checked against the strict serde shape of its typed counterpart. What
//! happens on a mismatch is decided by a [`ValidationGate`]:
//!
//! - [`OnValidationFailure::Notify`] (default): the raw JSON is returned as
//!   [`Checked::Unvalidated`] and the caller keeps working.
//! - [`OnValidationFailure::Throw`]: the call fails with a validation error.
//!
//! A callback registered on the gate sees every failure either way.
//!
//! ## Example
//!
//! ```rust
//! use serde_json::json;
//! use uber_direct_core::types::PodResponse;
//! use uber_direct_schema::{validate, Checked, SchemaId, ValidationGate};
//!
//! assert!(validate(SchemaId::PodResponse, &json!({"document": "aGk="})).is_ok());
//!
//! let gate = ValidationGate::new().with_callback(|e| eprintln!("{e}"));
//! let checked = gate.check::<PodResponse>(json!({"doc": 1}))?;
//! assert!(matches!(checked, Checked::Unvalidated(_)));
//! # Ok::<(), uber_direct_core::UberDirectError>(())
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod checked;
pub mod gate;
pub mod schema;

pub use checked::Checked;
pub use gate::{OnValidationFailure, ValidationCallback, ValidationGate};
pub use schema::{decode, validate, Schema, SchemaId};
