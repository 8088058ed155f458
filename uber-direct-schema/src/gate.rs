//! Throw-or-notify validation gate.

use crate::checked::Checked;
use crate::schema::{decode, Schema};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};
use uber_direct_core::{Result, ValidationError};

/// Callback invoked on every validation failure.
pub type ValidationCallback = Arc<dyn Fn(&ValidationError) + Send + Sync>;

/// What the gate does when a payload does not match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OnValidationFailure {
    /// Fail the call with [`UberDirectError::Validation`](uber_direct_core::UberDirectError::Validation).
    Throw,
    /// Return the raw payload as [`Checked::Unvalidated`].
    #[default]
    Notify,
}

/// Validates API payloads against their schemas.
///
/// The callback, if set, runs on every failure regardless of the policy.
#[derive(Clone, Default)]
pub struct ValidationGate {
    on_failure: OnValidationFailure,
    callback: Option<ValidationCallback>,
}

impl fmt::Debug for ValidationGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidationGate")
            .field("on_failure", &self.on_failure)
            .field("callback", &self.callback.is_some())
            .finish()
    }
}

impl ValidationGate {
    /// Create a gate that notifies and never fails.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a gate that fails on mismatch.
    pub fn throwing() -> Self {
        Self::new().with_policy(OnValidationFailure::Throw)
    }

    /// Set the failure policy.
    #[must_use]
    pub fn with_policy(mut self, on_failure: OnValidationFailure) -> Self {
        self.on_failure = on_failure;
        self
    }

    /// Set the failure callback.
    #[must_use]
    pub fn with_callback<F>(mut self, callback: F) -> Self
    where
        F: Fn(&ValidationError) + Send + Sync + 'static,
    {
        self.callback = Some(Arc::new(callback));
        self
    }

    /// Current policy.
    pub fn policy(&self) -> OnValidationFailure {
        self.on_failure
    }

    /// Validate `value` as `T`.
    pub fn check<T: Schema>(&self, value: Value) -> Result<Checked<T>> {
        match decode::<T>(&value) {
            Ok(decoded) => {
                debug!(schema = %T::ID, "Payload matched schema");
                Ok(Checked::Valid(decoded))
            }
            Err(error) => {
                warn!(
                    schema = %T::ID,
                    error = %error.message,
                    policy = ?self.on_failure,
                    "Payload did not match schema"
                );
                if let Some(ref callback) = self.callback {
                    callback(&error);
                }
                match self.on_failure {
                    OnValidationFailure::Throw => Err(error.into()),
                    OnValidationFailure::Notify => Ok(Checked::Unvalidated(value)),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use uber_direct_core::types::QuoteResponse;
    use uber_direct_core::{fixtures, UberDirectError};

    fn broken_quote() -> Value {
        let mut quote = fixtures::quote_json();
        quote["fee"] = json!("free");
        quote
    }

    #[test]
    fn test_default_policy_is_notify() {
        assert_eq!(ValidationGate::new().policy(), OnValidationFailure::Notify);
    }

    #[test]
    fn test_valid_payload() {
        let gate = ValidationGate::throwing();
        let checked = gate.check::<QuoteResponse>(fixtures::quote_json()).unwrap();
        assert_eq!(checked.valid().map(|q| q.fee), Some(799));
    }

    #[test]
    fn test_notify_returns_raw_payload() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let gate = ValidationGate::new().with_callback(move |e| {
            sink.lock().unwrap().push(e.schema.clone());
        });

        let checked = gate.check::<QuoteResponse>(broken_quote()).unwrap();
        assert_eq!(checked, Checked::Unvalidated(broken_quote()));
        assert_eq!(*seen.lock().unwrap(), vec!["QuoteResponse".to_string()]);
    }

    #[test]
    fn test_throw_fails_and_still_calls_back() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let gate = ValidationGate::throwing().with_callback(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        let err = gate.check::<QuoteResponse>(broken_quote()).unwrap_err();
        assert!(matches!(err, UberDirectError::Validation(ref v) if v.schema == "QuoteResponse"));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_callback_not_called_on_success() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let gate = ValidationGate::new().with_callback(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        gate.check::<QuoteResponse>(fixtures::quote_json()).unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_debug_hides_callback() {
        let gate = ValidationGate::new().with_callback(|_| {});
        assert_eq!(
            format!("{:?}", gate),
            "ValidationGate { on_failure: Notify, callback: true }"
        );
    }
}
