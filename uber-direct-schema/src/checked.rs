//! Outcome of passing a payload through the validation gate.

use serde::Serialize;
use serde_json::Value;

/// A payload that either matched its schema or was let through unvalidated.
///
/// `Unvalidated` only appears when the gate's policy is
/// [`OnValidationFailure::Notify`](crate::OnValidationFailure::Notify);
/// the raw JSON is preserved exactly as received.
#[derive(Debug, Clone, PartialEq)]
pub enum Checked<T> {
    /// The payload matched and was decoded.
    Valid(T),
    /// The payload did not match.
    Unvalidated(Value),
}

impl<T> Checked<T> {
    /// Whether the payload matched its schema.
    pub fn is_valid(&self) -> bool {
        matches!(self, Checked::Valid(_))
    }

    /// Borrow the decoded value.
    pub fn valid(&self) -> Option<&T> {
        match self {
            Checked::Valid(value) => Some(value),
            Checked::Unvalidated(_) => None,
        }
    }

    /// Take the decoded value.
    pub fn into_valid(self) -> Option<T> {
        match self {
            Checked::Valid(value) => Some(value),
            Checked::Unvalidated(_) => None,
        }
    }

    /// Borrow the raw JSON of an unvalidated payload.
    pub fn raw(&self) -> Option<&Value> {
        match self {
            Checked::Valid(_) => None,
            Checked::Unvalidated(value) => Some(value),
        }
    }

    /// Map the decoded value.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Checked<U> {
        match self {
            Checked::Valid(value) => Checked::Valid(f(value)),
            Checked::Unvalidated(raw) => Checked::Unvalidated(raw),
        }
    }
}

impl<T: Serialize> Checked<T> {
    /// The payload as JSON, whichever variant it is.
    pub fn into_value(self) -> serde_json::Result<Value> {
        match self {
            Checked::Valid(value) => serde_json::to_value(value),
            Checked::Unvalidated(raw) => Ok(raw),
        }
    }
}

impl<T> From<T> for Checked<T> {
    fn from(value: T) -> Self {
        Checked::Valid(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_valid_accessors() {
        let checked: Checked<u32> = 7.into();
        assert!(checked.is_valid());
        assert_eq!(checked.valid(), Some(&7));
        assert_eq!(checked.raw(), None);
        assert_eq!(checked.map(|n| n * 2).into_valid(), Some(14));
    }

    #[test]
    fn test_unvalidated_keeps_raw() {
        let checked: Checked<u32> = Checked::Unvalidated(json!({"n": "seven"}));
        assert!(!checked.is_valid());
        assert_eq!(checked.raw(), Some(&json!({"n": "seven"})));
        assert_eq!(checked.clone().into_valid(), None);
        assert_eq!(checked.into_value().unwrap(), json!({"n": "seven"}));
    }
}
