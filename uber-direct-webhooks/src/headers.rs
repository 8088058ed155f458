//! Signature header extraction.

use http::HeaderMap;
use serde_json::{Map, Value};
use uber_direct_core::{Result, UberDirectError};

/// Inbound webhook headers: header name to JSON value.
///
/// Frameworks differ in how they expose headers; a value may be a string,
/// an array of strings for repeated headers, or anything else.
pub type WebhookHeaders = Map<String, Value>;

/// Convert an HTTP header map.
///
/// Names are lower case. A header that appears once becomes a string,
/// a repeated header becomes an array. Values that are not valid UTF-8
/// are skipped.
pub fn headers_from_http(headers: &HeaderMap) -> WebhookHeaders {
    let mut out = WebhookHeaders::new();
    for name in headers.keys() {
        let values: Vec<Value> = headers
            .get_all(name)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .map(|v| Value::String(v.to_string()))
            .collect();

        let value = match values.len() {
            0 => continue,
            1 => values.into_iter().next().unwrap_or(Value::Null),
            _ => Value::Array(values),
        };
        out.insert(name.as_str().to_string(), value);
    }
    out
}

/// Read the signature from `header_name`.
///
/// The exact key is tried first, then any key equal ignoring ASCII case, so
/// a map built by a framework that preserves the sender's casing still
/// matches. The platform itself only sends the lower-case name. An array
/// yields its first element. A missing,
/// null, empty-string or empty-array value is a missing signature; any
/// other non-string value is an invalid one.
pub fn extract_signature(headers: &WebhookHeaders, header_name: &str) -> Result<String> {
    let value = headers.get(header_name).or_else(|| {
        headers
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(header_name))
            .map(|(_, value)| value)
    });

    let value = match value {
        Some(Value::Array(items)) => items.first(),
        other => other,
    };

    match value {
        None | Some(Value::Null) => Err(UberDirectError::missing_signature(header_name)),
        Some(Value::String(s)) if s.is_empty() => {
            Err(UberDirectError::missing_signature(header_name))
        }
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(UberDirectError::invalid_signature("Invalid signature type")),
    }
}
