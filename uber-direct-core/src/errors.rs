//! Error types for uber-direct.
//!
//! Every fallible operation in the workspace returns [`UberDirectError`].
//! Struct errors carry the detail needed to diagnose a failure; the enum
//! wraps them transparently so `Display` output stays the struct's own.

use serde_json::Value;
use std::fmt;
use thiserror::Error;
use uber_direct_retries::{Cancelled, Retryable};

/// The main error type for uber-direct operations.
#[derive(Error, Debug)]
pub enum UberDirectError {
    /// Invalid setup: bad credentials, bad token type, bad base URL.
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    /// The OAuth token exchange failed.
    #[error(transparent)]
    Authentication(#[from] AuthenticationError),

    /// An API request failed.
    #[error(transparent)]
    Request(#[from] RequestError),

    /// The webhook carried no signature header.
    #[error("No signature provided in header '{header}'")]
    MissingSignature {
        /// Header that was inspected.
        header: String,
    },

    /// The webhook signature was malformed or did not match.
    #[error("Invalid signature: {reason}")]
    InvalidSignature {
        /// What was wrong with it.
        reason: String,
    },

    /// The webhook payload could not be interpreted.
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    /// The webhook `kind` is not one we know.
    #[error("Unknown webhook event kind: {0}")]
    UnknownEventKind(String),

    /// A response did not match its expected shape.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The operation was cancelled.
    #[error("Operation cancelled")]
    Cancelled,

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias using UberDirectError.
pub type Result<T> = std::result::Result<T, UberDirectError>;

impl UberDirectError {
    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(ConfigurationError::new(message))
    }

    /// Create an invalid signature error.
    pub fn invalid_signature(reason: impl Into<String>) -> Self {
        Self::InvalidSignature {
            reason: reason.into(),
        }
    }

    /// Create a missing signature error.
    pub fn missing_signature(header: impl Into<String>) -> Self {
        Self::MissingSignature {
            header: header.into(),
        }
    }

    /// HTTP status attached to this error, if any.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Request(e) => e.status,
            Self::Authentication(e) => e.status,
            _ => None,
        }
    }
}

impl Retryable for UberDirectError {
    fn status(&self) -> Option<u16> {
        match self {
            Self::Request(e) => e.status,
            _ => None,
        }
    }
}

impl From<Cancelled> for UberDirectError {
    fn from(_: Cancelled) -> Self {
        Self::Cancelled
    }
}

/// Invalid configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub struct ConfigurationError {
    /// Error message.
    pub message: String,
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl ConfigurationError {
    /// Create a new configuration error.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// The client-credentials exchange failed.
#[derive(Error, Debug, Clone)]
pub struct AuthenticationError {
    /// Error message.
    pub message: String,
    /// HTTP status from the identity endpoint.
    pub status: Option<u16>,
    /// Response body from the identity endpoint.
    pub body: Option<String>,
}

impl fmt::Display for AuthenticationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Authentication failed: {}", self.message)?;
        if let Some(status) = self.status {
            write!(f, " (status {})", status)?;
        }
        if let Some(ref body) = self.body {
            if !body.is_empty() {
                write!(f, ": {}", body)?;
            }
        }
        Ok(())
    }
}

impl AuthenticationError {
    /// Create a new authentication error.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: None,
            body: None,
        }
    }

    /// Set the response status.
    #[must_use]
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    /// Set the response body.
    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }
}

/// A failed API request with full request/response diagnostics.
///
/// `Display` renders a multi-line report:
///
/// ```text
/// Error Message -
///   Request failed with status code 500
///
/// Request -
///   POST customers/cus_1/deliveries
///
/// Request Data -
///   {
///     "pickup_name": "Store"
///   }
///
/// Response -
///   500 Internal Server Error
///
/// Response Data -
///   {
///     "code": "internal"
///   }
/// ```
#[derive(Error, Debug, Clone)]
pub struct RequestError {
    /// Error message.
    pub message: String,
    /// HTTP method, upper case.
    pub method: String,
    /// Path relative to the API base URL.
    pub path: String,
    /// Request body, if one was sent.
    pub request_body: Option<Value>,
    /// HTTP status, absent for transport failures.
    pub status: Option<u16>,
    /// Response body. JSON when it parsed, a string otherwise.
    pub response_body: Option<Value>,
    /// Number of attempts made.
    pub attempts: u32,
}

impl RequestError {
    /// Create a new request error.
    pub fn new(
        method: impl Into<String>,
        path: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            message: message.into(),
            method: method.into(),
            path: path.into(),
            request_body: None,
            status: None,
            response_body: None,
            attempts: 1,
        }
    }

    /// Set the request body.
    #[must_use]
    pub fn with_request_body(mut self, body: Option<Value>) -> Self {
        self.request_body = body;
        self
    }

    /// Set the response status and body.
    #[must_use]
    pub fn with_response(mut self, status: u16, body: Option<Value>) -> Self {
        self.status = Some(status);
        self.response_body = body;
        self
    }

    /// Set the number of attempts.
    #[must_use]
    pub fn with_attempts(mut self, attempts: u32) -> Self {
        self.attempts = attempts;
        self
    }

    /// Whether the upstream answered `504 Gateway Timeout`.
    pub fn is_gateway_timeout(&self) -> bool {
        self.status == Some(504)
    }
}

fn indent(text: &str) -> String {
    text.lines()
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("  {line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

fn reason_phrase(status: u16) -> &'static str {
    match status {
        400 => "Bad Request",
        401 => "Unauthorized",
        403 => "Forbidden",
        404 => "Not Found",
        409 => "Conflict",
        422 => "Unprocessable Entity",
        429 => "Too Many Requests",
        500 => "Internal Server Error",
        502 => "Bad Gateway",
        503 => "Service Unavailable",
        504 => "Gateway Timeout",
        _ => "",
    }
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Error Message -")?;
        write!(f, "  {}", self.message)?;
        if self.attempts > 1 {
            write!(f, " after {} attempts", self.attempts)?;
        }
        writeln!(f)?;

        writeln!(f)?;
        writeln!(f, "Request -")?;
        writeln!(f, "  {} {}", self.method, self.path)?;

        if let Some(ref body) = self.request_body {
            writeln!(f)?;
            writeln!(f, "Request Data -")?;
            writeln!(f, "{}", indent(&pretty(body)))?;
        }

        if let Some(status) = self.status {
            writeln!(f)?;
            writeln!(f, "Response -")?;
            writeln!(f, "  {} {}", status, reason_phrase(status))?;

            if let Some(ref body) = self.response_body {
                writeln!(f)?;
                writeln!(f, "Response Data -")?;
                write!(f, "{}", indent(&pretty(body)))?;
            }
        }
        Ok(())
    }
}

/// A value did not match the shape registered for a schema.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Name of the schema that was checked.
    pub schema: String,
    /// Description of the first mismatch found.
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Validation failed for {}: {}",
            self.schema, self.message
        )
    }
}

impl ValidationError {
    /// Create a new validation error.
    pub fn new(schema: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            schema: schema.into(),
            message: message.into(),
        }
    }
}
