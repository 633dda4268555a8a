//! Uniform failure type for every backend call.
//!
//! ERROR HANDLING
//! ==============
//! Pages receive `ApiResult<T>` instead of catching transport exceptions, and
//! choose their own presentation (alert, inline notice, log-only).

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde_json::Value;

/// Result of a backend call.
pub type ApiResult<T> = Result<T, ApiError>;

/// Reason a backend call did not produce a usable value.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("network request failed: {0}")]
    Network(String),
    /// The backend answered with a non-success status.
    #[error("request rejected with status {status}")]
    Status { status: u16, message: Option<String> },
    /// The response body did not match the expected shape.
    #[error("response decode failed: {0}")]
    Decode(String),
    /// The request body could not be serialized.
    #[error("request encode failed: {0}")]
    Encode(String),
    /// No transport is available (server-side rendering).
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Build a status error, pulling a human-readable message out of `body`.
    #[must_use]
    pub fn from_status(status: u16, body: &str) -> Self {
        Self::Status { status, message: server_message(body) }
    }

    /// The server-provided message, if the backend sent one.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status { message: Some(message), .. } => Some(message),
            _ => None,
        }
    }

    /// Text to show the user: the server message, else `fallback`.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        self.server_message().unwrap_or(fallback).to_owned()
    }

    /// Whether the backend rejected the credential (401/403).
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Status { status: 401 | 403, .. })
    }
}

/// Extract `message`, or the first `errors.message[]` entry, from a JSON body.
pub(crate) fn server_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    if let Some(message) = value.get("message").and_then(Value::as_str) {
        if !message.trim().is_empty() {
            return Some(message.to_owned());
        }
    }
    value
        .get("errors")
        .and_then(|errors| errors.get("message"))
        .and_then(Value::as_array)
        .and_then(|list| list.first())
        .and_then(Value::as_str)
        .map(str::to_owned)
}
