//! Request failure type and server message extraction.
//!
//! ERROR HANDLING
//! ==============
//! The dashboard has one policy for every rejected request: show the server's
//! message if it sent one, otherwise a generic fallback. [`error_message`] is
//! that policy; transports build [`ApiError`] values with it.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde_json::Value;

/// Shown when no response was received at all.
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

/// Error returned by every API call in the client and the CLI.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, connection, CORS).
    #[error("network error: {0}")]
    Network(String),
    /// The session is gone: the token refresh was rejected or impossible.
    #[error("session expired, please sign in again")]
    Unauthorized,
    /// The backend answered with a non-success status.
    #[error("{message}")]
    Status { status: u16, message: String },
    /// The response body did not match the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),
    /// Called from a context with no HTTP transport (server-side render).
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Build a status error from a raw response body.
    #[must_use]
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = match serde_json::from_str::<Value>(body) {
            Ok(value) => error_message(status, &value),
            Err(_) => default_status_message(status),
        };
        Self::Status { status, message }
    }

    /// Text for toasts and store error fields.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Network(_) => GENERIC_ERROR_MESSAGE.to_owned(),
            other => other.to_string(),
        }
    }

    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Pick the most specific human message from an error body.
///
/// Order: `message`, `error`, `details`; blank strings are skipped.
#[must_use]
pub fn error_message(status: u16, body: &Value) -> String {
    ["message", "error", "details"]
        .iter()
        .filter_map(|key| body.get(*key).and_then(Value::as_str))
        .map(str::trim)
        .find(|text| !text.is_empty())
        .map_or_else(|| default_status_message(status), str::to_owned)
}

fn default_status_message(status: u16) -> String {
    format!("Request failed with status {status}")
}
