//! Error taxonomy for project submissions
//!
//! Raw request failures ([`RequestFailure`]) come out of the HTTP layer and are
//! normalized into a single displayable [`FormError`] before they reach state.

use serde_json::Value;
use thiserror::Error;

/// Failure of a single HTTP request, before normalization
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestFailure {
    /// The request never completed (DNS, connection refused, CORS, ...)
    #[error("Request failed: {0}")]
    Network(String),

    /// The server answered with a non-2xx status
    #[error("HTTP error: {status}")]
    Status { status: u16, body: String },

    /// The server answered 2xx but the body could not be decoded
    #[error("Failed to parse JSON: {0}")]
    Decode(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Api,
    Network,
}

/// Normalized, displayable error stored in form state
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// Raised locally before any network call
    #[error("{message}")]
    Validation { message: String },

    /// The server responded with an error payload
    #[error("{message}")]
    Api { status: u16, message: String },

    /// The request did not complete
    #[error("{message}")]
    Network { message: String },
}

impl FormError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation { .. } => ErrorKind::Validation,
            Self::Api { .. } => ErrorKind::Api,
            Self::Network { .. } => ErrorKind::Network,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Validation { message }
            | Self::Api { message, .. }
            | Self::Network { message } => message,
        }
    }

    /// Short heading shown above the message
    pub fn title(&self) -> &'static str {
        match self.kind() {
            ErrorKind::Validation => "Invalid input",
            ErrorKind::Api => "The server rejected the request",
            ErrorKind::Network => "Could not reach the server",
        }
    }

    pub fn from_request_failure(failure: RequestFailure) -> Self {
        match failure {
            RequestFailure::Network(message) => Self::Network { message },
            RequestFailure::Status { status, body } => Self::Api {
                status,
                message: describe_error_body(status, &body),
            },
            RequestFailure::Decode(message) => Self::Api {
                status: 200,
                message: format!("Unexpected response from server: {message}"),
            },
        }
    }
}

impl From<RequestFailure> for FormError {
    fn from(failure: RequestFailure) -> Self {
        Self::from_request_failure(failure)
    }
}

/// Pull a human readable message out of an error response body.
///
/// Looks at `detail` (string, or a list of `{loc, msg}` validation entries),
/// then `message`, then `error`; falls back to the raw body.
pub fn describe_error_body(status: u16, body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return format!("HTTP error: {status}");
    }

    if let Ok(json) = serde_json::from_str::<Value>(trimmed) {
        match json.get("detail") {
            Some(Value::String(detail)) if !detail.trim().is_empty() => {
                return detail.clone();
            }
            Some(Value::Array(entries)) => {
                let lines: Vec<String> = entries.iter().filter_map(validation_entry_line).collect();
                if !lines.is_empty() {
                    return lines.join("\n");
                }
            }
            _ => {}
        }
        for key in ["message", "error"] {
            if let Some(text) = json.get(key).and_then(|v| v.as_str()) {
                return text.to_string();
            }
        }
    }

    trimmed.to_string()
}

fn validation_entry_line(entry: &Value) -> Option<String> {
    let msg = entry.get("msg").and_then(|v| v.as_str())?;
    let loc = entry
        .get("loc")
        .and_then(|v| v.as_array())
        .map(|parts| {
            parts
                .iter()
                .filter(|p| p.as_str() != Some("body"))
                .map(|p| match p {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect::<Vec<_>>()
                .join(".")
        })
        .unwrap_or_default();

    if loc.is_empty() {
        Some(msg.to_string())
    } else {
        Some(format!("{loc}: {msg}"))
    }
}
