//! Request and backend error taxonomy.
//!
//! ERROR HANDLING
//! ==============
//! Backend error bodies are decoded defensively into a tagged [`ApiError`];
//! no single payload shape is assumed. Every variant renders as one
//! human-readable string so UI layers can show it directly.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde_json::Value;

/// Coarse classification of a backend-reported failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApiErrorKind {
    Validation,
    Auth,
    Unknown,
}

/// Non-success response from the backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiError {
    pub status: u16,
    pub kind: ApiErrorKind,
    /// Message extracted from the response body, when one was present.
    pub message: Option<String>,
}

impl ApiError {
    /// Decode a failed response. `body` may be empty or not JSON at all.
    pub fn from_response(status: u16, body: &str) -> Self {
        let parsed = serde_json::from_str::<Value>(body).ok();
        let validation_list = parsed
            .as_ref()
            .and_then(|v| v.get("detail"))
            .is_some_and(Value::is_array);
        let message = parsed.as_ref().and_then(extract_message);

        let kind = match status {
            401 | 403 => ApiErrorKind::Auth,
            400 | 422 => ApiErrorKind::Validation,
            _ if validation_list => ApiErrorKind::Validation,
            _ => ApiErrorKind::Unknown,
        };
        Self { status, kind, message }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.message {
            Some(message) => f.write_str(message),
            None => f.write_str(&status_failure_message(self.status)),
        }
    }
}

impl std::error::Error for ApiError {}

/// Generic message used when the backend supplies none.
pub fn status_failure_message(status: u16) -> String {
    format!("request failed with status {status}")
}

/// Pull a readable message out of the shapes the backend is known to emit:
/// `{detail:{message}}`, `{detail:"..."}`, `{detail:[{msg}]}`,
/// `{error:{message}}`, and `{message}`.
fn extract_message(body: &Value) -> Option<String> {
    let non_empty = |s: &str| (!s.trim().is_empty()).then(|| s.to_owned());

    if let Some(detail) = body.get("detail") {
        match detail {
            Value::String(s) => return non_empty(s),
            Value::Object(_) => {
                if let Some(msg) = detail.get("message").and_then(Value::as_str) {
                    return non_empty(msg);
                }
            }
            Value::Array(items) => {
                let joined = items
                    .iter()
                    .filter_map(|item| item.get("msg").and_then(Value::as_str))
                    .collect::<Vec<_>>()
                    .join("; ");
                return non_empty(&joined);
            }
            _ => {}
        }
    }
    if let Some(msg) = body.get("error").and_then(|e| e.get("message")).and_then(Value::as_str) {
        return non_empty(msg);
    }
    body.get("message").and_then(Value::as_str).and_then(non_empty)
}

/// Failure of an outbound request.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Transport(String),
    /// The backend answered with a non-success status.
    #[error(transparent)]
    Api(#[from] ApiError),
    /// A credential was required and none is stored.
    #[error("Unauthorized: No token found")]
    Unauthorized,
    /// A success response body did not match the expected shape.
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl RequestError {
    /// Backend-supplied message, if this is an API error that carried one.
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            Self::Api(err) => err.message.as_deref(),
            _ => None,
        }
    }
}
