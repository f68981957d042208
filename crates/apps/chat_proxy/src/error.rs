use std::fmt;
use std::time::Duration;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};

#[derive(Debug)]
pub enum ChatError {
    /// Request body had no usable `message`.
    MissingMessage,
    /// Connection, TLS or body-read failure talking to the upstream API.
    Transport(String),
    /// Upstream answered with a non-success status.
    Upstream { status: u16, details: Value },
    /// Upstream answered 2xx but not with a completion we understand.
    InvalidReply(String),
    Timeout(Duration),
}

impl ChatError {
    /// Transport failures, upstream 5xx and 429 are worth another attempt.
    pub fn is_retryable(&self) -> bool {
        match self {
            ChatError::Transport(_) => true,
            ChatError::Upstream { status, .. } => *status >= 500 || *status == 429,
            _ => false,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ChatError::MissingMessage => StatusCode::BAD_REQUEST,
            ChatError::Timeout(_) => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn details(&self) -> Value {
        match self {
            ChatError::Upstream { details, .. } => details.clone(),
            other => Value::String(other.to_string()),
        }
    }
}

impl fmt::Display for ChatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChatError::MissingMessage => write!(f, "Message is required"),
            ChatError::Transport(msg) => write!(f, "upstream request failed: {msg}"),
            ChatError::Upstream { status, .. } => write!(f, "upstream HTTP {status}"),
            ChatError::InvalidReply(msg) => write!(f, "unexpected upstream reply: {msg}"),
            ChatError::Timeout(limit) => {
                write!(f, "upstream did not answer within {}s", limit.as_secs_f64())
            }
        }
    }
}

impl std::error::Error for ChatError {}

impl IntoResponse for ChatError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match &self {
            ChatError::MissingMessage => json!({ "error": "Message is required" }),
            ChatError::Timeout(_) => json!({
                "error": "Chat API timed out",
                "details": self.details(),
            }),
            _ => json!({
                "error": "Failed to communicate with chat API",
                "details": self.details(),
            }),
        };
        (status, Json(body)).into_response()
    }
}
