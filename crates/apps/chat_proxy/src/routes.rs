use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::error;

use crate::error::ChatError;
use crate::upstream::UpstreamClient;

#[derive(Clone)]
pub struct AppState {
    pub upstream: UpstreamClient,
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/chat", post(chat).fallback(method_not_allowed))
        .route("/api/ping", get(ping).fallback(method_not_allowed))
        .with_state(state)
}

async fn chat(
    State(state): State<AppState>,
    body: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, ChatError> {
    let message = body
        .ok()
        .and_then(|Json(req)| req.message)
        .filter(|m| !m.trim().is_empty())
        .ok_or(ChatError::MissingMessage)?;

    match state.upstream.complete(&message).await {
        Ok(response) => Ok(Json(ChatResponse { response })),
        Err(err) => {
            error!("chat request failed: {err}");
            Err(err)
        }
    }
}

/// `timestamp` is ISO-8601 UTC with milliseconds, e.g. `2024-05-01T08:30:00.000Z`.
async fn ping() -> Json<Value> {
    let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
    Json(json!({ "status": "ok", "timestamp": timestamp }))
}

async fn method_not_allowed() -> (StatusCode, Json<Value>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(json!({ "message": "Method Not Allowed" })),
    )
}
