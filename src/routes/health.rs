//! Health check endpoint for container orchestration.
//!
//! The orchestrating environment probes this path on a fixed schedule and
//! marks the instance unhealthy after repeated failures; the service's only
//! job is to answer truthfully and quickly. The handler reads an atomic
//! readiness flag and nothing else, so it can never be serialized behind
//! reading-generation work.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use serde_json::json;

use crate::config::SERVICE_NAME;
use crate::state::AppState;

/// Health check handler.
///
/// Returns 200 once the endpoint is bound and storage is verified, 503 while
/// the process is still starting. The body is informational only; probes key
/// off the status code.
pub async fn health(State(state): State<AppState>) -> Response {
    if state.is_ready() {
        (
            StatusCode::OK,
            Json(json!({
                "status": "healthy",
                "service": SERVICE_NAME,
                "timestamp": Utc::now().to_rfc3339(),
            })),
        )
            .into_response()
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({ "status": "starting" })),
        )
            .into_response()
    }
}
