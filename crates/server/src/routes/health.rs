use crate::error::ServerResult;
use crate::state::ServerState;
use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::sync::Arc;
use std::time::SystemTime;

/// Global server start time for uptime calculation
static SERVER_START_TIME: once_cell::sync::Lazy<SystemTime> =
    once_cell::sync::Lazy::new(SystemTime::now);

fn uptime_seconds() -> u64 {
    SERVER_START_TIME
        .elapsed()
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Health check endpoint (liveness)
/// Returns 200 if server is running
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "service": "carecost-server",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "uptime_seconds": uptime_seconds(),
    }))
}

/// Readiness check endpoint
/// Ready once the catalog is loaded, which happens before the router exists
pub async fn readiness_check(
    State(state): State<Arc<ServerState>>,
) -> ServerResult<impl IntoResponse> {
    let catalog = state.catalog();

    Ok(Json(json!({
        "status": "ready",
        "service": "carecost-server",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "uptime_seconds": uptime_seconds(),
        "components": {
            "api": "ready",
            "catalog": {
                "status": "ready",
                "procedures": catalog.procedure_count(),
                "hospitals": catalog.hospital_count(),
            },
        }
    })))
}

/// Prometheus metrics endpoint
///
/// Renders the Prometheus text format when a recorder is installed and
/// falls back to a small JSON document otherwise.
pub async fn metrics(State(state): State<Arc<ServerState>>) -> Response {
    match &state.prometheus {
        Some(handle) if state.config.metrics_enabled => (
            [(CONTENT_TYPE, "text/plain; version=0.0.4")],
            handle.render(),
        )
            .into_response(),
        _ => Json(json!({
            "uptime_seconds": uptime_seconds(),
            "metrics_enabled": state.config.metrics_enabled,
        }))
        .into_response(),
    }
}
