//! API route handlers
//!
//! Routes are organized by functionality:
//!
//! - `health`: Health checks, readiness, and metrics
//! - `search`: Procedure price search
//! - `procedures`: Procedure lookup and type-ahead suggestions
//! - `hospitals`: Hospital lookup
//! - `insurance`: Selectable insurance providers and plans

pub mod health;
pub mod hospitals;
pub mod insurance;
pub mod procedures;
pub mod search;

use crate::error::{ServerError, ServerResult};
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

/// API version and base info
///
/// Returns server information including version and available endpoints.
///
/// # Response
///
/// ```json
/// {
///   "name": "CareCost Server",
///   "version": "0.1.0",
///   "api_version": "v1",
///   "endpoints": ["..."]
/// }
/// ```
pub async fn api_info() -> ServerResult<impl IntoResponse> {
    Ok(Json(json!({
        "name": "CareCost Server",
        "version": env!("CARGO_PKG_VERSION"),
        "api_version": "v1",
        "endpoints": [
            "/api/v1/search",
            "/api/v1/procedures",
            "/api/v1/procedures/{code}",
            "/api/v1/hospitals/{id}",
            "/api/v1/insurance",
            "/health",
            "/ready",
            "/metrics"
        ]
    })))
}

/// 404 Not Found handler
///
/// Returns a standardized error response for undefined routes.
pub async fn not_found() -> ServerError {
    ServerError::NotFound("no such route".into())
}
