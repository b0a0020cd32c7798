use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;

pub type ServerResult<T> = Result<T, ServerError>;

/// Server error types
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Catalog error: {0}")]
    Catalog(#[from] catalog::CatalogError),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

/// API error response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl ServerError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServerError::InvalidQuery(_) | ServerError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ServerError::Timeout => StatusCode::REQUEST_TIMEOUT,
            ServerError::NotFound(_) => StatusCode::NOT_FOUND,
            ServerError::Catalog(_) | ServerError::Internal(_) | ServerError::Config(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get error code string
    pub fn error_code(&self) -> &'static str {
        match self {
            ServerError::InvalidQuery(_) => "INVALID_QUERY",
            ServerError::BadRequest(_) => "BAD_REQUEST",
            ServerError::Timeout => "REQUEST_TIMEOUT",
            ServerError::Catalog(_) => "CATALOG_ERROR",
            ServerError::Internal(_) => "INTERNAL_ERROR",
            ServerError::Config(_) => "CONFIG_ERROR",
            ServerError::NotFound(_) => "NOT_FOUND",
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        let body = Json(json!({
            "error": {
                "code": self.error_code(),
                "message": self.to_string(),
            }
        }));

        (status, body).into_response()
    }
}

impl From<matcher::SearchError> for ServerError {
    fn from(err: matcher::SearchError) -> Self {
        ServerError::InvalidQuery(err.to_string())
    }
}

impl From<pricing::PricingError> for ServerError {
    fn from(err: pricing::PricingError) -> Self {
        ServerError::InvalidQuery(err.to_string())
    }
}

impl From<std::net::AddrParseError> for ServerError {
    fn from(err: std::net::AddrParseError) -> Self {
        ServerError::Config(format!("Invalid address: {err}"))
    }
}

impl From<std::io::Error> for ServerError {
    fn from(err: std::io::Error) -> Self {
        ServerError::Internal(format!("IO error: {err}"))
    }
}

impl From<anyhow::Error> for ServerError {
    fn from(err: anyhow::Error) -> Self {
        ServerError::Internal(err.to_string())
    }
}
