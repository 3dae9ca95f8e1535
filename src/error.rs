use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Response type for health check endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

/// Response type for unhealthy status
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct UnhealthyResponse {
    pub status: String,
    pub error: String,
}

/// The store call a request was making when it failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreOp {
    Insert,
    Delete,
    Update,
    Search,
    Report,
}

impl StoreOp {
    fn verb(self) -> &'static str {
        match self {
            StoreOp::Insert => "insert",
            StoreOp::Delete => "delete",
            StoreOp::Update => "update",
            StoreOp::Search => "search",
            StoreOp::Report => "fetch",
        }
    }
}

impl fmt::Display for StoreOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.verb())
    }
}

/// Custom error type for the form and table endpoints
///
/// Every variant renders as plain text. Store failures are logged with their
/// full cause chain, but the client only ever sees a generic message.
#[derive(Debug)]
pub enum ApiError {
    /// The store handle has not been (or could not be) initialized
    NotInitialized,
    /// A store operation failed
    Store {
        op: StoreOp,
        source: anyhow::Error,
    },
    /// A required form or query field was not submitted
    MissingField(&'static str),
}

impl ApiError {
    pub fn store(op: StoreOp) -> impl FnOnce(anyhow::Error) -> Self {
        move |source| ApiError::Store { op, source }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotInitialized => {
                tracing::warn!("Rejecting request: database not initialized");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Database not initialized".to_string(),
                )
            }
            ApiError::Store { op, source } => {
                tracing::error!("Error during {} operation: {:#}", op, source);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Failed to {} data", op),
                )
            }
            ApiError::MissingField(field) => (
                StatusCode::BAD_REQUEST,
                format!("Missing field: {}", field),
            ),
        };

        (status, message).into_response()
    }
}
