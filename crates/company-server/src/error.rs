//! API error types with JSON responses.
//!
//! Every error renders as `{"error": "<message>"}`. Store failures that are
//! not classified are logged with full detail and reported to the client
//! only as "DB error".

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use company_core::ValidationError;
use company_store::StoreError;
use serde::{Deserialize, Serialize};

/// API error that can be returned from handlers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Path id is not a UUID (400).
    #[error("Invalid id")]
    InvalidId,

    /// Body is not valid JSON for the endpoint (400).
    #[error("Invalid request")]
    InvalidRequest,

    /// Field-level validation failure (400).
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Name already taken (400).
    #[error("Duplicate item name")]
    DuplicateName,

    /// Missing, malformed, or unverifiable bearer token (403).
    #[error("Invalid JWT")]
    InvalidJwt,

    /// Token is genuine but lacks the required role (403).
    #[error("Access denied")]
    AccessDenied,

    /// No company with the given id (404).
    #[error("Item not found")]
    NotFound,

    /// Unclassified store failure (500).
    #[error("DB error")]
    Database(#[source] StoreError),
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => ApiError::NotFound,
            StoreError::DuplicateName => ApiError::DuplicateName,
            other => ApiError::Database(other),
        }
    }
}

impl ApiError {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidId
            | Self::InvalidRequest
            | Self::Validation(_)
            | Self::DuplicateName => StatusCode::BAD_REQUEST,
            Self::InvalidJwt | Self::AccessDenied => StatusCode::FORBIDDEN,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// JSON error response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Self::Database(source) = &self {
            tracing::error!(error = %source, "Store operation failed");
        }

        let status = self.status_code();
        let body = ErrorResponse {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// Result type for API handlers.
pub type ApiResult<T> = Result<T, ApiError>;
