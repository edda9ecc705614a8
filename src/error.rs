//! Domain error types for the StayFinder server.
//!
//! Uses thiserror for ergonomic error handling with automatic Display implementations.

use actix_web::{HttpResponse, ResponseError};
use std::fmt;
use uuid::Uuid;

/// Application-level errors.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The external search service call failed or timed out. The underlying
    /// cause is logged server-side under the correlation id; callers only
    /// ever see the generic message.
    #[error("Search service request failed (correlation id: {correlation_id})")]
    ExternalService { correlation_id: Uuid },

    /// An absolute page token failed to parse as an integer
    #[error("Invalid paging token: {0}")]
    InvalidPagingToken(String),

    /// Paging state from the previous request is absent or malformed
    #[error("Stale paging state: {0}")]
    StaleSession(String),

    /// A result slice was requested outside the bounds of the retrieved hits
    #[error("Result slice [{start}, {end}) out of range for {len} hits")]
    SliceOutOfRange {
        start: usize,
        end: usize,
        len: usize,
    },

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl AppError {
    /// Record an external-service failure: logs the cause, mints a
    /// correlation id, and returns the variant carrying only that id.
    pub fn external_service(cause: impl fmt::Display) -> Self {
        let correlation_id = Uuid::new_v4();
        tracing::error!(
            correlation_id = %correlation_id,
            "Search service call failed: {}",
            cause
        );
        AppError::ExternalService { correlation_id }
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let (status, error_code) = match self {
            AppError::ExternalService { .. } => (
                actix_web::http::StatusCode::BAD_GATEWAY,
                "EXTERNAL_SERVICE_ERROR",
            ),
            AppError::InvalidPagingToken(_) => (
                actix_web::http::StatusCode::BAD_REQUEST,
                "INVALID_PAGING_TOKEN",
            ),
            AppError::StaleSession(_) => {
                (actix_web::http::StatusCode::CONFLICT, "STALE_PAGE_STATE")
            }
            AppError::SliceOutOfRange { .. } => {
                tracing::error!("Result mapper bounds violation: {}", self);
                (
                    actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
                    "SLICE_OUT_OF_RANGE",
                )
            }
            AppError::InvalidInput(_) => {
                (actix_web::http::StatusCode::BAD_REQUEST, "INVALID_INPUT")
            }
        };

        HttpResponse::build(status).json(ErrorResponse {
            error: error_code.to_string(),
            message: self.to_string(),
        })
    }
}

/// Error response body matching OpenAPI schema.
#[derive(Debug, serde::Serialize, serde::Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;
