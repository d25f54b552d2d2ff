//! Error types and HTTP error response handling.
//!
//! This module defines all application errors and how they are converted
//! into HTTP responses with appropriate status codes and JSON bodies.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Application-wide error type.
///
/// Each variant maps to a specific HTTP status code and error message.
///
/// Remote peer unavailability is deliberately *not* represented here: the
/// composition gateway absorbs outbound call failures into a fallback
/// projection and never lets them reach a client-visible response. See
/// [`crate::gateway`].
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Requested entity does not exist.
    ///
    /// Returns HTTP 404 Not Found.
    #[error("{0}")]
    NotFound(String),

    /// Uniqueness violation (account number or email already taken).
    ///
    /// Returns HTTP 409 Conflict.
    #[error("{0}")]
    AlreadyExists(String),

    /// Request field failed validation (e.g., non-positive amount).
    ///
    /// Returns HTTP 400 Bad Request. The message names the offending field.
    #[error("{0}")]
    InvalidArgument(String),

    /// A lifecycle rule denied the requested state change.
    ///
    /// Returns HTTP 400 Bad Request with a reason naming the current status.
    #[error("{0}")]
    InvalidState(String),

    /// Any other unexpected failure.
    ///
    /// Returns HTTP 500 Internal Server Error. Details are logged server-side
    /// but never exposed to the caller.
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

/// Convert AppError into an HTTP response.
///
/// This implementation allows Axum handlers to return `Result<T, AppError>`
/// and have errors automatically converted to proper HTTP responses.
///
/// # Response Format
///
/// All errors return JSON in this format:
/// ```json
/// {
///   "error": {
///     "code": "error_type",
///     "message": "Human-readable error message"
///   }
/// }
/// ```
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Map each error variant to (HTTP status, error code, message)
        let (status, code, message) = match self {
            AppError::NotFound(ref msg) => (StatusCode::NOT_FOUND, "not_found", msg.clone()),
            AppError::AlreadyExists(ref msg) => (StatusCode::CONFLICT, "conflict", msg.clone()),
            AppError::InvalidArgument(ref msg) => {
                (StatusCode::BAD_REQUEST, "invalid_argument", msg.clone())
            }
            AppError::InvalidState(ref msg) => {
                (StatusCode::BAD_REQUEST, "invalid_state", msg.clone())
            }
            AppError::Internal(ref err) => {
                tracing::error!("unexpected failure: {err:#}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
