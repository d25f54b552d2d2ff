//! Health check endpoint for service monitoring.

use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Health check response.
///
/// ```json
/// {
///   "status": "healthy",
///   "service": "accounts-service",
///   "timestamp": "2026-08-26T19:00:00Z"
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall service status
    pub status: &'static str,

    /// Which of the three services is answering
    pub service: &'static str,

    /// Current server timestamp
    pub timestamp: DateTime<Utc>,
}

/// Build the health response for a service. Routers wire this up as
/// `GET /health`.
pub fn health_response(service: &'static str) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service,
        timestamp: Utc::now(),
    })
}
