//! Health check endpoint.

use axum::Json;

use echo_core::models::HealthResponse;

/// `GET /health` — always reports ok.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
