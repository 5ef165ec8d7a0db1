//! # echo_api
//!
//! HTTP API library for the MCP echo server.

pub mod config;
pub mod error;
pub mod handlers;

use axum::Router;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

use crate::handlers::{health, mcp};

/// Route for the echo endpoint.
pub const POST_MCP: &str = "/mcp";
/// Route for the health check.
pub const GET_HEALTH: &str = "/health";

/// Builds the Axum router with all routes.
///
/// Handlers are stateless, so the router carries no shared state.
pub fn router() -> Router {
    Router::new()
        .route(POST_MCP, post(mcp::mcp_handler))
        .route(GET_HEALTH, get(health::health_handler))
        .layer(TraceLayer::new_for_http())
}
