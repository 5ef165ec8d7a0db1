//! MCP echo handler.
//!
//! The body is decoded by hand rather than through the `Json` extractor so
//! that the `Content-Type` header is not required, strings that are not
//! valid Unicode are repaired, and every decode failure maps to the same 400
//! response.

use axum::Json;
use axum::body::Bytes;
use tracing::{debug, info};

use echo_core::{decode, echo};
use echo_core::models::{McpRequest, McpResponse};

use crate::error::{AppError, AppResult};

/// `POST /mcp` — echo the last message and context blocks back to the caller.
pub async fn mcp_handler(body: Bytes) -> AppResult<Json<McpResponse>> {
    let request: McpRequest = decode::decode_request(&body).map_err(|e| {
        debug!(error = %e, "rejecting malformed MCP request");
        AppError::InvalidRequest(e.to_string())
    })?;

    let pretty = serde_json::to_string_pretty(&request)
        .map_err(|e| AppError::Internal(format!("encoding request for log: {e}")))?;
    info!("Received MCP request:\n{pretty}");

    let response = echo::respond(&request, chrono::Utc::now())
        .map_err(|e| AppError::Internal(format!("formatting echo: {e}")))?;
    Ok(Json(response))
}
