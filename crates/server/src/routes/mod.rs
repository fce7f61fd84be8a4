//! API route handlers
//!
//! - `complete`: legacy autocomplete, structured search and snapshot reload
//! - `health`: liveness, readiness and Prometheus metrics

pub mod complete;
pub mod health;

use crate::error::{ServerError, ServerResult};
use crate::state::{ServerMetadata, ServerState};
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;
use std::sync::Arc;

/// API version and base info (`GET /api/v1/info`)
///
/// # Response
///
/// ```json
/// {
///   "name": "pathrank",
///   "version": "0.1.0",
///   "api_version": "v1",
///   "source": "sqlite:builddb.sqlite",
///   "candidates": 120345,
///   "max_results": 20,
///   "endpoints": ["..."]
/// }
/// ```
pub async fn api_info(State(state): State<Arc<ServerState>>) -> ServerResult<impl IntoResponse> {
    let metadata = ServerMetadata {
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: health::uptime_seconds(),
    };

    Ok(Json(json!({
        "name": "pathrank",
        "version": metadata.version,
        "uptime_seconds": metadata.uptime_seconds,
        "api_version": "v1",
        "source": state.store.source_name(),
        "candidates": state.store.len(),
        "max_results": state.rank_config.max_results,
        "endpoints": [
            "/?token=",
            "/complete?token=",
            "/api/v1/search?token=&limit=",
            "/api/v1/reload",
            "/api/v1/info",
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
    ServerError::NotFound
}
