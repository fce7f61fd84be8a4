//! Server initialization and routing
//!
//! This module handles the Axum server setup including:
//! - Router configuration with all API endpoints
//! - Middleware stack (request ids, logging, compression, CORS, timeouts)
//! - Graceful shutdown handling

use crate::config::ServerConfig;
use crate::middleware::{log_requests, request_id};
use crate::routes::{api_info, complete, health, not_found};
use crate::state::ServerState;
use crate::telemetry::{init_tracing, install_metrics};
use axum::http::StatusCode;
use axum::middleware::from_fn;
use axum::routing::{get, post};
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

/// Build the Axum router with all routes and middleware
///
/// Middleware stack (outermost first):
/// 1. Tracing spans
/// 2. Request ID tracking
/// 3. Request logging
/// 4. CORS
/// 5. Compression
/// 6. Timeout handling
pub fn build_router(state: Arc<ServerState>) -> Router {
    let cors = if state.config.enable_cors {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        CorsLayer::new()
    };

    let completion_routes = Router::new()
        .route("/", get(complete::legacy_complete))
        .route("/complete", get(complete::legacy_complete))
        .route("/api/v1/search", get(complete::search))
        .route("/api/v1/reload", post(complete::reload))
        .route("/api/v1/info", get(api_info));

    let ops_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        .route("/metrics", get(health::metrics));

    Router::new()
        .merge(completion_routes)
        .merge(ops_routes)
        .fallback(not_found)
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            state.config.timeout(),
        ))
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(from_fn(log_requests))
        .layer(from_fn(request_id))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the pathrank HTTP server
///
/// Initializes logging and metrics, loads the candidate snapshot and serves
/// until SIGTERM or Ctrl+C.
///
/// # Example
///
/// ```rust,no_run
/// use server::ServerConfig;
///
/// #[tokio::main]
/// async fn main() -> anyhow::Result<()> {
///     let config = ServerConfig::load()?;
///     server::start_server(config).await?;
///     Ok(())
/// }
/// ```
///
/// # Initialization
///
/// 1. Sets up structured logging with the configured level and format
/// 2. Installs the Prometheus recorder
/// 3. Loads candidates from the configured source (in the blocking pool)
/// 4. Builds the Axum router and binds the TCP listener
/// 5. Serves with graceful shutdown support
pub async fn start_server(config: ServerConfig) -> anyhow::Result<()> {
    init_tracing(&config);
    let metrics = install_metrics();

    let addr: SocketAddr = config.socket_addr()?;
    let boot_config = config.clone();
    let mut state = tokio::task::spawn_blocking(move || ServerState::new(boot_config)).await??;
    if let Some(handle) = metrics {
        state = state.with_metrics(handle);
    }

    tracing::info!(
        %addr,
        source = %config.source,
        candidates = state.store.len(),
        max_results = config.max_results,
        use_parallel = config.use_parallel,
        timeout_secs = config.timeout_secs,
        cors = config.enable_cors,
        "starting pathrank server"
    );

    let app = build_router(Arc::new(state));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Shutdown signal handler
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down..."),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down..."),
    }
}
