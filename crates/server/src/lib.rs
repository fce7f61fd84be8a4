//! pathrank server - HTTP autocomplete over a codebase's file list
//!
//! This crate wraps the [`matcher`] ranking core and a [`source`] candidate
//! snapshot in an axum service. It supports:
//!
//! - **Legacy autocomplete**: the `[["filenames", {...}]]` wire format that
//!   existing browser widgets consume
//! - **Structured search**: ranked JSON results with scores
//! - **Snapshot reload**: re-read the candidate source without a restart
//! - **Health & Metrics**: liveness/readiness probes and Prometheus metrics
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use server::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::load()?;
//!     server::start_server(config).await?;
//!     Ok(())
//! }
//! ```
//!
//! # API Endpoints
//!
//! - `GET /?token=<q>` / `GET /complete?token=<q>` - legacy autocomplete
//! - `GET /api/v1/search?token=<q>&limit=<n>` - structured search
//! - `POST /api/v1/reload` - reload candidates from the configured source
//! - `GET /api/v1/info` - server information
//! - `GET /health` - liveness probe
//! - `GET /ready` - readiness probe (503 until candidates are loaded)
//! - `GET /metrics` - Prometheus metrics

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;
pub mod telemetry;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use server::{build_router, start_server};
pub use state::ServerState;
