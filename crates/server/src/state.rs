use crate::config::ServerConfig;
use crate::error::ServerResult;
use matcher::RankConfig;
use metrics_exporter_prometheus::PrometheusHandle;
use source::CandidateStore;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Arc<ServerConfig>,

    /// Candidate snapshot holder (shared across requests)
    pub store: Arc<CandidateStore>,

    /// Ranking settings derived from `config`
    pub rank_config: RankConfig,

    /// Renders `/metrics`; absent when no recorder was installed
    pub metrics: Option<PrometheusHandle>,
}

impl ServerState {
    /// Create new server state and load candidates from the configured source.
    ///
    /// A failed initial load is logged and leaves the store unloaded; `/ready`
    /// reports 503 until a reload succeeds.
    pub fn new(config: ServerConfig) -> ServerResult<Self> {
        let store = CandidateStore::from_config(&config.source)?;
        if let Err(err) = store.load() {
            tracing::warn!(source = %config.source, error = %err, "initial candidate load failed");
        }
        Ok(Self::with_store(config, store))
    }

    /// Create state around an existing store (tests, embedding).
    pub fn with_store(config: ServerConfig, store: CandidateStore) -> Self {
        let rank_config = config.rank_config();
        Self {
            config: Arc::new(config),
            store: Arc::new(store),
            rank_config,
            metrics: None,
        }
    }

    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }
}

/// Server metadata for info endpoints
#[derive(Debug, serde::Serialize)]
pub struct ServerMetadata {
    pub version: String,
    pub uptime_seconds: u64,
}
