//! Logging and metrics bootstrap.

use crate::config::ServerConfig;
use matcher::MatchMetrics;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::sync::Arc;
use std::time::Duration;

/// Forwards ranking observations to the `metrics` facade.
#[derive(Debug, Default)]
pub struct PrometheusMatchMetrics;

impl MatchMetrics for PrometheusMatchMetrics {
    fn record_rank(&self, query_len: usize, candidates: usize, latency: Duration, hit_count: usize) {
        metrics::counter!("pathrank_rank_requests_total").increment(1);
        metrics::histogram!("pathrank_rank_latency_seconds").record(latency.as_secs_f64());
        metrics::histogram!("pathrank_rank_hits").record(hit_count as f64);
        metrics::histogram!("pathrank_query_length").record(query_len as f64);
        metrics::gauge!("pathrank_candidates").set(candidates as f64);
    }
}

/// Install the Prometheus recorder and route matcher metrics through it.
///
/// Returns `None` if a global recorder is already installed (e.g. a second
/// server in the same process); the server then runs without `/metrics`.
pub fn install_metrics() -> Option<PrometheusHandle> {
    match PrometheusBuilder::new().install_recorder() {
        Ok(handle) => {
            matcher::set_match_metrics(Some(Arc::new(PrometheusMatchMetrics)));
            Some(handle)
        }
        Err(err) => {
            tracing::warn!(error = %err, "prometheus recorder not installed");
            None
        }
    }
}

/// Initialize the global tracing subscriber from the server config.
pub fn init_tracing(config: &ServerConfig) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(&config.log_level)
        .with_target(false)
        .with_thread_ids(true)
        .with_thread_names(true);

    if config.log_format == "pretty" {
        builder.pretty().init();
    } else {
        builder.json().init();
    }
}
