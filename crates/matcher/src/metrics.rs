//! Process-wide observer for ranking calls.
//!
//! The slot is empty until a host (the HTTP server, a bench harness) installs
//! a recorder with [`set_match_metrics`]. [`rank`](crate::rank) reports query
//! length, snapshot size, wall time and hit count to whatever is installed.
use std::sync::{Arc, RwLock};
use std::time::Duration;

use once_cell::sync::Lazy;

type Slot = RwLock<Option<Arc<dyn MatchMetrics>>>;

static RECORDER: Lazy<Slot> = Lazy::new(|| RwLock::new(None));

/// Receives one report per [`rank`](crate::rank) call.
pub trait MatchMetrics: Send + Sync {
    /// Record the outcome of one ranking call.
    ///
    /// `query_len` is the query length in characters, `candidates` the size of
    /// the scanned snapshot, `latency` the wall-clock time of the call and
    /// `hit_count` the number of results returned after truncation.
    fn record_rank(&self, query_len: usize, candidates: usize, latency: Duration, hit_count: usize);
}

// A panicking recorder must not disable reporting for everyone else.
pub(crate) fn metrics_recorder() -> Option<Arc<dyn MatchMetrics>> {
    RECORDER
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .clone()
}

/// Replace the installed recorder; `None` turns reporting off.
pub fn set_match_metrics(recorder: Option<Arc<dyn MatchMetrics>>) {
    *RECORDER
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner()) = recorder;
}
