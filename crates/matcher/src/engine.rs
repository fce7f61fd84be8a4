use std::sync::Arc;
use std::time::Instant;

use rayon::prelude::*;

use crate::metrics::metrics_recorder;
use crate::pattern::Pattern;
use crate::score::score_path;
use crate::types::{MatchError, PathMatch, RankConfig, ScoredCandidate};


/// Rank `candidates` against `query`.
///
/// Every candidate is scored independently; non-matches are dropped and the
/// rest are ordered best first and truncated to `cfg.max_results`. An empty
/// candidate list, or a query nothing matches, yields an empty result.
pub fn rank<S>(candidates: &[S], query: &str, cfg: &RankConfig) -> Result<Vec<PathMatch>, MatchError>
where
    S: AsRef<str> + Sync,
{
    cfg.validate()?;
    let query_len = query.chars().count();

    let start = Instant::now();
    let pattern = Pattern::new(query);

    let mut scored: Vec<ScoredCandidate<'_>> = if cfg.use_parallel {
        candidates
            .par_iter()
            .map(|candidate| score_path(candidate.as_ref(), &pattern))
            .filter(|scored| scored.is_match())
            .collect()
    } else {
        candidates
            .iter()
            .map(|candidate| score_path(candidate.as_ref(), &pattern))
            .filter(|scored| scored.is_match())
            .collect()
    };

    let matched = scored.len();
    select_top(&mut scored, cfg.max_results);
    let hits: Vec<PathMatch> = scored.into_iter().map(ScoredCandidate::into_match).collect();

    let latency = start.elapsed();
    tracing::debug!(
        query_len,
        candidates = candidates.len(),
        matched,
        hits = hits.len(),
        elapsed_us = latency.as_micros() as u64,
        "ranked candidates"
    );
    if let Some(recorder) = metrics_recorder() {
        recorder.record_rank(query_len, candidates.len(), latency, hits.len());
    }

    Ok(hits)
}

/// Keep the best `k` entries, sorted best first.
fn select_top(scored: &mut Vec<ScoredCandidate<'_>>, k: usize) {
    if scored.len() > k {
        scored.select_nth_unstable_by(k - 1, |a, b| a.rank_cmp(b));
        scored.truncate(k);
    }
    scored.sort_unstable_by(|a, b| a.rank_cmp(b));
}

/// Ranks queries against an immutable candidate snapshot.
///
/// The snapshot is shared, so cloning an engine or ranking from many threads
/// at once needs no synchronization.
#[derive(Debug, Clone)]
pub struct RankingEngine {
    candidates: Arc<[String]>,
    config: RankConfig,
}

impl RankingEngine {
    /// Build an engine over `candidates` with an explicit config.
    pub fn new(candidates: impl Into<Arc<[String]>>, config: RankConfig) -> Result<Self, MatchError> {
        config.validate()?;
        Ok(Self {
            candidates: candidates.into(),
            config,
        })
    }

    /// Build an engine with [`RankConfig::default`].
    pub fn with_defaults(candidates: impl Into<Arc<[String]>>) -> Self {
        Self {
            candidates: candidates.into(),
            config: RankConfig::default(),
        }
    }

    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    /// Shared handle to the candidate snapshot.
    pub fn snapshot(&self) -> Arc<[String]> {
        Arc::clone(&self.candidates)
    }

    pub fn config(&self) -> &RankConfig {
        &self.config
    }

    /// Run a single ranking call and return ordered hits.
    pub fn rank(&self, query: &str) -> Result<Vec<PathMatch>, MatchError> {
        rank(&self.candidates, query, &self.config)
    }

    /// Like [`rank`](Self::rank) but returns at most `limit` hits.
    ///
    /// `limit` can only lower the configured maximum; zero is rejected.
    pub fn rank_with_limit(&self, query: &str, limit: usize) -> Result<Vec<PathMatch>, MatchError> {
        if limit == 0 {
            return Err(MatchError::InvalidInput(
                "limit must be greater than zero".into(),
            ));
        }
        let cfg = RankConfig {
            max_results: limit.min(self.config.max_results),
            ..self.config.clone()
        };
        rank(&self.candidates, query, &cfg)
    }
}
