//! Workspace umbrella crate for pathrank.
//!
//! This crate stitches the candidate source and the ranking core together so
//! callers can go from a configuration to ranked, highlighted paths with a
//! single API entry point.
//!
//! ```
//! use pathrank::{rank_source, RankConfig, SourceConfig};
//!
//! let source = SourceConfig::in_memory(vec![
//!     "base/scoped_ptr.h".into(),
//!     "base/logging.h".into(),
//! ]);
//! let hits = rank_source(&source, "sptr", &RankConfig::default()).unwrap();
//! assert_eq!(hits[0].path, "base/scoped_ptr.h");
//! ```

pub mod config;

pub use config::{ConfigLoadError, MatcherYamlConfig, PathRankConfig};
pub use matcher::{
    rank, score_path, set_match_metrics, HighlightRange, MatchError, MatchMetrics, MatchSpan,
    PathMatch, Pattern, RankConfig, RankingEngine, ScoredCandidate,
};
pub use source::{
    CandidateSource, CandidateStore, Candidates, FileListSource, GitSource, InMemorySource,
    SourceConfig, SourceError,
};
#[cfg(feature = "backend-sqlite")]
pub use source::SqliteSource;

use std::error::Error;
use std::fmt;

/// Errors that can occur between loading candidates and ranking them.
#[derive(Debug)]
pub enum PipelineError {
    Source(SourceError),
    Match(MatchError),
    Config(ConfigLoadError),
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::Source(err) => write!(f, "candidate source failure: {err}"),
            PipelineError::Match(err) => write!(f, "ranking failure: {err}"),
            PipelineError::Config(err) => write!(f, "configuration failure: {err}"),
        }
    }
}

impl Error for PipelineError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            PipelineError::Source(err) => Some(err),
            PipelineError::Match(err) => Some(err),
            PipelineError::Config(err) => Some(err),
        }
    }
}

impl From<SourceError> for PipelineError {
    fn from(value: SourceError) -> Self {
        PipelineError::Source(value)
    }
}

impl From<MatchError> for PipelineError {
    fn from(value: MatchError) -> Self {
        PipelineError::Match(value)
    }
}

impl From<ConfigLoadError> for PipelineError {
    fn from(value: ConfigLoadError) -> Self {
        PipelineError::Config(value)
    }
}

/// Load every candidate from `source` into a fresh snapshot.
pub fn load_candidates(source: &SourceConfig) -> Result<Candidates, PipelineError> {
    let store = CandidateStore::from_config(source)?;
    store.load()?;
    Ok(store.snapshot()?)
}

/// Build a ranking engine over the source named in `config`.
pub fn load_engine(config: &PathRankConfig) -> Result<RankingEngine, PipelineError> {
    let candidates = load_candidates(&config.source)?;
    Ok(RankingEngine::new(candidates, config.rank_config())?)
}

/// Load candidates from `source` and rank them against `query` in one call.
pub fn rank_source(
    source: &SourceConfig,
    query: &str,
    cfg: &RankConfig,
) -> Result<Vec<PathMatch>, PipelineError> {
    let candidates = load_candidates(source)?;
    Ok(rank(&candidates[..], query, cfg)?)
}
