use serde::{Deserialize, Serialize};
use thiserror::Error;

use std::cmp::Ordering;

/// Half-open `[start, end)` region of a basename matched by one query character.
///
/// Positions are counted in `char`s from the start of the basename.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchSpan {
    pub start: usize,
    pub end: usize,
}

impl MatchSpan {
    /// Span covering the single character at `pos`.
    pub fn single(pos: usize) -> Self {
        Self {
            start: pos,
            end: pos + 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}

/// Inclusive `[start, end]` region of a full path, used for UI highlighting.
///
/// Serialized as a two-element array so both wire formats carry
/// `[[start, end], ...]` unchanged. The derived ordering compares `start`
/// first and `end` second, which is the pairwise order the ranking tiebreak
/// relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "[usize; 2]", into = "[usize; 2]")]
pub struct HighlightRange {
    pub start: usize,
    pub end: usize,
}

impl HighlightRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Number of characters covered by the range.
    pub fn width(&self) -> usize {
        self.end - self.start + 1
    }
}

impl From<[usize; 2]> for HighlightRange {
    fn from([start, end]: [usize; 2]) -> Self {
        Self { start, end }
    }
}

impl From<HighlightRange> for [usize; 2] {
    fn from(range: HighlightRange) -> Self {
        [range.start, range.end]
    }
}

/// Outcome of scoring a single candidate.
///
/// `ranges` is empty iff `score == 0.0`, except for the empty query, which
/// matches everything with the base score and no ranges.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCandidate<'a> {
    pub path: &'a str,
    pub score: f64,
    pub ranges: Vec<HighlightRange>,
}

impl<'a> ScoredCandidate<'a> {
    pub fn no_match(path: &'a str) -> Self {
        Self {
            path,
            score: 0.0,
            ranges: Vec::new(),
        }
    }

    pub fn is_match(&self) -> bool {
        self.score > 0.0
    }

    /// Ranking order: best first.
    ///
    /// Descending by score, then by the range list compared lexicographically
    /// (descending), then by path (descending). The order is total, so the
    /// ranked output is fully deterministic.
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        other
            .score
            .total_cmp(&self.score)
            .then_with(|| other.ranges.cmp(&self.ranges))
            .then_with(|| other.path.cmp(self.path))
    }

    pub fn into_match(self) -> PathMatch {
        PathMatch {
            path: self.path.to_string(),
            score: self.score,
            ranges: self.ranges,
        }
    }
}

/// A ranked path returned to callers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PathMatch {
    pub path: String,
    pub score: f64,
    /// Inclusive, 0-indexed `[start, end]` pairs into `path`.
    pub ranges: Vec<HighlightRange>,
}

/// Tuning knobs for a ranking call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RankConfig {
    /// Maximum number of results returned.
    #[serde(default = "RankConfig::default_max_results")]
    pub max_results: usize,
    /// Score candidates on the rayon pool instead of the calling thread.
    #[serde(default)]
    pub use_parallel: bool,
}

impl RankConfig {
    pub const DEFAULT_MAX_RESULTS: usize = 20;

    pub(crate) fn default_max_results() -> usize {
        Self::DEFAULT_MAX_RESULTS
    }

    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    pub fn with_parallel(mut self, use_parallel: bool) -> Self {
        self.use_parallel = use_parallel;
        self
    }

    pub fn validate(&self) -> Result<(), MatchError> {
        if self.max_results == 0 {
            return Err(MatchError::InvalidConfig(
                "max_results must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            max_results: Self::DEFAULT_MAX_RESULTS,
            use_parallel: false,
        }
    }
}

/// Errors produced by the matching layer.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MatchError {
    /// Invalid ranking configuration.
    #[error("invalid match config: {0}")]
    InvalidConfig(String),
    /// The call's arguments cannot be served, e.g. a zero result limit.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}
