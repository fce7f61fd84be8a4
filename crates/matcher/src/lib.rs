//! # Path Matcher (`matcher`)
//!
//! ## Purpose
//!
//! `matcher` ranks a fixed list of file paths against a short typed query and
//! reports, for each hit, the character ranges that explain the match so a UI
//! can highlight them. It is the engine behind "type to filter paths"
//! completion over a codebase's file list.
//!
//! The pipeline for each candidate is:
//!
//! 1. [`Pattern`]: one literal, case-insensitive constraint per query
//!    character, joined by shortest-first gaps.
//! 2. [`match_basename`]: locate the pattern in the candidate's basename,
//!    producing one [`MatchSpan`] per query character.
//! 3. [`merge_spans`]: collapse adjacent spans into inclusive
//!    [`HighlightRange`]s in full-path coordinates.
//! 4. [`score_ranges`]: base score, word-boundary and run bonuses, plus a
//!    short-path tiebreak.
//! 5. [`rank`] / [`RankingEngine`]: score every candidate, drop non-matches,
//!    order best first and keep the top [`RankConfig::max_results`].
//!
//! ## Example Usage
//!
//! ```
//! use matcher::{rank, HighlightRange, RankConfig};
//!
//! let candidates = ["base/scoped_ptr.h", "base/logging.h"];
//! let hits = rank(&candidates, "sptr", &RankConfig::default()).unwrap();
//!
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits[0].path, "base/scoped_ptr.h");
//! assert_eq!(
//!     hits[0].ranges,
//!     vec![
//!         HighlightRange::new(5, 5),
//!         HighlightRange::new(8, 8),
//!         HighlightRange::new(13, 14),
//!     ]
//! );
//! ```
//!
//! ## Observability
//!
//! Install a [`MatchMetrics`] implementation via [`set_match_metrics`] to
//! record per-call latency and hit counts. Each call also emits a `tracing`
//! debug event.

pub mod engine;
pub mod matching;
pub mod metrics;
pub mod pattern;
pub mod ranges;
pub mod score;
pub mod types;

pub use crate::engine::{rank, RankingEngine};
pub use crate::matching::{match_basename, match_path, split_path};
pub use crate::metrics::{set_match_metrics, MatchMetrics};
pub use crate::pattern::{Atom, Pattern};
pub use crate::ranges::merge_spans;
pub use crate::score::{
    is_word_boundary, score_path, score_ranges, BASE_SCORE, RUN_BONUS, WORD_BOUNDARY_BONUS,
};
pub use crate::types::{
    HighlightRange, MatchError, MatchSpan, PathMatch, RankConfig, ScoredCandidate,
};
