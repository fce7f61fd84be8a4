//! Relevance scoring for matched candidates.

use crate::matching::match_path;
use crate::pattern::Pattern;
use crate::ranges::merge_spans;
use crate::types::{HighlightRange, ScoredCandidate};

/// Awarded for matching at all.
pub const BASE_SCORE: f64 = 5.0;
/// Awarded per range that starts at a word boundary.
pub const WORD_BOUNDARY_BONUS: f64 = 10.0;
/// Awarded per character a merged range extends beyond its first.
pub const RUN_BONUS: f64 = 11.0;

/// Whether `index` starts a word in `chars`.
///
/// A word starts after `_` or `/`, or at an uppercase character. Index 0 has
/// no preceding character, so only the uppercase test can apply there.
pub fn is_word_boundary(chars: &[char], index: usize) -> bool {
    let after_separator = index
        .checked_sub(1)
        .and_then(|prev| chars.get(prev))
        .is_some_and(|c| matches!(c, '_' | '/'));
    after_separator || chars.get(index).is_some_and(|c| c.is_uppercase())
}

/// Score merged, full-path `ranges` for `path`.
///
/// Empty ranges mean no match and score 0.
pub fn score_ranges(path: &str, ranges: &[HighlightRange]) -> f64 {
    if ranges.is_empty() {
        return 0.0;
    }

    let chars: Vec<char> = path.chars().collect();
    let mut score = BASE_SCORE;
    for range in ranges {
        if is_word_boundary(&chars, range.start) {
            score += WORD_BOUNDARY_BONUS;
        }
        score += RUN_BONUS * (range.end - range.start) as f64;
    }

    // Shorter paths win ties, e.g. `foo.cc` over `foo_test.cc`.
    score + 1.0 / chars.len() as f64
}

/// Run the full match → merge → score chain for one candidate.
pub fn score_path<'a>(path: &'a str, pattern: &Pattern) -> ScoredCandidate<'a> {
    if pattern.is_empty() {
        return ScoredCandidate {
            path,
            score: BASE_SCORE,
            ranges: Vec::new(),
        };
    }

    let Some((offset, spans)) = match_path(path, pattern) else {
        return ScoredCandidate::no_match(path);
    };
    let ranges = merge_spans(&spans, offset);
    let score = score_ranges(path, &ranges);
    ScoredCandidate {
        path,
        score,
        ranges,
    }
}
