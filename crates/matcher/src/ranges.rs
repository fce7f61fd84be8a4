//! Span merging and translation into full-path coordinates.

use crate::types::{HighlightRange, MatchSpan};

/// Collapse adjacent spans into inclusive ranges and shift them by `offset`.
///
/// Spans must arrive in ascending order, as produced by the matcher. A span
/// starting right after the previous range's end extends that range; any gap
/// starts a new one. Zero-width spans are skipped.
pub fn merge_spans(spans: &[MatchSpan], offset: usize) -> Vec<HighlightRange> {
    let mut ranges: Vec<HighlightRange> = Vec::with_capacity(spans.len());

    for span in spans.iter().filter(|s| !s.is_empty()) {
        let (start, end) = (span.start, span.end - 1);
        match ranges.last_mut() {
            Some(last) if last.end + 1 == start => last.end = end,
            _ => ranges.push(HighlightRange::new(start, end)),
        }
    }

    for range in &mut ranges {
        range.start += offset;
        range.end += offset;
    }
    ranges
}
