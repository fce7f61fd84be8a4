//! Locating a [`Pattern`] inside a candidate's basename.

use crate::pattern::Pattern;
use crate::types::MatchSpan;

/// Split `path` into its directory prefix length (in chars, trailing `/`
/// included) and its basename.
///
/// A path without `/` is all basename with a prefix length of 0.
pub fn split_path(path: &str) -> (usize, &str) {
    match path.rfind('/') {
        Some(idx) => (path[..=idx].chars().count(), &path[idx + 1..]),
        None => (0, path),
    }
}

/// Match `pattern` against `basename`, scanning forward from position 0.
///
/// Each atom takes the leftmost position after the previous atom's match.
/// Taking the earliest position never removes a choice for the atoms that
/// follow, so this selects the same positions as a backtracking search with
/// shortest-first gaps, without the backtracking.
pub fn match_basename(basename: &str, pattern: &Pattern) -> Option<Vec<MatchSpan>> {
    let mut spans = Vec::with_capacity(pattern.len());
    let mut atoms = pattern.atoms().iter();
    let Some(mut wanted) = atoms.next() else {
        return Some(spans);
    };

    for (pos, c) in basename.chars().enumerate() {
        if !wanted.matches(c) {
            continue;
        }
        spans.push(MatchSpan::single(pos));
        match atoms.next() {
            Some(next) => wanted = next,
            None => return Some(spans),
        }
    }

    None
}

/// Match `pattern` against the basename of `path`.
///
/// Returns the directory prefix length along with the spans so callers can
/// translate them into full-path coordinates.
pub fn match_path(path: &str, pattern: &Pattern) -> Option<(usize, Vec<MatchSpan>)> {
    let (offset, basename) = split_path(path);
    match_basename(basename, pattern).map(|spans| (offset, spans))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn starts(basename: &str, query: &str) -> Option<Vec<usize>> {
        match_basename(basename, &Pattern::new(query))
            .map(|spans| spans.into_iter().map(|s| s.start).collect())
    }

    #[test]
    fn split_path_variants() {
        assert_eq!(split_path("foo/bar.cc"), (4, "bar.cc"));
        assert_eq!(split_path("a/b/File.txt"), (4, "File.txt"));
        assert_eq!(split_path("x.cc"), (0, "x.cc"));
        assert_eq!(split_path(""), (0, ""));
        assert_eq!(split_path("dir/"), (4, ""));
        assert_eq!(split_path("/root"), (1, "root"));
    }

    #[test]
    fn split_path_counts_chars_not_bytes() {
        assert_eq!(split_path("dé/x"), (3, "x"));
    }

    #[test]
    fn scoped_ptr_spans() {
        assert_eq!(starts("scoped_ptr.h", "sptr"), Some(vec![0, 3, 8, 9]));
    }

    #[test]
    fn lazy_gap_takes_earliest_occurrence() {
        assert_eq!(starts("file.sp.mm", "sp"), Some(vec![5, 6]));
        assert_eq!(starts("file.sp.mm", ".m"), Some(vec![4, 8]));
        assert_eq!(starts("foo.mm", ".m"), Some(vec![3, 4]));
    }

    #[test]
    fn first_char_may_match_after_start() {
        assert_eq!(starts("bar.cc", "ar"), Some(vec![1, 2]));
    }

    #[test]
    fn case_insensitive() {
        assert_eq!(starts("Bar.cc", "b"), Some(vec![0]));
        assert_eq!(starts("bar.cc", "BC"), Some(vec![0, 4]));
    }

    #[test]
    fn out_of_order_does_not_match() {
        assert_eq!(starts("bar.cc", "rb"), None);
        assert_eq!(starts("bar.cc", "bb"), None);
        assert_eq!(starts("", "a"), None);
    }

    #[test]
    fn each_char_consumes_one_position() {
        assert_eq!(starts("aa", "aa"), Some(vec![0, 1]));
        assert_eq!(starts("a", "aa"), None);
    }

    #[test]
    fn metacharacters_match_literally() {
        assert_eq!(starts("a.b", "."), Some(vec![1]));
        assert_eq!(starts("abc", "."), None);
        assert_eq!(starts("abc", "a*"), None);
        assert_eq!(starts("a*c", "a*"), Some(vec![0, 1]));
    }

    #[test]
    fn directory_prefix_is_not_searched() {
        let pattern = Pattern::new("foo");
        assert!(match_path("foo/bar.cc", &pattern).is_none());
        let (offset, spans) = match_path("foo/bar.cc", &Pattern::new("bar")).unwrap();
        assert_eq!(offset, 4);
        assert_eq!(spans.len(), 3);
    }

    #[test]
    fn empty_pattern_matches_without_spans() {
        assert_eq!(starts("anything", ""), Some(vec![]));
        assert_eq!(starts("", ""), Some(vec![]));
    }

    #[test]
    fn spans_use_char_positions() {
        assert_eq!(starts("héllo", "l"), Some(vec![2]));
    }
}
