//! Query → subsequence pattern.
//!
//! A [`Pattern`] is one literal, case-insensitive constraint per query
//! character, joined by lazy unbounded gaps. Characters are never
//! interpreted as pattern syntax: `.` only matches `.`, `*` only matches `*`.

use crate::matching::match_basename;
use crate::types::MatchSpan;

/// A single literal constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Atom {
    literal: char,
    folded: char,
}

impl Atom {
    pub fn new(literal: char) -> Self {
        Self {
            literal,
            folded: fold(literal),
        }
    }

    /// The query character as typed.
    pub fn literal(&self) -> char {
        self.literal
    }

    #[inline]
    pub fn matches(&self, c: char) -> bool {
        fold(c) == self.folded
    }
}

/// Compiled form of a query.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Pattern {
    atoms: Vec<Atom>,
}

impl Pattern {
    pub fn new(query: &str) -> Self {
        Self {
            atoms: query.chars().map(Atom::new).collect(),
        }
    }

    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    /// Locate the pattern in `basename`, one span per atom.
    pub fn find(&self, basename: &str) -> Option<Vec<MatchSpan>> {
        match_basename(basename, self)
    }
}

impl From<&str> for Pattern {
    fn from(query: &str) -> Self {
        Pattern::new(query)
    }
}

// ASCII-only folding; other characters compare exactly.
#[inline]
fn fold(c: char) -> char {
    c.to_ascii_lowercase()
}
