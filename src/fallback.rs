use std::collections::HashMap;

use crate::data::FALLBACK_EXCEPTIONS;

/// Phoneme counts for words the lexicon does not cover.
///
/// Only consulted after a lexicon miss. `None` means the word is unknown
/// here too and the resolver skips it.
pub trait Fallback: Send + Sync {
    fn phoneme_count(&self, word: &str) -> Option<usize>;
}

/// A fixed word-to-count table, matched exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackTable {
    counts: HashMap<String, usize>,
}

impl FallbackTable {
    /// The hand-maintained exceptions for the reference vocabulary.
    pub fn builtin() -> Self {
        Self::from_iter(FALLBACK_EXCEPTIONS.iter().copied())
    }

    pub fn empty() -> Self {
        Self {
            counts: HashMap::new(),
        }
    }

    /// Adds or replaces entries, returning the merged table.
    pub fn with_overrides<I, W>(mut self, overrides: I) -> Self
    where
        I: IntoIterator<Item = (W, usize)>,
        W: Into<String>,
    {
        self.counts
            .extend(overrides.into_iter().map(|(w, n)| (w.into(), n)));
        self
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

impl Default for FallbackTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<W: Into<String>> FromIterator<(W, usize)> for FallbackTable {
    fn from_iter<I: IntoIterator<Item = (W, usize)>>(iter: I) -> Self {
        Self::empty().with_overrides(iter)
    }
}

impl Fallback for FallbackTable {
    fn phoneme_count(&self, word: &str) -> Option<usize> {
        self.counts.get(word).copied()
    }
}
