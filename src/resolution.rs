use serde::Serialize;

use crate::lexicon::Pronunciation;

/// Where a word's phoneme count came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum Outcome {
    /// Primary lexicon variant.
    Lexicon { phonemes: Pronunciation },
    /// Fixed count from the fallback table.
    Fallback { count: usize },
    /// Neither the lexicon nor the fallback table knows the word.
    Unresolved,
}

impl Outcome {
    pub fn count(&self) -> Option<usize> {
        match self {
            Outcome::Lexicon { phonemes } => Some(phonemes.len()),
            Outcome::Fallback { count } => Some(*count),
            Outcome::Unresolved => None,
        }
    }
}

/// The result for one input word, kept at the word's input position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    /// The word as the caller supplied it, before normalization.
    pub word: String,
    #[serde(flatten)]
    pub outcome: Outcome,
}

impl Resolution {
    pub fn count(&self) -> Option<usize> {
        self.outcome.count()
    }

    pub fn is_resolved(&self) -> bool {
        !matches!(self.outcome, Outcome::Unresolved)
    }
}
