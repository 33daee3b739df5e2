use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::cmudict;
use crate::error::{LexiconError, Result};

/// One way of pronouncing a word: an ordered sequence of phoneme symbols.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Pronunciation(Vec<String>);

impl Pronunciation {
    pub fn new<I, S>(phonemes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(phonemes.into_iter().map(Into::into).collect())
    }

    /// Number of phonemes in this variant.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<String>> for Pronunciation {
    fn from(phonemes: Vec<String>) -> Self {
        Self(phonemes)
    }
}

impl fmt::Display for Pronunciation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(" "))
    }
}

/// Read-only access to a pronunciation lexicon.
///
/// `lookup` returns the variants exactly as the lexicon lists them, primary
/// pronunciation first. A word with no entry is `None`; a returned slice is
/// never empty. Keys are matched case-sensitively.
pub trait PronunciationSource: Send + Sync {
    fn lookup(&self, word: &str) -> Option<&[Pronunciation]>;
}

impl<S: PronunciationSource + ?Sized> PronunciationSource for &S {
    fn lookup(&self, word: &str) -> Option<&[Pronunciation]> {
        (**self).lookup(word)
    }
}

impl<S: PronunciationSource + ?Sized> PronunciationSource for Arc<S> {
    fn lookup(&self, word: &str) -> Option<&[Pronunciation]> {
        (**self).lookup(word)
    }
}

/// In-memory pronunciation lexicon, immutable once loaded.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    entries: HashMap<String, Vec<Pronunciation>>,
}

impl Lexicon {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a lexicon from `(word, variants)` pairs. Words without any
    /// variant are left out, so every entry keeps at least one.
    pub fn from_entries<I, W, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (W, V)>,
        W: Into<String>,
        V: IntoIterator<Item = Pronunciation>,
    {
        let mut lexicon = Self::new();
        for (word, variants) in entries {
            let variants: Vec<Pronunciation> = variants.into_iter().collect();
            if variants.is_empty() {
                continue;
            }
            lexicon.entries.insert(word.into(), variants);
        }
        lexicon
    }

    /// Appends `pronunciation` as the next variant of `word`.
    pub fn insert(&mut self, word: impl Into<String>, pronunciation: Pronunciation) {
        self.entries.entry(word.into()).or_default().push(pronunciation);
    }

    /// Parses CMU pronouncing dictionary text (see [`cmudict`] for the
    /// accepted layouts). Variants of a word are ordered by their variant
    /// number, base entry first.
    pub fn from_cmudict_str(text: &str) -> Result<Self> {
        let mut numbered: HashMap<String, Vec<(u32, Pronunciation)>> = HashMap::new();
        for (idx, line) in text.lines().enumerate() {
            let Some(entry) = cmudict::parse_line(line, idx + 1)? else {
                continue;
            };
            let variants = numbered.entry(entry.word).or_default();
            if variants.iter().any(|(n, _)| *n == entry.variant) {
                warn!(
                    line = idx + 1,
                    variant = entry.variant,
                    "skipping duplicate pronunciation variant"
                );
                continue;
            }
            variants.push((entry.variant, Pronunciation::from(entry.phonemes)));
        }

        let entries: HashMap<String, Vec<Pronunciation>> = numbered
            .into_iter()
            .map(|(word, mut variants)| {
                variants.sort_by_key(|(n, _)| *n);
                (word, variants.into_iter().map(|(_, p)| p).collect())
            })
            .collect();
        Self::finish(entries)
    }

    pub fn from_cmudict_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = read_source(path.as_ref())?;
        Self::from_cmudict_str(&text)
    }

    /// Reads a `{"word": [["K", "AE", "T"], ...]}` document, the shape of a
    /// dumped NLTK `cmudict.dict()`.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let raw: HashMap<String, Vec<Pronunciation>> = serde_json::from_str(text)?;
        let entries = raw
            .into_iter()
            .filter(|(word, variants)| {
                if variants.is_empty() {
                    debug!(word = %word, "dropping JSON entry without variants");
                }
                !variants.is_empty()
            })
            .collect();
        Self::finish(entries)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = read_source(path.as_ref())?;
        Self::from_json_str(&text)
    }

    fn finish(entries: HashMap<String, Vec<Pronunciation>>) -> Result<Self> {
        if entries.is_empty() {
            return Err(LexiconError::Empty);
        }
        let variants: usize = entries.values().map(Vec::len).sum();
        info!(words = entries.len(), variants, "loaded pronunciation lexicon");
        Ok(Self { entries })
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }
}

impl PronunciationSource for Lexicon {
    fn lookup(&self, word: &str) -> Option<&[Pronunciation]> {
        self.entries
            .get(word)
            .map(Vec::as_slice)
            .filter(|variants| !variants.is_empty())
    }
}

fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| LexiconError::Io {
        path: path.to_path_buf(),
        source,
    })
}
