use std::iter;

use tracing::debug;

use crate::config::ResolverConfig;
use crate::fallback::{Fallback, FallbackTable};
use crate::lexicon::{Pronunciation, PronunciationSource};
use crate::normalize::{normalize_word, Normalization};
use crate::resolution::{Outcome, Resolution};

/// Maps words to the phoneme count of their primary pronunciation.
///
/// A lexicon hit always uses the first listed variant. A miss falls back to
/// the exception table, and a word neither knows is skipped. The resolver
/// keeps no state between calls, so one instance (or one lexicon behind an
/// `Arc`) can serve any number of threads.
pub struct Resolver<L, F = FallbackTable> {
    lexicon: L,
    fallback: F,
    normalization: Normalization,
}

impl<L: PronunciationSource> Resolver<L> {
    pub fn new(lexicon: L) -> Self {
        Self::with_config(lexicon, ResolverConfig::default())
    }

    pub fn with_config(lexicon: L, config: ResolverConfig) -> Self {
        Self {
            fallback: config.fallback_table(),
            normalization: config.normalization,
            lexicon,
        }
    }
}

impl<L: PronunciationSource, F: Fallback> Resolver<L, F> {
    pub fn with_fallback(lexicon: L, fallback: F) -> Self {
        Self {
            lexicon,
            fallback,
            normalization: Normalization::default(),
        }
    }

    pub fn normalization(mut self, normalization: Normalization) -> Self {
        self.normalization = normalization;
        self
    }

    /// Phoneme counts for `words`, in order.
    ///
    /// Words found in neither the lexicon nor the fallback table are dropped,
    /// so the result can be shorter than the input. Use
    /// [`resolve_aligned`](Self::resolve_aligned) to keep positions.
    pub fn resolve<S: AsRef<str>>(&self, words: &[S]) -> Vec<usize> {
        words
            .iter()
            .filter_map(|word| self.phoneme_count(word.as_ref()))
            .collect()
    }

    /// One [`Resolution`] per input word, at the word's input index.
    pub fn resolve_aligned<S: AsRef<str>>(&self, words: &[S]) -> Vec<Resolution> {
        words
            .iter()
            .map(|word| self.resolve_word(word.as_ref()))
            .collect()
    }

    pub fn resolve_word(&self, word: &str) -> Resolution {
        let outcome = match self.find(word) {
            Some(Hit::Lexicon(phonemes)) => Outcome::Lexicon {
                phonemes: phonemes.clone(),
            },
            Some(Hit::Fallback(count)) => Outcome::Fallback { count },
            None => Outcome::Unresolved,
        };
        Resolution {
            word: word.to_string(),
            outcome,
        }
    }

    pub fn phoneme_count(&self, word: &str) -> Option<usize> {
        self.find(word).map(|hit| match hit {
            Hit::Lexicon(phonemes) => phonemes.len(),
            Hit::Fallback(count) => count,
        })
    }

    /// The chosen lexicon variant of each word the lexicon knows, in input
    /// order. Fallback and unknown words contribute nothing.
    pub fn primary_pronunciations<S: AsRef<str>>(&self, words: &[S]) -> Vec<&Pronunciation> {
        words
            .iter()
            .filter_map(|word| {
                let word = word.as_ref();
                let folded = normalize_word(word, self.normalization);
                self.primary(lookup_keys(word, &folded))
            })
            .collect()
    }

    fn find(&self, word: &str) -> Option<Hit<'_>> {
        let folded = normalize_word(word, self.normalization);
        let mut keys = lookup_keys(word, &folded);

        if let Some(phonemes) = self.primary(keys.clone()) {
            return Some(Hit::Lexicon(phonemes));
        }
        let count = keys.find_map(|key| self.fallback.phoneme_count(key));
        match count {
            Some(count) => debug!(word, count, "resolved from fallback table"),
            None => debug!(word, "word not in lexicon or fallback table"),
        }
        count.map(Hit::Fallback)
    }

    fn primary<'k>(&self, mut keys: impl Iterator<Item = &'k str>) -> Option<&Pronunciation> {
        keys.find_map(|key| self.lexicon.lookup(key))
            .and_then(<[Pronunciation]>::first)
    }
}

enum Hit<'a> {
    Lexicon(&'a Pronunciation),
    Fallback(usize),
}

/// The verbatim word, then its normalized form if that differs. Lexicon
/// entries keyed by the verbatim spelling always win.
fn lookup_keys<'a>(word: &'a str, folded: &'a str) -> impl Iterator<Item = &'a str> + Clone {
    let alternate = (folded != word).then_some(folded);
    iter::once(word).chain(alternate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{CONTRACTIONS_INTACT, CONTRACTIONS_SPLIT};
    use crate::lexicon::Lexicon;
    use std::sync::Arc;
    use std::thread;

    fn pron(phonemes: &[&str]) -> Pronunciation {
        Pronunciation::new(phonemes.iter().copied())
    }

    fn pets() -> Lexicon {
        Lexicon::from_entries([
            ("cat", vec![pron(&["K", "AE", "T"])]),
            ("dog", vec![pron(&["D", "AO", "G"])]),
            // shorter second variant must never win
            ("the", vec![pron(&["DH", "AH0"]), pron(&["DH", "IY0"])]),
            ("either", vec![pron(&["IY1", "DH", "ER0"]), pron(&["AY"])]),
        ])
    }

    #[test]
    fn test_lexicon_words() {
        let resolver = Resolver::new(pets());
        assert_eq!(resolver.resolve(&["cat", "dog"]), vec![3, 3]);
    }

    #[test]
    fn test_fallback_word_between_hits() {
        let resolver = Resolver::new(pets());
        assert_eq!(resolver.resolve(&["cat", "nt", "dog"]), vec![3, 1, 3]);
    }

    #[test]
    fn test_unknown_word_is_dropped() {
        let resolver = Resolver::new(pets());
        assert_eq!(resolver.resolve(&["cat", "zzzqx", "dog"]), vec![3, 3]);
        assert!(resolver.resolve(&["zzzqx"]).is_empty());
    }

    #[test]
    fn test_empty_input() {
        let resolver = Resolver::new(pets());
        let words: [&str; 0] = [];
        assert!(resolver.resolve(&words).is_empty());
        assert!(resolver.resolve_aligned(&words).is_empty());
    }

    #[test]
    fn test_first_variant_always_wins() {
        let resolver = Resolver::new(pets());
        assert_eq!(resolver.phoneme_count("the"), Some(2));
        assert_eq!(resolver.phoneme_count("either"), Some(3));
    }

    #[test]
    fn test_builtin_fallback_counts() {
        let resolver = Resolver::new(pets());
        assert_eq!(resolver.resolve(&["nt"]), vec![1]);
        assert_eq!(resolver.resolve(&["nonone"]), vec![5]);
        assert_eq!(resolver.resolve(&["nineth"]), vec![4]);
        assert_eq!(resolver.resolve(&["won't"]), vec![3]);
    }

    #[test]
    fn test_lexicon_takes_precedence_over_fallback() {
        let lexicon = Lexicon::from_entries([("won't", vec![pron(&["W", "OW1", "N", "T"])])]);
        let resolver = Resolver::new(lexicon);
        assert_eq!(resolver.phoneme_count("won't"), Some(4));
    }

    #[test]
    fn test_aligned_output_keeps_positions() {
        let resolver = Resolver::new(pets());
        let resolved = resolver.resolve_aligned(&["cat", "zzzqx", "nonone", "dog"]);
        assert_eq!(resolved.len(), 4);
        assert_eq!(
            resolved.iter().map(Resolution::count).collect::<Vec<_>>(),
            vec![Some(3), None, Some(5), Some(3)]
        );
        assert_eq!(resolved[1].word, "zzzqx");
        assert_eq!(resolved[1].outcome, Outcome::Unresolved);
        assert_eq!(resolved[2].outcome, Outcome::Fallback { count: 5 });
        assert_eq!(
            resolved[0].outcome,
            Outcome::Lexicon {
                phonemes: pron(&["K", "AE", "T"])
            }
        );
    }

    #[test]
    fn test_resolve_matches_aligned_counts() {
        let resolver = Resolver::new(pets());
        let words = ["dog", "nt", "zzzqx", "the", "won't", "qq", "either"];
        let from_aligned: Vec<usize> = resolver
            .resolve_aligned(&words)
            .iter()
            .filter_map(Resolution::count)
            .collect();
        assert_eq!(resolver.resolve(&words), from_aligned);
    }

    #[test]
    fn test_repeated_calls_agree() {
        let resolver = Resolver::new(pets());
        let words = vec!["cat".to_string(), "nt".to_string(), "zzzqx".to_string()];
        assert_eq!(resolver.resolve(&words), resolver.resolve(&words));
    }

    #[test]
    fn test_curly_apostrophe_needs_normalization() {
        let exact = Resolver::new(pets());
        assert!(exact.resolve(&["won’t"]).is_empty());

        let folding = Resolver::new(pets()).normalization(Normalization::Apostrophes);
        assert_eq!(folding.resolve(&["won’t"]), vec![3]);
        // the caller's spelling is preserved in the aligned output
        assert_eq!(folding.resolve_word("won’t").word, "won’t");
    }

    #[test]
    fn test_lexicon_keys_with_typographic_apostrophes() {
        let lexicon = Lexicon::from_entries([
            ("won’t", vec![pron(&["W", "OW1", "N", "T"])]),
            ("rock`n", vec![pron(&["R", "AA1", "K", "N"])]),
        ]);
        let resolver = Resolver::new(&lexicon);
        assert_eq!(resolver.resolve(&["won’t", "rock`n"]), vec![4, 4]);

        // the verbatim key is tried before the folded one
        let folding = Resolver::new(&lexicon).normalization(Normalization::Apostrophes);
        assert_eq!(folding.resolve(&["won’t", "rock`n"]), vec![4, 4]);
        assert_eq!(folding.resolve(&["won't"]), vec![3]);
    }

    #[test]
    fn test_default_resolver_matches_exactly() {
        let lexicon = Lexicon::from_entries([("cat", vec![pron(&["K", "AE", "T"])])]);
        let resolver = Resolver::new(lexicon);
        assert!(resolver.resolve(&["won’t"]).is_empty());
        assert_eq!(
            resolver.resolve_word("won’t").outcome,
            Outcome::Unresolved
        );
    }

    #[test]
    fn test_lowercase_normalization() {
        let resolver = Resolver::new(pets());
        assert!(resolver.resolve(&["Cat"]).is_empty());

        let folding = Resolver::new(pets()).normalization(Normalization::Lowercase);
        assert_eq!(folding.resolve(&["Cat", "NT"]), vec![3, 1]);
    }

    #[test]
    fn test_config_overrides_fallback() {
        let config = ResolverConfig::from_json_str(r#"{"fallback": {"zzzqx": 7}}"#).unwrap();
        let resolver = Resolver::with_config(pets(), config);
        assert_eq!(resolver.resolve(&["cat", "zzzqx"]), vec![3, 7]);
    }

    #[test]
    fn test_custom_fallback() {
        struct Zero;
        impl Fallback for Zero {
            fn phoneme_count(&self, _word: &str) -> Option<usize> {
                Some(0)
            }
        }
        let resolver = Resolver::with_fallback(pets(), Zero);
        assert_eq!(resolver.resolve(&["cat", "anything"]), vec![3, 0]);
    }

    #[test]
    fn test_primary_pronunciations_skip_non_lexicon_words() {
        let resolver = Resolver::new(pets());
        let chosen = resolver.primary_pronunciations(&["the", "nt", "zzzqx", "dog"]);
        assert_eq!(chosen, vec![&pron(&["DH", "AH0"]), &pron(&["D", "AO", "G"])]);
    }

    #[test]
    fn test_reference_vocabularies() {
        let lexicon = Lexicon::from_entries(
            CONTRACTIONS_SPLIT
                .iter()
                .chain(CONTRACTIONS_INTACT)
                .filter(|w| !["nt", "nonone", "nineth", "won't", "don't"].contains(*w))
                .map(|w| (*w, vec![pron(&["X"; 2])])),
        );
        let resolver = Resolver::new(lexicon);

        let split = resolver.resolve(CONTRACTIONS_SPLIT);
        assert_eq!(split.len(), CONTRACTIONS_SPLIT.len());
        assert_eq!(split[2], 1);

        // only "don't" is unknown to both sources
        let intact = resolver.resolve_aligned(CONTRACTIONS_INTACT);
        let dropped: Vec<&str> = intact
            .iter()
            .filter(|r| !r.is_resolved())
            .map(|r| r.word.as_str())
            .collect();
        assert_eq!(dropped, vec!["don't"]);
        assert_eq!(
            resolver.resolve(CONTRACTIONS_INTACT).len(),
            CONTRACTIONS_INTACT.len() - 1
        );
    }

    #[test]
    fn test_shared_lexicon_across_threads() {
        let lexicon = Arc::new(pets());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let resolver = Resolver::new(Arc::clone(&lexicon));
                thread::spawn(move || resolver.resolve(&["cat", "nt", "zzzqx", "dog"]))
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), vec![3, 1, 3]);
        }
    }
}
