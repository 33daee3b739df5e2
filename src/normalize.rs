use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// How a word is rewritten before it is looked up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Normalization {
    /// Look the word up verbatim.
    #[default]
    Exact,
    /// Fold typographic apostrophes to ASCII `'`.
    Apostrophes,
    /// Fold apostrophes and lowercase.
    Lowercase,
}

// right/left single quote, modifier letter apostrophe, prime, fullwidth, backtick
const APOSTROPHE_VARIANTS: [char; 6] = ['\u{2019}', '\u{2018}', '\u{02BC}', '\u{2032}', '\u{FF07}', '`'];

pub fn normalize_word(word: &str, mode: Normalization) -> Cow<'_, str> {
    match mode {
        Normalization::Exact => Cow::Borrowed(word),
        Normalization::Apostrophes => fold_apostrophes(word),
        Normalization::Lowercase => {
            let folded = fold_apostrophes(word);
            if folded.chars().any(char::is_uppercase) {
                Cow::Owned(folded.to_lowercase())
            } else {
                folded
            }
        }
    }
}

fn fold_apostrophes(word: &str) -> Cow<'_, str> {
    if word.contains(APOSTROPHE_VARIANTS) {
        Cow::Owned(word.replace(APOSTROPHE_VARIANTS, "'"))
    } else {
        Cow::Borrowed(word)
    }
}
