//! Line parser for the CMU pronouncing dictionary.
//!
//! Two layouts are in circulation and both are accepted:
//!
//! ```text
//! aluminium AH0 L UW1 M IH0 N AH0 M
//! aluminium(2) AE2 L Y UW1 M IH0 N AH0 M
//! achill AE1 K IH0 L # place, irish
//! ```
//!
//! and the classic upper-case file NLTK ships, which may carry the variant
//! number as its own column:
//!
//! ```text
//! ;;; # CMUdict  --  Major Version: 0.07
//! ALUMINIUM  1  AH0 L UW1 M IH0 N AH0 M
//! ALUMINIUM  2  AE2 L Y UW1 M IH0 N AH0 M
//! ```
//!
//! Headwords are lowercased. Phoneme symbols are kept verbatim, stress digits
//! included.

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{LexiconError, Result};

/// One line of the dictionary: a single pronunciation variant of a word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Lowercased headword without its `(N)` suffix.
    pub word: String,
    /// 1 for the base entry, N for `word(N)` or an explicit variant column.
    pub variant: u32,
    pub phonemes: Vec<String>,
}

lazy_static! {
    // "word" or "word(2)". Lazy so that headwords like "(paren" survive.
    static ref HEADWORD_RE: Regex =
        Regex::new(r"^(?P<word>\S+?)(?:\((?P<variant>[0-9]+)\))?$").unwrap();
}

/// Parses one dictionary line. `line_no` is 1-based and only used for errors.
///
/// Returns `Ok(None)` for blank lines and `;;;` comment lines.
pub fn parse_line(line: &str, line_no: usize) -> Result<Option<Entry>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with(";;;") {
        return Ok(None);
    }

    let (head, rest) = match line.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest),
        None => (line, ""),
    };
    // Comments only count after the headword: "#hash-mark" is a real entry.
    let rest = match rest.find('#') {
        Some(idx) => &rest[..idx],
        None => rest,
    };

    let caps = HEADWORD_RE
        .captures(head)
        .ok_or_else(|| parse_error(line_no, format!("unreadable headword '{head}'")))?;
    let word = caps["word"].to_lowercase();
    let mut variant = match caps.name("variant") {
        Some(m) => parse_variant(m.as_str(), line_no)?,
        None => 1,
    };

    let mut tokens = rest.split_whitespace().peekable();
    if let Some(column) = tokens.next_if(|t| t.chars().all(|c| c.is_ascii_digit())) {
        variant = parse_variant(column, line_no)?;
    }

    let phonemes: Vec<String> = tokens.map(str::to_string).collect();
    if phonemes.is_empty() {
        return Err(parse_error(
            line_no,
            format!("headword '{word}' has no phonemes"),
        ));
    }

    Ok(Some(Entry {
        word,
        variant,
        phonemes,
    }))
}

fn parse_variant(digits: &str, line_no: usize) -> Result<u32> {
    digits
        .parse()
        .map_err(|e| parse_error(line_no, format!("bad variant number '{digits}': {e}")))
}

fn parse_error(line: usize, reason: String) -> LexiconError {
    LexiconError::Parse { line, reason }
}
