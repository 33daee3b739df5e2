//! Phoneme counts for words, resolved against a pronunciation lexicon.
//!
//! Each word takes the length of its first lexicon pronunciation. Words the
//! lexicon lacks fall back to a small table of fixed counts, and anything
//! else is skipped.

pub mod cmudict;
pub mod config;
pub mod data;
pub mod error;
pub mod fallback;
pub mod lexicon;
pub mod normalize;
pub mod resolution;
pub mod resolver;

pub use config::ResolverConfig;
pub use error::{ConfigError, LexiconError, Result};
pub use fallback::{Fallback, FallbackTable};
pub use lexicon::{Lexicon, Pronunciation, PronunciationSource};
pub use normalize::Normalization;
pub use resolution::{Outcome, Resolution};
pub use resolver::Resolver;
