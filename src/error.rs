use std::path::PathBuf;

pub type Result<T, E = LexiconError> = std::result::Result<T, E>;

/// Errors raised while loading a pronunciation lexicon.
///
/// A word missing from a loaded lexicon is not an error; these only come out
/// of the loaders, and a resolver cannot be built without a lexicon.
#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    #[error("failed to read lexicon '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed lexicon line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("malformed JSON lexicon: {0}")]
    Json(#[from] serde_json::Error),

    #[error("lexicon source contains no entries")]
    Empty,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("malformed resolver config: {0}")]
    Json(#[from] serde_json::Error),
}
