//! Error types for vocab-core.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using VocabError.
pub type Result<T> = std::result::Result<T, VocabError>;

/// Errors raised while loading vocabulary or configuration.
#[derive(Debug, Error)]
pub enum VocabError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid vocabulary JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("entry {index} is missing {field}")]
    MissingField { index: usize, field: &'static str },

    #[error("duplicate word {word} in set {set}")]
    DuplicateWord { set: String, word: String },

    #[error("unknown vocabulary set: {0}")]
    UnknownSet(String),

    #[error("invalid value for {key}: {value}")]
    InvalidSetting { key: String, value: String },
}
