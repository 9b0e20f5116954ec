//! Corpus loading error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or validating a knowledge base.
#[derive(Debug, Error)]
pub enum CorpusError {
    /// The corpus file could not be read.
    #[error("failed to read corpus '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid JSON or does not have the expected shape.
    #[error("failed to parse corpus: {source}")]
    Parse {
        #[source]
        source: serde_json::Error,
    },

    /// An entry has an empty (or whitespace-only) `id`.
    #[error("entry at index {index} has an empty id")]
    EmptyId { index: usize },

    /// An entry has an empty (or whitespace-only) `answer`.
    #[error("entry '{id}' has an empty answer")]
    EmptyAnswer { id: String },

    /// Two entries share the same `id`.
    #[error("duplicate entry id '{id}'")]
    DuplicateId { id: String },
}

pub type CorpusResult<T> = Result<T, CorpusError>;
