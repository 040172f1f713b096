//! Error types for corpus building and persistence.

use speech_nlp::CollaboratorError;
use thiserror::Error;

/// Failure to turn one source document into sentences.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The document identifier does not name a year.
    #[error("document name {name:?} is not a year")]
    InvalidDocumentName { name: String },

    /// The document could not be read.
    #[error("failed to read {path}: {message}")]
    Read { path: String, message: String },

    /// A text collaborator failed while processing the document.
    #[error(transparent)]
    Collaborator(#[from] CollaboratorError),
}

/// Errors raised while persisting or loading a corpus.
#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("io error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("parquet error: {0}")]
    Parquet(#[from] parquet::errors::ParquetError),

    /// A persisted file does not have the expected columns or types.
    #[error("schema mismatch in {path}: {message}")]
    Schema { path: String, message: String },

    /// The pipeline configuration file is invalid.
    #[error("invalid configuration {path}: {message}")]
    Config { path: String, message: String },

    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl CorpusError {
    pub(crate) fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        CorpusError::Io {
            path: path.display().to_string(),
            source,
        }
    }
}

/// Result type for corpus operations.
pub type CorpusResult<T> = Result<T, CorpusError>;
