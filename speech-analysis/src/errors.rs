//! Error types for corpus analysis.

use speech_corpus::CorpusError;
use speech_nlp::CollaboratorError;
use speech_patterns::PatternError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Loading a corpus file or shard failed.
    #[error(transparent)]
    Corpus(#[from] CorpusError),

    /// The pattern registry could not be compiled.
    #[error(transparent)]
    Pattern(#[from] PatternError),

    /// A text collaborator failed on an analyzed document.
    #[error("collaborator failed while analyzing {context}: {source}")]
    Collaborator {
        context: String,
        #[source]
        source: CollaboratorError,
    },
}

/// Result type for analysis operations.
pub type AnalysisResult<T> = Result<T, AnalysisError>;
