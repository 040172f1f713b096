//! Errors raised by text collaborators.

use thiserror::Error;

/// Failure reported by a segmentation, tokenization or parsing collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollaboratorError {
    /// The collaborator cannot serve requests (model missing, not loaded).
    #[error("{collaborator} is unavailable: {message}")]
    Unavailable {
        collaborator: &'static str,
        message: String,
    },

    /// The collaborator rejected or failed on a particular input.
    #[error("{collaborator} failed: {message}")]
    Failed {
        collaborator: &'static str,
        message: String,
    },
}

/// Result type for collaborator calls.
pub type CollaboratorResult<T> = Result<T, CollaboratorError>;
