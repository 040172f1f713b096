//! Error types for pattern compilation.

use thiserror::Error;

/// Errors that can occur while compiling the knowledge bases.
#[derive(Debug, Clone, Error)]
pub enum PatternError {
    /// A generated regular expression was rejected by the regex engine.
    #[error("failed to compile pattern for {owner}: {source}")]
    Compile {
        owner: String,
        #[source]
        source: regex::Error,
    },
}

/// Result type for pattern operations.
pub type PatternResult<T> = Result<T, PatternError>;
