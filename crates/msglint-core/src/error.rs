//! Core error types.

use thiserror::Error;

use crate::ValidationFailure;

/// Core-related errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Git error.
    #[error(transparent)]
    Git(#[from] msglint_git::GitError),

    /// Configuration error.
    #[error(transparent)]
    Config(#[from] msglint_config::ConfigError),

    /// The push-hook input could not be read.
    #[error("error reading push-hook input")]
    Input(#[source] std::io::Error),

    /// One or more commits violate the configured rules.
    #[error(transparent)]
    Validation(#[from] ValidationFailure),
}

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;
