//! Git error types.

use thiserror::Error;

/// Git-related errors.
#[derive(Debug, Error)]
pub enum GitError {
    /// Not a git repository.
    #[error("not a git repository: {0}")]
    NotARepo(std::path::PathBuf),

    /// A ref name or hash does not resolve to a commit.
    #[error("failed to resolve '{0}' as ref or SHA")]
    EndpointNotFound(String),

    /// A range specification is malformed.
    #[error("invalid commit range format: {0}")]
    InvalidRange(String),

    /// The graph failed while walking commits.
    #[error("failed to read commit {id}")]
    GraphTraversal {
        /// The commit being read.
        id: String,
        /// The underlying failure.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl GitError {
    /// Creates a traversal error for `id` wrapping `source`.
    pub fn traversal(
        id: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::GraphTraversal {
            id: id.into(),
            source: source.into(),
        }
    }
}

/// Result type for git operations.
pub type GitResult<T> = Result<T, GitError>;
