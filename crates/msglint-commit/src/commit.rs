//! Commit type as read from the commit graph.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A commit as read from the commit graph.
///
/// Commits are immutable snapshots; the linter only ever reads them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    /// The commit hash (SHA).
    pub hash: String,

    /// Parent hashes in order. Empty for a root commit.
    pub parents: Vec<String>,

    /// The commit author name.
    pub author: String,

    /// The commit author email.
    pub email: String,

    /// The full commit message (subject + body).
    pub message: String,

    /// The commit date.
    pub date: DateTime<Utc>,
}

impl Commit {
    /// Creates a new commit.
    #[must_use]
    pub fn new(
        hash: impl Into<String>,
        parents: Vec<String>,
        author: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            hash: hash.into(),
            parents,
            author: author.into(),
            email: email.into(),
            message: message.into(),
            date,
        }
    }

    /// Returns the first line of the commit message, trimmed.
    #[must_use]
    pub fn subject(&self) -> &str {
        self.message.lines().next().unwrap_or("").trim()
    }

    /// Returns the short hash (first 7 characters).
    #[must_use]
    pub fn short_hash(&self) -> &str {
        self.hash.get(..7).unwrap_or(&self.hash)
    }

    /// Returns true if the commit has more than one parent.
    #[must_use]
    pub fn is_merge(&self) -> bool {
        self.parents.len() > 1
    }

    /// Returns true if the commit has no parents.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.parents.is_empty()
    }
}
