//! In-memory commit graph.

use std::collections::HashMap;

use msglint_commit::Commit;

use crate::{CommitGraph, GitError, GitResult};

/// A commit graph held entirely in memory.
///
/// Useful for embedding the linter where commits come from somewhere other
/// than a git repository, and for tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryGraph {
    commits: HashMap<String, Commit>,
    refs: HashMap<String, String>,
}

impl MemoryGraph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a commit, replacing any commit with the same hash.
    pub fn insert(&mut self, commit: Commit) {
        self.commits.insert(commit.hash.clone(), commit);
    }

    /// Points a named ref at a commit hash.
    pub fn set_ref(&mut self, name: impl Into<String>, id: impl Into<String>) {
        self.refs.insert(name.into(), id.into());
    }

    /// Returns the number of commits in the graph.
    pub fn len(&self) -> usize {
        self.commits.len()
    }

    /// Returns true if the graph holds no commits.
    pub fn is_empty(&self) -> bool {
        self.commits.is_empty()
    }
}

impl CommitGraph for MemoryGraph {
    fn resolve(&self, spec: &str) -> GitResult<String> {
        if let Some(id) = self.refs.get(spec) {
            return Ok(id.clone());
        }
        if self.commits.contains_key(spec) {
            return Ok(spec.to_string());
        }
        Err(GitError::EndpointNotFound(spec.to_string()))
    }

    fn commit(&self, id: &str) -> GitResult<Commit> {
        self.commits
            .get(id)
            .cloned()
            .ok_or_else(|| GitError::traversal(id, "commit not found in graph"))
    }
}
