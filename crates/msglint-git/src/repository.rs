//! Git repository wrapper.

use std::path::Path;

use chrono::DateTime;
use git2::{Oid, Repository as Git2Repo};
use msglint_commit::Commit;
use tracing::debug;

use crate::{CommitGraph, GitError, GitResult};

/// A Git repository wrapper.
pub struct Repository {
    inner: Git2Repo,
}

impl Repository {
    /// Discovers the repository containing the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if no repository is found.
    pub fn discover(path: impl AsRef<Path>) -> GitResult<Self> {
        let path = path.as_ref();
        let inner =
            Git2Repo::discover(path).map_err(|_| GitError::NotARepo(path.to_path_buf()))?;
        Ok(Self { inner })
    }
}

impl CommitGraph for Repository {
    /// Tries `spec` as a revision (branches, remotes, tags, `HEAD~2`, ...)
    /// first, then as a raw hash.
    fn resolve(&self, spec: &str) -> GitResult<String> {
        if let Ok(commit) = self
            .inner
            .revparse_single(spec)
            .and_then(|object| object.peel_to_commit())
        {
            return Ok(commit.id().to_string());
        }

        let commit = Oid::from_str(spec)
            .and_then(|oid| self.inner.find_commit(oid))
            .map_err(|err| {
                debug!(spec, %err, "endpoint did not resolve");
                GitError::EndpointNotFound(spec.to_string())
            })?;

        Ok(commit.id().to_string())
    }

    fn commit(&self, id: &str) -> GitResult<Commit> {
        let commit = Oid::from_str(id)
            .and_then(|oid| self.inner.find_commit(oid))
            .map_err(|err| GitError::traversal(id, err))?;

        let author = commit.author();
        let date = DateTime::from_timestamp(commit.time().seconds(), 0).unwrap_or_default();

        Ok(Commit::new(
            commit.id().to_string(),
            commit.parent_ids().map(|oid| oid.to_string()).collect(),
            String::from_utf8_lossy(author.name_bytes()),
            String::from_utf8_lossy(author.email_bytes()),
            String::from_utf8_lossy(commit.message_bytes()),
            date,
        ))
    }
}
