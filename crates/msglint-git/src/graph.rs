//! Commit graph accessor.

use msglint_commit::Commit;

use crate::GitResult;

/// The all-zero object id git uses for "no commit" in hook input.
pub const ZERO_OID: &str = "0000000000000000000000000000000000000000";

/// Returns true if `oid` is the all-zero "no commit" sentinel.
///
/// Accepts any non-empty run of zeros so SHA-256 repositories are covered.
pub fn is_zero_oid(oid: &str) -> bool {
    !oid.is_empty() && oid.bytes().all(|b| b == b'0')
}

/// Read-only access to a commit graph.
pub trait CommitGraph {
    /// Resolves a ref name, revision expression or hash to a commit hash.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::EndpointNotFound`](crate::GitError::EndpointNotFound)
    /// if `spec` does not name a commit.
    fn resolve(&self, spec: &str) -> GitResult<String>;

    /// Loads a commit by hash.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::GraphTraversal`](crate::GitError::GraphTraversal)
    /// if the commit cannot be read.
    fn commit(&self, id: &str) -> GitResult<Commit>;
}
