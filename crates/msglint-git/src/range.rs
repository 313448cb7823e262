//! Commit range resolution.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet, VecDeque};
use std::fmt;
use std::str::FromStr;

use msglint_commit::Commit;
use tracing::debug;

use crate::{CommitGraph, GitError, GitResult, is_zero_oid};

/// Which commits to check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitRange {
    /// Commits reachable from `head` but not from `base`.
    Bounded {
        /// Exclusive endpoint.
        base: String,
        /// Inclusive endpoint.
        head: String,
    },
    /// Every commit reachable from `head`.
    Ancestry {
        /// Inclusive endpoint.
        head: String,
    },
}

impl FromStr for CommitRange {
    type Err = GitError;

    /// Parses `base..head` or a single `head`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s.contains("...") {
            return Err(GitError::InvalidRange(s.to_string()));
        }

        if !s.contains("..") {
            return Ok(Self::Ancestry {
                head: s.to_string(),
            });
        }

        match s.split("..").collect::<Vec<_>>().as_slice() {
            [base, head] if !base.is_empty() && !head.is_empty() => Ok(Self::Bounded {
                base: (*base).to_string(),
                head: (*head).to_string(),
            }),
            _ => Err(GitError::InvalidRange(s.to_string())),
        }
    }
}

impl fmt::Display for CommitRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bounded { base, head } => write!(f, "{base}..{head}"),
            Self::Ancestry { head } => f.write_str(head),
        }
    }
}

/// Computes the commits a range introduces.
///
/// Every walk is an explicit worklist plus a visited set, so each commit is
/// loaded at most once per walk no matter how many merge paths reach it.
pub struct RangeResolver<'g, G: ?Sized> {
    graph: &'g G,
}

impl<'g, G: CommitGraph + ?Sized> RangeResolver<'g, G> {
    /// Creates a resolver over `graph`.
    pub fn new(graph: &'g G) -> Self {
        Self { graph }
    }

    /// Resolves a [`CommitRange`].
    ///
    /// # Errors
    ///
    /// See [`resolve_range`](Self::resolve_range) and
    /// [`resolve_ancestry`](Self::resolve_ancestry).
    pub fn resolve(&self, range: &CommitRange) -> GitResult<Vec<Commit>> {
        match range {
            CommitRange::Bounded { base, head } => self.resolve_range(base, head),
            CommitRange::Ancestry { head } => self.resolve_ancestry(head),
        }
    }

    /// Returns the commits reachable from `head` and not from `base`,
    /// newest first.
    ///
    /// The endpoints need not be related; for diverged histories the result
    /// is the `head` side only.
    ///
    /// # Errors
    ///
    /// Returns an error if an endpoint does not resolve or the graph fails
    /// mid-walk.
    pub fn resolve_range(&self, base: &str, head: &str) -> GitResult<Vec<Commit>> {
        if is_zero_oid(base) || is_zero_oid(head) {
            debug!(base, head, "zero endpoint, nothing to check");
            return Ok(Vec::new());
        }

        let base_id = self.graph.resolve(base)?;
        let head_id = self.graph.resolve(head)?;
        if base_id == head_id {
            return Ok(Vec::new());
        }

        let excluded = self.ancestor_set(&base_id)?;
        debug!(base = %base_id, excluded = excluded.len(), "collected base ancestry");

        let commits = self.walk(&head_id, &excluded)?;
        debug!(head = %head_id, commits = commits.len(), "resolved commit range");
        Ok(commits)
    }

    /// Returns `head` and every commit reachable from it, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if `head` does not resolve or the graph fails
    /// mid-walk.
    pub fn resolve_ancestry(&self, head: &str) -> GitResult<Vec<Commit>> {
        if is_zero_oid(head) {
            debug!(head, "zero endpoint, nothing to check");
            return Ok(Vec::new());
        }

        let head_id = self.graph.resolve(head)?;
        let commits = self.walk(&head_id, &HashSet::new())?;
        debug!(head = %head_id, commits = commits.len(), "resolved ancestry");
        Ok(commits)
    }

    /// Collects `id` and all its transitive parents.
    fn ancestor_set(&self, id: &str) -> GitResult<HashSet<String>> {
        let mut seen = HashSet::from([id.to_string()]);
        let mut queue = VecDeque::from([id.to_string()]);

        while let Some(id) = queue.pop_front() {
            for parent in self.graph.commit(&id)?.parents {
                if seen.insert(parent.clone()) {
                    queue.push_back(parent);
                }
            }
        }

        Ok(seen)
    }

    /// Walks from `head` in commit-time order, newest first, never entering
    /// `excluded`.
    ///
    /// `excluded` is closed under parents, so stopping at its boundary drops
    /// nothing that a full walk would have kept.
    fn walk(&self, head: &str, excluded: &HashSet<String>) -> GitResult<Vec<Commit>> {
        if excluded.contains(head) {
            return Ok(Vec::new());
        }

        let mut seen = HashSet::from([head.to_string()]);
        let mut pending = BinaryHeap::from([ByTime(self.graph.commit(head)?)]);
        let mut commits = Vec::new();

        while let Some(ByTime(commit)) = pending.pop() {
            for parent in &commit.parents {
                if excluded.contains(parent) || !seen.insert(parent.clone()) {
                    continue;
                }
                pending.push(ByTime(self.graph.commit(parent)?));
            }
            commits.push(commit);
        }

        Ok(commits)
    }
}

/// Orders commits by date, then hash, so the heap pops the newest first.
struct ByTime(Commit);

impl Ord for ByTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .date
            .cmp(&other.0.date)
            .then_with(|| self.0.hash.cmp(&other.0.hash))
    }
}

impl PartialOrd for ByTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for ByTime {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ByTime {}
