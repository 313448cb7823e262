//! Validation orchestration.

use msglint_commit::{Commit, ParsedMessage};
use msglint_config::LintConfig;
use msglint_git::{CommitGraph, CommitRange, GitError, RangeResolver};
use tracing::{debug, info};

use crate::{CommitFailure, CoreResult, RefUpdate, SkipFilter, ValidationFailure, evaluate};

/// Checks commits against a configuration.
pub struct Validator<'a, G: ?Sized> {
    graph: &'a G,
    config: &'a LintConfig,
    filter: SkipFilter<'a>,
}

impl<'a, G: CommitGraph + ?Sized> Validator<'a, G> {
    /// Creates a validator reading commits from `graph`.
    pub fn new(graph: &'a G, config: &'a LintConfig) -> Self {
        Self {
            graph,
            config,
            filter: SkipFilter::new(config.settings()),
        }
    }

    /// Validates the commits reachable from `head` but not from `base`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`](crate::CoreError::Validation) if a
    /// commit violates a rule, or a git error if the range cannot be resolved.
    pub fn validate_range(&self, base: &str, head: &str) -> CoreResult<()> {
        let range = CommitRange::Bounded {
            base: base.to_string(),
            head: head.to_string(),
        };
        let commits = RangeResolver::new(self.graph).resolve(&range)?;
        self.validate_commits(&commits, &range.to_string())
    }

    /// Validates every ref update of a push, in input order.
    ///
    /// Deletions are skipped. New branches are checked against the
    /// configured main ref, or in full if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`](crate::CoreError::Validation) if a
    /// commit violates a rule, or a git error if a range cannot be resolved.
    pub fn validate_push(&self, updates: &[RefUpdate]) -> CoreResult<()> {
        let resolver = RangeResolver::new(self.graph);
        let mut failures = Vec::new();

        for update in updates {
            if update.is_delete() {
                debug!(local_ref = %update.local_ref, "skipping ref deletion");
                continue;
            }

            let range = self.range_for(update)?;
            let commits = resolver.resolve(&range)?;
            info!(local_ref = %update.local_ref, %range, commits = commits.len(), "checking pushed commits");

            if self.scan(&commits, &update.local_ref, &mut failures) {
                break;
            }
        }

        into_result(failures)
    }

    /// Validates an explicit list of commits, in order.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`](crate::CoreError::Validation) if a
    /// commit violates a rule.
    pub fn validate_commits(&self, commits: &[Commit], ref_name: &str) -> CoreResult<()> {
        let mut failures = Vec::new();
        self.scan(commits, ref_name, &mut failures);
        into_result(failures)
    }

    /// Picks the range of commits a ref update introduces.
    fn range_for(&self, update: &RefUpdate) -> CoreResult<CommitRange> {
        if !update.is_new_branch() {
            return Ok(CommitRange::Bounded {
                base: update.remote_oid.clone(),
                head: update.local_oid.clone(),
            });
        }

        let main_ref = &self.config.settings().main_ref;
        match self.graph.resolve(main_ref) {
            Ok(main_id) => {
                debug!(main_ref = %main_ref, base = %main_id, "new branch, comparing against main ref");
                Ok(CommitRange::Bounded {
                    base: main_id,
                    head: update.local_oid.clone(),
                })
            }
            // Must stay below `warn`: passing runs print nothing.
            Err(GitError::EndpointNotFound(_)) => {
                info!(main_ref = %main_ref, "main ref not found, checking full history of new branch");
                Ok(CommitRange::Ancestry {
                    head: update.local_oid.clone(),
                })
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Checks commits in order, recording failures. Returns true when the
    /// run must stop.
    fn scan(&self, commits: &[Commit], ref_name: &str, failures: &mut Vec<CommitFailure>) -> bool {
        for commit in commits {
            if let Some(reason) = self.filter.skip_reason(commit) {
                debug!(hash = %commit.short_hash(), %reason, "skipping commit");
                continue;
            }

            let parsed = ParsedMessage::parse(&commit.message);
            let violations = evaluate(self.config.rules(), &parsed);
            if violations.is_empty() {
                debug!(hash = %commit.short_hash(), "commit passed");
                continue;
            }

            debug!(
                hash = %commit.short_hash(),
                violations = violations.len(),
                "commit failed"
            );
            failures.push(CommitFailure {
                commit: commit.clone(),
                ref_name: ref_name.to_string(),
                violations,
            });

            if self.config.settings().fail_fast {
                return true;
            }
        }

        false
    }
}

fn into_result(failures: Vec<CommitFailure>) -> CoreResult<()> {
    if failures.is_empty() {
        Ok(())
    } else {
        Err(ValidationFailure { failures }.into())
    }
}
