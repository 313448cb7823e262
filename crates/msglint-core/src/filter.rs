//! Commit skip filters.

use std::fmt;

use msglint_commit::Commit;
use msglint_config::Settings;
use regex::Regex;

/// Why a commit was not checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The commit has more than one parent.
    Merge,
    /// The author name or email matched a skip pattern.
    Author,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Merge => f.write_str("merge commit"),
            Self::Author => f.write_str("skipped author"),
        }
    }
}

/// Decides which commits are exempt from rule evaluation.
#[derive(Debug, Clone)]
pub struct SkipFilter<'a> {
    skip_merge_commits: bool,
    skip_authors: &'a [Regex],
}

impl<'a> SkipFilter<'a> {
    /// Creates a filter from settings.
    pub fn new(settings: &'a Settings) -> Self {
        Self {
            skip_merge_commits: settings.skip_merge_commits,
            skip_authors: &settings.skip_authors,
        }
    }

    /// Returns why `commit` should be skipped, or `None` to check it.
    pub fn skip_reason(&self, commit: &Commit) -> Option<SkipReason> {
        if self.skip_merge_commits && commit.is_merge() {
            return Some(SkipReason::Merge);
        }

        self.skip_authors
            .iter()
            .any(|re| re.is_match(&commit.author) || re.is_match(&commit.email))
            .then_some(SkipReason::Author)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn commit(author: &str, email: &str, parents: usize) -> Commit {
        Commit::new(
            "abc1234",
            (0..parents).map(|i| format!("p{i}")).collect(),
            author,
            email,
            "message",
            Utc::now(),
        )
    }

    fn settings(skip_merge_commits: bool, skip_authors: &[&str]) -> Settings {
        Settings {
            skip_merge_commits,
            skip_authors: skip_authors.iter().map(|p| Regex::new(p).unwrap()).collect(),
            ..Settings::default()
        }
    }

    #[test]
    fn test_merge_skipped_by_default() {
        let settings = Settings::default();
        let filter = SkipFilter::new(&settings);
        assert_eq!(
            filter.skip_reason(&commit("A", "a@x", 2)),
            Some(SkipReason::Merge)
        );
        assert_eq!(filter.skip_reason(&commit("A", "a@x", 1)), None);
        assert_eq!(filter.skip_reason(&commit("A", "a@x", 0)), None);
    }

    #[test]
    fn test_merge_checked_when_disabled() {
        let settings = settings(false, &[]);
        let filter = SkipFilter::new(&settings);
        assert_eq!(filter.skip_reason(&commit("A", "a@x", 2)), None);
    }

    #[test]
    fn test_author_name_or_email() {
        let settings = settings(true, &[r"\[bot\]$", "^ci@"]);
        let filter = SkipFilter::new(&settings);

        assert_eq!(
            filter.skip_reason(&commit("renovate[bot]", "r@x", 1)),
            Some(SkipReason::Author)
        );
        assert_eq!(
            filter.skip_reason(&commit("Build", "ci@example.com", 1)),
            Some(SkipReason::Author)
        );
        assert_eq!(filter.skip_reason(&commit("Alice", "alice@x", 1)), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(SkipReason::Merge.to_string(), "merge commit");
        assert_eq!(SkipReason::Author.to_string(), "skipped author");
    }
}
