//! Validation failures and their human-readable report.

use std::fmt;

use msglint_commit::Commit;
use msglint_config::RuleType;

use crate::RuleViolation;

/// A commit that violated at least one rule.
#[derive(Debug, Clone)]
pub struct CommitFailure {
    /// The offending commit.
    pub commit: Commit,
    /// The ref (or range) the commit was checked for.
    pub ref_name: String,
    /// Violations in rule declaration order. Never empty.
    pub violations: Vec<RuleViolation>,
}

/// Every failing commit of a validation run, in traversal order.
///
/// With `fail_fast` this holds exactly one entry.
#[derive(Debug, Clone)]
pub struct ValidationFailure {
    /// The failing commits.
    pub failures: Vec<CommitFailure>,
}

impl std::error::Error for ValidationFailure {}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, failure) in self.failures.iter().enumerate() {
            if i > 0 {
                f.write_str("\n\n")?;
            }
            write!(f, "{failure}")?;
        }
        Ok(())
    }
}

impl fmt::Display for CommitFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Commit {} in {} failed validation:",
            self.commit.short_hash(),
            self.ref_name
        )?;
        writeln!(f, "Commit message: {}", self.commit.subject())?;
        writeln!(f)?;
        f.write_str("Rule violations:")?;

        for (i, violation) in self.violations.iter().enumerate() {
            let rule = &violation.rule;
            let (found, kind) = match rule.kind() {
                RuleType::Deny => ("was found", "deny rule"),
                RuleType::Require => ("was not found", "require rule"),
            };
            write!(
                f,
                "\n  {}. [{}] {}\n     Pattern {:?} {found} in {} ({kind})",
                i + 1,
                rule.name(),
                violation.description(),
                rule.pattern(),
                rule.scope(),
            )?;
        }
        Ok(())
    }
}

impl RuleViolation {
    /// Returns the rule's custom message, or one generated from its type and
    /// scope.
    pub fn description(&self) -> String {
        if let Some(message) = self.rule.message() {
            return message.to_string();
        }
        match self.rule.kind() {
            RuleType::Deny => format!("Pattern must not match in {}", self.rule.scope()),
            RuleType::Require => format!("Pattern must match in {}", self.rule.scope()),
        }
    }
}
