//! Rule evaluation.

use msglint_commit::ParsedMessage;
use msglint_config::{CompiledRule, RuleType, Scope};

/// A rule that failed for a commit message.
#[derive(Debug, Clone)]
pub struct RuleViolation {
    /// The violated rule.
    pub rule: CompiledRule,

    /// Whether the pattern matched. `true` for a deny rule that found its
    /// pattern, `false` for a require rule that did not.
    pub matched: bool,
}

/// Selects the text a rule with `scope` inspects.
pub fn scope_text(scope: Scope, message: &ParsedMessage) -> &str {
    match scope {
        Scope::Title => &message.title,
        Scope::Body => &message.body,
        Scope::Footer => &message.footer,
        Scope::Message => &message.raw,
    }
}

/// Evaluates every rule against a parsed message.
///
/// Violations come back in rule declaration order.
pub fn evaluate(rules: &[CompiledRule], message: &ParsedMessage) -> Vec<RuleViolation> {
    rules
        .iter()
        .filter_map(|rule| {
            let matched = rule.is_match(scope_text(rule.scope(), message));
            let violated = match rule.kind() {
                RuleType::Deny => matched,
                RuleType::Require => !matched,
            };
            violated.then(|| RuleViolation {
                rule: rule.clone(),
                matched,
            })
        })
        .collect()
}
