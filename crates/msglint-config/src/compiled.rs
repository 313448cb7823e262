//! Validated configuration with precompiled patterns.

use std::collections::HashSet;

use regex::Regex;
use tracing::debug;

use crate::{ConfigError, ConfigResult, RawConfig, RuleSpec, RuleType, Scope, SettingsSpec};

/// Ref that new branches are compared against when none is configured.
pub const DEFAULT_MAIN_REF: &str = "main";

/// A rule whose pattern has been validated and compiled.
///
/// Only produced by [`CompiledRule::compile`], so holding one means the
/// pattern is usable.
#[derive(Debug, Clone)]
pub struct CompiledRule {
    name: String,
    kind: RuleType,
    scope: Scope,
    pattern: Regex,
    message: Option<String>,
}

impl CompiledRule {
    /// Validates and compiles a rule.
    ///
    /// # Errors
    ///
    /// Returns an error if the name or pattern is empty, or the pattern does
    /// not compile.
    pub fn compile(spec: RuleSpec) -> ConfigResult<Self> {
        if spec.name.trim().is_empty() {
            return Err(ConfigError::Invalid("rule name is required".to_string()));
        }

        if spec.pattern.is_empty() {
            return Err(ConfigError::Invalid(format!(
                "rule {:?}: pattern is required",
                spec.name
            )));
        }

        let pattern = Regex::new(&spec.pattern).map_err(|source| ConfigError::InvalidPattern {
            context: format!("rule {:?}", spec.name),
            pattern: spec.pattern.clone(),
            source,
        })?;

        Ok(Self {
            name: spec.name,
            kind: spec.kind,
            scope: spec.scope,
            pattern,
            message: spec.message.filter(|m| !m.is_empty()),
        })
    }

    /// Returns the rule name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the rule type.
    pub fn kind(&self) -> RuleType {
        self.kind
    }

    /// Returns the scope the rule inspects.
    pub fn scope(&self) -> Scope {
        self.scope
    }

    /// Returns the pattern source text.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Returns the custom violation message, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Returns true if the pattern matches anywhere in `text`.
    pub fn is_match(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }
}

/// Global settings with defaults applied.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Stop at the first failing commit.
    pub fail_fast: bool,

    /// Skip commits with more than one parent.
    pub skip_merge_commits: bool,

    /// Ref that new branches are compared against.
    pub main_ref: String,

    /// Author name/email patterns whose commits are not checked.
    pub skip_authors: Vec<Regex>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            fail_fast: true,
            skip_merge_commits: true,
            main_ref: DEFAULT_MAIN_REF.to_string(),
            skip_authors: Vec::new(),
        }
    }
}

impl Settings {
    /// Applies defaults and compiles skip-author patterns.
    ///
    /// # Errors
    ///
    /// Returns an error if `main_ref` is empty or a skip-author pattern does
    /// not compile.
    pub fn from_spec(spec: SettingsSpec) -> ConfigResult<Self> {
        let main_ref = match spec.main_ref {
            Some(main_ref) if main_ref.trim().is_empty() => {
                return Err(ConfigError::Invalid(
                    "settings.main_ref must not be empty".to_string(),
                ));
            }
            Some(main_ref) => main_ref,
            None => DEFAULT_MAIN_REF.to_string(),
        };

        let skip_authors = spec
            .skip_authors
            .iter()
            .enumerate()
            .map(|(i, pattern)| {
                Regex::new(pattern).map_err(|source| ConfigError::InvalidPattern {
                    context: format!("skip_authors[{i}]"),
                    pattern: pattern.clone(),
                    source,
                })
            })
            .collect::<ConfigResult<Vec<_>>>()?;

        Ok(Self {
            fail_fast: spec.fail_fast.unwrap_or(true),
            skip_merge_commits: spec.skip_merge_commits.unwrap_or(true),
            main_ref,
            skip_authors,
        })
    }
}

/// A fully validated configuration, ready for evaluation.
#[derive(Debug, Clone)]
pub struct LintConfig {
    rules: Vec<CompiledRule>,
    settings: Settings,
}

impl LintConfig {
    /// Creates a configuration from already compiled parts.
    #[must_use]
    pub fn new(rules: Vec<CompiledRule>, settings: Settings) -> Self {
        Self { rules, settings }
    }

    /// Validates a deserialized configuration and compiles every pattern.
    ///
    /// # Errors
    ///
    /// Returns an error if no rules are defined, a rule is invalid, two rules
    /// share a name, or the settings are invalid.
    pub fn from_raw(raw: RawConfig) -> ConfigResult<Self> {
        if raw.rules.is_empty() {
            return Err(ConfigError::Invalid("no rules defined".to_string()));
        }

        let mut seen = HashSet::new();
        let mut rules = Vec::with_capacity(raw.rules.len());
        for (i, spec) in raw.rules.into_iter().enumerate() {
            if spec.name.trim().is_empty() {
                return Err(ConfigError::Invalid(format!("rule {i}: name is required")));
            }
            if !seen.insert(spec.name.clone()) {
                return Err(ConfigError::Invalid(format!(
                    "rule {:?}: duplicate rule name",
                    spec.name
                )));
            }
            rules.push(CompiledRule::compile(spec)?);
        }

        let settings = Settings::from_spec(raw.settings)?;
        debug!(rules = rules.len(), main_ref = %settings.main_ref, "configuration validated");

        Ok(Self { rules, settings })
    }

    /// Returns the rules in declaration order.
    pub fn rules(&self) -> &[CompiledRule] {
        &self.rules
    }

    /// Returns the settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(name: &str, kind: RuleType, scope: Scope, pattern: &str) -> RuleSpec {
        RuleSpec {
            name: name.to_string(),
            kind,
            scope,
            pattern: pattern.to_string(),
            message: None,
        }
    }

    #[test]
    fn test_compile_valid_rule() {
        let rule = CompiledRule::compile(spec("no-wip", RuleType::Deny, Scope::Title, "(?i)wip"))
            .unwrap();

        assert_eq!(rule.name(), "no-wip");
        assert_eq!(rule.kind(), RuleType::Deny);
        assert_eq!(rule.scope(), Scope::Title);
        assert_eq!(rule.pattern(), "(?i)wip");
        assert!(rule.is_match("WIP: debug"));
        assert!(!rule.is_match("Add feature"));
    }

    #[test]
    fn test_compile_invalid_pattern() {
        let err = CompiledRule::compile(spec("broken", RuleType::Deny, Scope::Title, "(unclosed"))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPattern { .. }));
        assert!(err.to_string().contains("broken"));
    }

    #[test]
    fn test_compile_empty_pattern() {
        let err = CompiledRule::compile(spec("empty", RuleType::Require, Scope::Body, ""))
            .unwrap_err();
        assert!(err.to_string().contains("pattern is required"));
    }

    #[test]
    fn test_empty_custom_message_dropped() {
        let mut rule_spec = spec("r", RuleType::Deny, Scope::Title, "x");
        rule_spec.message = Some(String::new());
        let rule = CompiledRule::compile(rule_spec).unwrap();
        assert!(rule.message().is_none());
    }

    #[test]
    fn test_from_raw_requires_rules() {
        let err = LintConfig::from_raw(RawConfig::default()).unwrap_err();
        assert_eq!(err.to_string(), "invalid configuration: no rules defined");
    }

    #[test]
    fn test_from_raw_rejects_empty_name() {
        let raw = RawConfig {
            rules: vec![spec("", RuleType::Deny, Scope::Title, "x")],
            settings: SettingsSpec::default(),
        };
        let err = LintConfig::from_raw(raw).unwrap_err();
        assert!(err.to_string().contains("rule 0: name is required"));
    }

    #[test]
    fn test_from_raw_rejects_duplicate_names() {
        let raw = RawConfig {
            rules: vec![
                spec("same", RuleType::Deny, Scope::Title, "a"),
                spec("same", RuleType::Require, Scope::Footer, "b"),
            ],
            settings: SettingsSpec::default(),
        };
        let err = LintConfig::from_raw(raw).unwrap_err();
        assert!(err.to_string().contains("duplicate rule name"));
    }

    #[test]
    fn test_from_raw_keeps_declaration_order() {
        let raw = RawConfig {
            rules: vec![
                spec("b", RuleType::Deny, Scope::Title, "b"),
                spec("a", RuleType::Deny, Scope::Title, "a"),
            ],
            settings: SettingsSpec::default(),
        };
        let config = LintConfig::from_raw(raw).unwrap();
        let names: Vec<_> = config.rules().iter().map(CompiledRule::name).collect();
        assert_eq!(names, vec!["b", "a"]);
    }

    #[test]
    fn test_settings_defaults() {
        let settings = Settings::from_spec(SettingsSpec::default()).unwrap();
        assert!(settings.fail_fast);
        assert!(settings.skip_merge_commits);
        assert_eq!(settings.main_ref, "main");
        assert!(settings.skip_authors.is_empty());
    }

    #[test]
    fn test_settings_explicit_false_honoured() {
        let settings = Settings::from_spec(SettingsSpec {
            fail_fast: Some(false),
            skip_merge_commits: Some(false),
            main_ref: Some("develop".to_string()),
            skip_authors: vec![r"\[bot\]$".to_string()],
        })
        .unwrap();

        assert!(!settings.fail_fast);
        assert!(!settings.skip_merge_commits);
        assert_eq!(settings.main_ref, "develop");
        assert_eq!(settings.skip_authors.len(), 1);
    }

    #[test]
    fn test_settings_invalid_skip_author() {
        let err = Settings::from_spec(SettingsSpec {
            skip_authors: vec!["ok".to_string(), "[".to_string()],
            ..SettingsSpec::default()
        })
        .unwrap_err();
        assert!(err.to_string().contains("skip_authors[1]"));
    }

    #[test]
    fn test_settings_empty_main_ref() {
        let err = Settings::from_spec(SettingsSpec {
            main_ref: Some("  ".to_string()),
            ..SettingsSpec::default()
        })
        .unwrap_err();
        assert!(err.to_string().contains("main_ref"));
    }
}
