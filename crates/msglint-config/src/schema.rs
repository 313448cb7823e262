//! Configuration schema, as written in the configuration file.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The configuration file as deserialized, before validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawConfig {
    /// Rules in declaration order.
    #[serde(default)]
    pub rules: Vec<RuleSpec>,

    /// Global settings.
    #[serde(default)]
    pub settings: SettingsSpec,
}

/// A single rule as declared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleSpec {
    /// Unique rule name.
    pub name: String,

    /// Whether the pattern must be absent or present.
    #[serde(rename = "type")]
    pub kind: RuleType,

    /// Which part of the message the pattern is matched against.
    pub scope: Scope,

    /// Regular expression text.
    pub pattern: String,

    /// Optional message shown instead of the generated one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Settings as declared. Unset values are `None` so that defaults are
/// distinguishable from explicit values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SettingsSpec {
    /// Stop at the first failing commit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fail_fast: Option<bool>,

    /// Skip commits with more than one parent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip_merge_commits: Option<bool>,

    /// Ref that new branches are compared against.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_ref: Option<String>,

    /// Author name/email patterns whose commits are not checked.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skip_authors: Vec<String>,
}

/// Rule enforcement type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleType {
    /// Fails if the pattern matches.
    Deny,
    /// Fails if the pattern does not match.
    Require,
}

impl fmt::Display for RuleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Deny => f.write_str("deny"),
            Self::Require => f.write_str("require"),
        }
    }
}

/// Part of the commit message a rule inspects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    /// The first section.
    Title,
    /// The sections between title and footer.
    Body,
    /// The last section.
    Footer,
    /// The whole normalized message.
    Message,
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Title => f.write_str("title"),
            Self::Body => f.write_str("body"),
            Self::Footer => f.write_str("footer"),
            Self::Message => f.write_str("message"),
        }
    }
}
