//! Configuration management for commit-msg-lint.
//!
//! This crate handles loading the `.commit-msg-lint.yml` (or `.toml`) file and
//! turning the rules it declares into compiled, immutable [`CompiledRule`]s.

mod compiled;
mod error;
mod loader;
mod schema;

pub use compiled::{CompiledRule, DEFAULT_MAIN_REF, LintConfig, Settings};
pub use error::{ConfigError, ConfigResult};
pub use loader::{
    CONFIG_FILE_NAMES, ConfigFormat, find_and_load_config_from, load_config, parse_config,
};
pub use schema::{RawConfig, RuleSpec, RuleType, Scope, SettingsSpec};
