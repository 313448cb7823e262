//! Configuration error types.

use thiserror::Error;

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file not found.
    #[error("configuration file not found: {0}")]
    NotFound(std::path::PathBuf),

    /// Invalid YAML syntax or schema.
    #[error("invalid YAML: {0}")]
    InvalidYaml(#[from] serde_yaml::Error),

    /// Invalid TOML syntax or schema.
    #[error("invalid TOML: {0}")]
    InvalidToml(#[from] toml::de::Error),

    /// Invalid configuration value.
    #[error("invalid configuration: {0}")]
    Invalid(String),

    /// A rule or skip-author pattern does not compile.
    #[error("invalid configuration: {context}: invalid regex pattern {pattern:?}")]
    InvalidPattern {
        /// Where the pattern was declared.
        context: String,
        /// The offending pattern text.
        pattern: String,
        /// The compilation error.
        #[source]
        source: regex::Error,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use std::path::PathBuf;

    #[test]
    fn test_not_found_display() {
        let err = ConfigError::NotFound(PathBuf::from("/repo/.commit-msg-lint.yml"));
        assert_eq!(
            err.to_string(),
            "configuration file not found: /repo/.commit-msg-lint.yml"
        );
    }

    #[test]
    fn test_invalid_display() {
        let err = ConfigError::Invalid("no rules defined".to_string());
        assert_eq!(err.to_string(), "invalid configuration: no rules defined");
    }

    #[test]
    fn test_invalid_pattern_keeps_source() {
        let source = regex::Regex::new("(").unwrap_err();
        let err = ConfigError::InvalidPattern {
            context: "rule \"no-wip\"".to_string(),
            pattern: "(".to_string(),
            source,
        };
        assert_eq!(
            err.to_string(),
            "invalid configuration: rule \"no-wip\": invalid regex pattern \"(\""
        );
        assert!(err.source().is_some());
    }
}
