//! Configuration loader.

use std::path::Path;

use tracing::debug;

use crate::{ConfigError, ConfigResult, LintConfig, RawConfig};

/// Configuration file names, in lookup order.
pub const CONFIG_FILE_NAMES: [&str; 3] = [
    ".commit-msg-lint.yml",
    ".commit-msg-lint.yaml",
    ".commit-msg-lint.toml",
];

/// Configuration file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// YAML (`.yml`, `.yaml`, anything unrecognized).
    Yaml,
    /// TOML (`.toml`).
    Toml,
}

impl ConfigFormat {
    /// Picks the format from the file extension.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Self::Toml,
            _ => Self::Yaml,
        }
    }
}

/// Parses and validates configuration text.
///
/// # Errors
///
/// Returns an error if the text cannot be deserialized or fails validation.
pub fn parse_config(content: &str, format: ConfigFormat) -> ConfigResult<LintConfig> {
    let raw: RawConfig = match format {
        // An empty YAML document deserializes as null, not as an empty map.
        ConfigFormat::Yaml if content.trim().is_empty() => RawConfig::default(),
        ConfigFormat::Yaml => serde_yaml::from_str(content)?,
        ConfigFormat::Toml => toml::from_str(content)?,
    };

    LintConfig::from_raw(raw)
}

/// Loads configuration from the given path.
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsed or validated.
pub fn load_config(path: impl AsRef<Path>) -> ConfigResult<LintConfig> {
    let path = path.as_ref();
    debug!(?path, "loading configuration");

    if !path.exists() {
        return Err(ConfigError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    parse_config(&content, ConfigFormat::from_path(path))
}

/// Finds and loads configuration starting from the given directory.
///
/// Walks up the directory tree until a configuration file is found.
///
/// # Errors
///
/// Returns an error if no configuration file is found or it cannot be loaded.
pub fn find_and_load_config_from(start_dir: impl AsRef<Path>) -> ConfigResult<LintConfig> {
    let start_dir = start_dir.as_ref();
    // Relative paths such as "." have no parents to walk.
    let absolute = std::path::absolute(start_dir)?;
    let mut dir = absolute.as_path();

    loop {
        for name in CONFIG_FILE_NAMES {
            let config_path = dir.join(name);
            if config_path.is_file() {
                return load_config(config_path);
            }
        }

        match dir.parent() {
            Some(parent) => dir = parent,
            None => break,
        }
    }

    Err(ConfigError::NotFound(start_dir.join(CONFIG_FILE_NAMES[0])))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    const YAML: &str = r#"
rules:
  - name: no-wip
    type: deny
    scope: title
    pattern: "(?i)wip"
  - name: signed-off
    type: require
    scope: footer
    pattern: "^Signed-off-by:"
    message: "Commits must be signed off"
settings:
  skip_authors:
    - "dependabot"
"#;

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            ConfigFormat::from_path(Path::new(".commit-msg-lint.yml")),
            ConfigFormat::Yaml
        );
        assert_eq!(
            ConfigFormat::from_path(Path::new("lint.TOML")),
            ConfigFormat::Toml
        );
        assert_eq!(
            ConfigFormat::from_path(Path::new("no-extension")),
            ConfigFormat::Yaml
        );
    }

    #[test]
    fn test_parse_yaml() {
        let config = parse_config(YAML, ConfigFormat::Yaml).unwrap();
        assert_eq!(config.rules().len(), 2);
        assert_eq!(config.rules()[0].name(), "no-wip");
        assert_eq!(
            config.rules()[1].message(),
            Some("Commits must be signed off")
        );
        assert!(config.settings().skip_merge_commits);
        assert_eq!(config.settings().skip_authors.len(), 1);
    }

    #[test]
    fn test_parse_toml() {
        let content = r#"
[[rules]]
name = "no-wip"
type = "deny"
scope = "title"
pattern = "(?i)wip"

[settings]
fail_fast = false
main_ref = "trunk"
"#;
        let config = parse_config(content, ConfigFormat::Toml).unwrap();
        assert_eq!(config.rules().len(), 1);
        assert!(!config.settings().fail_fast);
        assert_eq!(config.settings().main_ref, "trunk");
    }

    #[test]
    fn test_parse_empty_yaml() {
        let err = parse_config("", ConfigFormat::Yaml).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_parse_invalid_yaml() {
        let err = parse_config("rules: [", ConfigFormat::Yaml).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidYaml(_)));
    }

    #[test]
    fn test_parse_invalid_toml() {
        let err = parse_config("this is not valid toml [[[", ConfigFormat::Toml).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidToml(_)));
    }

    #[test]
    fn test_parse_rejects_invalid_pattern() {
        let content = "rules:\n  - name: bad\n    type: deny\n    scope: title\n    pattern: \"[\"\n";
        let err = parse_config(content, ConfigFormat::Yaml).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPattern { .. }));
    }

    #[test]
    fn test_load_config_not_found() {
        let result = load_config("/nonexistent/path/.commit-msg-lint.yml");
        match result {
            Err(ConfigError::NotFound(path)) => {
                assert_eq!(path, PathBuf::from("/nonexistent/path/.commit-msg-lint.yml"));
            }
            _ => panic!("Expected NotFound error"),
        }
    }

    #[test]
    fn test_load_config_valid() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(".commit-msg-lint.yml");
        fs::write(&config_path, YAML).unwrap();

        let config = load_config(&config_path).unwrap();
        assert_eq!(config.rules().len(), 2);
    }

    #[test]
    fn test_find_and_load_config_in_parent() {
        let parent_dir = TempDir::new().unwrap();
        fs::write(parent_dir.path().join(".commit-msg-lint.yml"), YAML).unwrap();

        let child_dir = parent_dir.path().join("subdir");
        fs::create_dir(&child_dir).unwrap();

        let config = find_and_load_config_from(&child_dir).unwrap();
        assert_eq!(config.rules()[0].name(), "no-wip");
    }

    #[test]
    fn test_find_prefers_yml_over_toml() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(".commit-msg-lint.yml"), YAML).unwrap();
        fs::write(
            temp_dir.path().join(".commit-msg-lint.toml"),
            "[[rules]]\nname = \"toml-rule\"\ntype = \"deny\"\nscope = \"title\"\npattern = \"x\"\n",
        )
        .unwrap();

        let config = find_and_load_config_from(temp_dir.path()).unwrap();
        assert_eq!(config.rules()[0].name(), "no-wip");
    }

    #[test]
    fn test_find_finds_toml() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(".commit-msg-lint.toml"),
            "[[rules]]\nname = \"toml-rule\"\ntype = \"deny\"\nscope = \"title\"\npattern = \"x\"\n",
        )
        .unwrap();

        let config = find_and_load_config_from(temp_dir.path()).unwrap();
        assert_eq!(config.rules()[0].name(), "toml-rule");
    }
}
