//! Lint settings loaded from `docs-lint.toml`.
//!
//! The file is optional and lives in the project root next to `docs.json`.
//! Every key has a default, so a settings file only needs the values it
//! wants to change:
//!
//! ```toml
//! # Also walk generated snippets, and expand nested navigation groups
//! exclude_dirs = ["node_modules", ".git", "snippets"]
//! expand_nested_pages = true
//! ```
//!
//! Unknown keys are rejected to catch typos early. Run `docs-lint gen-config`
//! for a fully commented template.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// File name of the settings file, looked up in the project root.
pub const SETTINGS_FILE: &str = "docs-lint.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LintConfig {
    /// Navigation config file, relative to the project root.
    pub docs_config: String,
    /// Content file extension, without the leading dot.
    pub extension: String,
    /// Directory names skipped (with everything below them) when scanning.
    pub exclude_dirs: Vec<String>,
    /// Expand `{ "pages": [...] }` entries nested inside a group's pages.
    pub expand_nested_pages: bool,
    /// Count orphan files toward a failing exit status.
    pub orphans_are_errors: bool,
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            docs_config: "docs.json".to_string(),
            extension: "mdx".to_string(),
            exclude_dirs: vec!["node_modules".to_string(), ".git".to_string()],
            expand_nested_pages: false,
            orphans_are_errors: false,
        }
    }
}

impl LintConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.docs_config.trim().is_empty() {
            return Err(ConfigError::Validation(
                "docs_config must not be empty".into(),
            ));
        }
        if self.extension.is_empty() {
            return Err(ConfigError::Validation("extension must not be empty".into()));
        }
        if self.extension.starts_with('.') {
            return Err(ConfigError::Validation(format!(
                "extension must not start with '.': use \"{}\"",
                self.extension.trim_start_matches('.')
            )));
        }
        if self.exclude_dirs.iter().any(|d| d.is_empty() || d.contains(['/', '\\'])) {
            return Err(ConfigError::Validation(
                "exclude_dirs entries must be single directory names".into(),
            ));
        }
        Ok(())
    }

    /// Suffix content files must end with, e.g. `.mdx`.
    pub fn dotted_extension(&self) -> String {
        format!(".{}", self.extension)
    }
}

/// Load `docs-lint.toml` from `root`, falling back to defaults when absent.
pub fn load_config(root: &Path) -> Result<LintConfig, ConfigError> {
    let path = root.join(SETTINGS_FILE);
    if !path.exists() {
        return Ok(LintConfig::default());
    }
    let content = fs::read_to_string(&path)?;
    let config: LintConfig = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock `docs-lint.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# docs-lint settings
# ==================
# All settings are optional. Values shown below are the defaults.
# Place this file next to docs.json. Unknown keys cause an error.

# Navigation config file, relative to the project root.
docs_config = "docs.json"

# Content file extension (no leading dot).
extension = "mdx"

# Directory names that are skipped, with everything beneath them.
# Matched against whole path components, never substrings.
exclude_dirs = ["node_modules", ".git"]

# Pages listed inside a nested group ({ "group": ..., "pages": [...] }
# inside another group's pages) are ignored by default. Set to true to
# count them as navigation pages.
expand_nested_pages = false

# Orphan files are reported as warnings. Set to true to make them fail
# the run like missing pages and broken links do.
orphans_are_errors = false
"##
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults() {
        let config = LintConfig::default();
        assert_eq!(config.docs_config, "docs.json");
        assert_eq!(config.extension, "mdx");
        assert_eq!(config.exclude_dirs, vec!["node_modules", ".git"]);
        assert!(!config.expand_nested_pages);
        assert!(!config.orphans_are_errors);
        assert_eq!(config.dotted_extension(), ".mdx");
    }

    #[test]
    fn default_config_passes_validation() {
        assert!(LintConfig::default().validate().is_ok());
    }

    #[test]
    fn stock_config_matches_defaults() {
        let parsed: LintConfig = toml::from_str(stock_config_toml()).unwrap();
        assert_eq!(parsed, LintConfig::default());
    }

    #[test]
    fn partial_config_keeps_defaults() {
        let config: LintConfig = toml::from_str("expand_nested_pages = true").unwrap();
        assert!(config.expand_nested_pages);
        assert_eq!(config.extension, "mdx");
        assert_eq!(config.exclude_dirs, vec!["node_modules", ".git"]);
    }

    #[test]
    fn unknown_keys_rejected() {
        let result: Result<LintConfig, _> = toml::from_str("extensoin = \"md\"");
        assert!(result.is_err());
    }

    #[test]
    fn validate_empty_extension() {
        let config = LintConfig {
            extension: String::new(),
            ..LintConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn validate_dotted_extension() {
        let config = LintConfig {
            extension: ".md".to_string(),
            ..LintConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("use \"md\""));
    }

    #[test]
    fn validate_exclude_dir_with_separator() {
        let config = LintConfig {
            exclude_dirs: vec!["docs/drafts".to_string()],
            ..LintConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn validate_empty_docs_config() {
        let config = LintConfig {
            docs_config: "  ".to_string(),
            ..LintConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    // =========================================================================
    // load_config tests
    // =========================================================================

    #[test]
    fn load_config_returns_default_when_no_file() {
        let tmp = TempDir::new().unwrap();
        assert_eq!(load_config(tmp.path()).unwrap(), LintConfig::default());
    }

    #[test]
    fn load_config_reads_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join(SETTINGS_FILE),
            r#"
extension = "md"
exclude_dirs = ["node_modules", ".git", "snippets"]
orphans_are_errors = true
"#,
        )
        .unwrap();

        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.extension, "md");
        assert_eq!(config.exclude_dirs.len(), 3);
        assert!(config.orphans_are_errors);
        assert_eq!(config.docs_config, "docs.json");
    }

    #[test]
    fn load_config_invalid_toml_is_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(SETTINGS_FILE), "this is not valid toml [[[").unwrap();

        assert!(matches!(load_config(tmp.path()), Err(ConfigError::Toml(_))));
    }

    #[test]
    fn load_config_validates() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(SETTINGS_FILE), "extension = \".mdx\"").unwrap();

        assert!(matches!(
            load_config(tmp.path()),
            Err(ConfigError::Validation(_))
        ));
    }
}
