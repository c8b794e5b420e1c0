//! Top-level schema checks for `docs.json`.
//!
//! Only the outer shape is validated: required keys, the theme name, and
//! whether `navigation` is one of the two known layouts. Group and page
//! contents are not inspected here.

use crate::site::{DocsConfig, NavigationShapeError};
use serde_json::Value;
use thiserror::Error;

/// Keys every `docs.json` must define, in reporting order.
pub const REQUIRED_KEYS: &[&str] = &["name", "logo", "favicon", "colors", "theme", "navigation"];

/// Accepted values for `theme`.
pub const VALID_THEMES: &[&str] = &["mint", "maple", "palm", "willow", "linden", "almond", "aspen"];

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SchemaViolation {
    #[error("Missing required key: '{0}'")]
    MissingKey(String),
    #[error("Invalid theme '{}'. Expected one of: {}", .0, VALID_THEMES.join(", "))]
    InvalidTheme(String),
    #[error(transparent)]
    Navigation(#[from] NavigationShapeError),
}

/// Validate `config`, returning every violation found. Empty means valid.
pub fn validate_schema(config: &DocsConfig) -> Vec<SchemaViolation> {
    let mut violations: Vec<SchemaViolation> = REQUIRED_KEYS
        .iter()
        .filter(|key| !config.has_key(key))
        .map(|key| SchemaViolation::MissingKey(key.to_string()))
        .collect();

    if let Some(theme) = config.raw.get("theme")
        && !is_valid_theme(theme)
    {
        violations.push(SchemaViolation::InvalidTheme(theme_label(theme)));
    }

    if let Some(Err(shape)) = &config.navigation {
        violations.push(shape.clone().into());
    }

    violations
}

fn is_valid_theme(theme: &Value) -> bool {
    theme.as_str().is_some_and(|t| VALID_THEMES.contains(&t))
}

/// Strings are shown bare; anything else as its JSON text.
fn theme_label(theme: &Value) -> String {
    match theme {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
