//! Loading `docs.json` and extracting the pages its navigation references.
//!
//! The config is read once and kept as a raw JSON object, because schema
//! validation needs to know which top-level keys are present. The
//! `navigation` value is additionally decoded, once, into a [`Navigation`]:
//!
//! ```text
//! "navigation": [ { "group": "...", "pages": [...] } ]                 → Navigation::Groups
//! "navigation": { "tabs": [ { "tab": "...", "groups": [...] } ] }      → Navigation::Tabs
//! ```
//!
//! Any other shape is kept as a [`NavigationShapeError`] so the schema
//! validator can report it while the remaining checks still run.
//!
//! ## Nested pages
//!
//! A page entry may itself be a group (`{ "group": "...", "pages": [...] }`).
//! Those nested pages are **not** part of the navigation page set unless
//! `expand_nested_pages` is enabled in `docs-lint.toml`.

use serde::Deserialize;
use serde::de::{DeserializeOwned, Deserializer};
use serde_json::{Map, Value};
use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("{} not found at {}", file_label(.0), .0.display())]
    NotFound(PathBuf),
    #[error("cannot read {}: {}", .0.display(), .1)]
    Read(PathBuf, #[source] io::Error),
    #[error("{0}")]
    Parse(#[from] serde_json::Error),
    #[error("top-level value must be an object")]
    NotAnObject,
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "config".to_string())
}

/// Why a `navigation` value could not be decoded.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NavigationShapeError {
    #[error("Navigation object must contain 'tabs' array.")]
    MissingTabs,
    #[error("Navigation 'tabs' must be an array of tab objects.")]
    TabsNotArray,
    #[error("Navigation must be either an array of groups or an object with 'tabs'.")]
    UnknownShape,
}

/// The parsed site config.
#[derive(Debug, Clone)]
pub struct DocsConfig {
    /// Every top-level key as written in the file.
    pub raw: Map<String, Value>,
    /// `None` when the `navigation` key is absent.
    pub navigation: Option<Result<Navigation, NavigationShapeError>>,
}

/// The two accepted navigation layouts.
#[derive(Debug, Clone, PartialEq)]
pub enum Navigation {
    /// Legacy form: a flat array of groups.
    Groups(Vec<Group>),
    /// Current form: `{ "tabs": [...] }`, each tab holding its own groups.
    Tabs(Vec<Tab>),
}

/// Labels are kept as raw JSON: a localized or numeric label must not
/// cost the tab its groups.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Tab {
    #[serde(default)]
    pub tab: Option<Value>,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub groups: Vec<Group>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Group {
    #[serde(default)]
    pub group: Option<Value>,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub pages: Vec<PageEntry>,
}

/// One entry of a group's `pages` array.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PageEntry {
    /// A bare page identifier such as `"guides/setup"`.
    Page(String),
    /// A sub-group with its own `pages`.
    Nested(Group),
    /// Anything else (numbers, nulls); ignored.
    Other(Value),
}

/// Deserialize an array, dropping elements that don't match `T` instead of
/// failing the whole array. Non-array values become an empty list.
fn lenient_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    })
}

fn groups_from(items: Vec<Value>) -> Vec<Group> {
    items
        .into_iter()
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect()
}

impl Navigation {
    /// Decode a `navigation` value into one of the two known layouts.
    pub fn from_value(value: &Value) -> Result<Self, NavigationShapeError> {
        match value {
            Value::Array(items) => Ok(Navigation::Groups(groups_from(items.clone()))),
            Value::Object(map) => match map.get("tabs") {
                None => Err(NavigationShapeError::MissingTabs),
                Some(Value::Array(tabs)) => Ok(Navigation::Tabs(
                    tabs.iter()
                        .filter_map(|tab| serde_json::from_value(tab.clone()).ok())
                        .collect(),
                )),
                Some(_) => Err(NavigationShapeError::TabsNotArray),
            },
            _ => Err(NavigationShapeError::UnknownShape),
        }
    }

    /// All groups in declaration order, tabs flattened.
    pub fn groups(&self) -> Vec<&Group> {
        match self {
            Navigation::Groups(groups) => groups.iter().collect(),
            Navigation::Tabs(tabs) => tabs.iter().flat_map(|t| t.groups.iter()).collect(),
        }
    }

    /// Page identifiers referenced by this navigation.
    ///
    /// Nested sub-groups are skipped unless `expand_nested` is set.
    pub fn pages(&self, expand_nested: bool) -> BTreeSet<String> {
        let mut pages = BTreeSet::new();
        for group in self.groups() {
            collect_pages(group, expand_nested, &mut pages);
        }
        pages
    }
}

fn collect_pages(group: &Group, expand_nested: bool, out: &mut BTreeSet<String>) {
    for entry in &group.pages {
        match entry {
            PageEntry::Page(page) => {
                out.insert(page.clone());
            }
            PageEntry::Nested(nested) if expand_nested => collect_pages(nested, true, out),
            PageEntry::Nested(_) | PageEntry::Other(_) => {}
        }
    }
}

impl DocsConfig {
    /// Build a config from already-parsed JSON.
    pub fn from_value(value: Value) -> Result<Self, LoadError> {
        let Value::Object(raw) = value else {
            return Err(LoadError::NotAnObject);
        };
        let navigation = raw.get("navigation").map(Navigation::from_value);
        Ok(Self { raw, navigation })
    }

    pub fn has_key(&self, key: &str) -> bool {
        self.raw.contains_key(key)
    }

    /// The NavPageSet: every page identifier the navigation references.
    ///
    /// Empty when navigation is absent or has an unrecognised shape.
    pub fn nav_pages(&self, expand_nested: bool) -> BTreeSet<String> {
        match &self.navigation {
            Some(Ok(nav)) => nav.pages(expand_nested),
            _ => BTreeSet::new(),
        }
    }
}

/// Read and parse the config file at `path`.
pub fn load_docs_config(path: &Path) -> Result<DocsConfig, LoadError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(LoadError::NotFound(path.to_path_buf()));
        }
        Err(e) => return Err(LoadError::Read(path.to_path_buf(), e)),
    };
    let value: Value = serde_json::from_str(&content)?;
    DocsConfig::from_value(value)
}
