//! Cross-checks between navigation, content files, and links.
//!
//! [`run`] drives the whole validation: load `docs.json`, validate its
//! schema, collect navigation pages and content files, then compare them.
//! Each finding category is computed independently; nothing found in one
//! suppresses another. Only a failure to load `docs.json` stops the run.

use crate::config::LintConfig;
use crate::links::{self, link_target};
use crate::scan::{self, ScanError};
use crate::schema::{self, SchemaViolation};
use crate::site::{self, LoadError};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// The landing page. Never an orphan, always a valid link target.
pub const INDEX_PAGE: &str = "index";

#[derive(Error, Debug)]
pub enum CheckError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Scan(#[from] ScanError),
}

/// An internal link whose target is neither a content file nor a nav page.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct BrokenLink {
    /// Identifier of the file containing the link.
    pub source: String,
    /// The link exactly as written.
    pub link: String,
}

/// A content file whose text could not be read during link scanning.
#[derive(Debug, Clone, PartialEq)]
pub struct UnreadableFile {
    pub source: String,
    pub reason: String,
}

/// Everything found in one run.
#[derive(Debug, Clone, Default)]
pub struct Report {
    pub schema: Vec<SchemaViolation>,
    pub nav_pages: BTreeSet<String>,
    pub content_files: BTreeSet<String>,
    pub missing: Vec<String>,
    pub orphans: Vec<String>,
    pub broken_links: Vec<BrokenLink>,
    pub unreadable: Vec<UnreadableFile>,
}

impl Report {
    /// Whether the run should fail: any schema violation, missing page, or
    /// broken link, plus orphans when `orphans_are_errors` is set.
    pub fn has_errors(&self, config: &LintConfig) -> bool {
        !self.schema.is_empty()
            || !self.missing.is_empty()
            || !self.broken_links.is_empty()
            || (config.orphans_are_errors && !self.orphans.is_empty())
    }
}

/// Path of the navigation config for `root`.
pub fn docs_config_path(root: &Path, config: &LintConfig) -> PathBuf {
    root.join(&config.docs_config)
}

/// Run every check against the project at `root`.
pub fn run(root: &Path, config: &LintConfig) -> Result<Report, CheckError> {
    let docs = site::load_docs_config(&docs_config_path(root, config))?;

    let schema = schema::validate_schema(&docs);
    let nav_pages = docs.nav_pages(config.expand_nested_pages);
    let content_files = scan::find_content_files(root, config)?;

    let missing = missing_pages(&nav_pages, &content_files);
    let orphans = orphan_files(&content_files, &nav_pages);
    let (broken_links, unreadable) = broken_links(root, config, &content_files, &nav_pages);

    Ok(Report {
        schema,
        nav_pages,
        content_files,
        missing,
        orphans,
        broken_links,
        unreadable,
    })
}

/// Navigation pages with no content file on disk.
pub fn missing_pages(nav_pages: &BTreeSet<String>, files: &BTreeSet<String>) -> Vec<String> {
    nav_pages.difference(files).cloned().collect()
}

/// Content files not referenced by navigation. `index` is exempt.
pub fn orphan_files(files: &BTreeSet<String>, nav_pages: &BTreeSet<String>) -> Vec<String> {
    files
        .difference(nav_pages)
        .filter(|id| id.as_str() != INDEX_PAGE)
        .cloned()
        .collect()
}

/// Whether a link, once normalised, points at something known.
///
/// Navigation pages count even when their file is missing, so a page that
/// is already reported as missing doesn't also show up as a broken link.
pub fn resolves(link: &str, files: &BTreeSet<String>, nav_pages: &BTreeSet<String>) -> bool {
    let target = link_target(link);
    files.contains(target) || target == INDEX_PAGE || nav_pages.contains(target)
}

/// Scan every content file for links that don't resolve.
///
/// A file that can't be read is recorded in the second list and skipped;
/// the remaining files are still checked.
pub fn broken_links(
    root: &Path,
    config: &LintConfig,
    files: &BTreeSet<String>,
    nav_pages: &BTreeSet<String>,
) -> (Vec<BrokenLink>, Vec<UnreadableFile>) {
    let mut broken = Vec::new();
    let mut unreadable = Vec::new();

    for id in files {
        let path = scan::content_path(root, id, config);
        if !path.exists() {
            continue;
        }
        let links = match links::extract_links(&path) {
            Ok(links) => links,
            Err(e) => {
                unreadable.push(UnreadableFile {
                    source: id.clone(),
                    reason: e.to_string(),
                });
                continue;
            }
        };
        broken.extend(
            links
                .into_iter()
                .filter(|link| !resolves(link, files, nav_pages))
                .map(|link| BrokenLink {
                    source: id.clone(),
                    link,
                }),
        );
    }

    (broken, unreadable)
}
