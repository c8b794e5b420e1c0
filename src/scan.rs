//! Content file discovery.
//!
//! Walks the project root and turns every content file into a page
//! identifier: its path relative to the root, extension stripped, joined
//! with `/` on every platform.
//!
//! ```text
//! root/
//! ├── index.mdx                 → "index"
//! ├── guides/setup.mdx          → "guides/setup"
//! ├── node_modules/pkg/x.mdx    → (skipped: excluded directory)
//! └── logo.svg                  → (skipped: not a content file)
//! ```
//!
//! Excluded directories are matched on whole path components below the
//! root, so `node_modules_docs/` is still scanned.

use crate::config::LintConfig;
use std::collections::BTreeSet;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;
use walkdir::{DirEntry, WalkDir};

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("cannot walk {}: {source}", root.display())]
    Walk {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

/// Collect the identifiers of every content file under `root`.
pub fn find_content_files(root: &Path, config: &LintConfig) -> Result<BTreeSet<String>, ScanError> {
    let suffix = config.dotted_extension();
    let mut files = BTreeSet::new();

    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !is_excluded_dir(e, &config.exclude_dirs));

    for entry in walker {
        let entry = entry.map_err(|source| ScanError::Walk {
            root: root.to_path_buf(),
            source,
        })?;
        if is_directory(&entry) {
            continue;
        }
        if !entry.file_name().to_string_lossy().ends_with(&suffix) {
            continue;
        }
        if let Some(id) = page_identifier(root, entry.path(), &suffix) {
            files.insert(id);
        }
    }

    Ok(files)
}

fn is_excluded_dir(entry: &DirEntry, exclude: &[String]) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && exclude
            .iter()
            .any(|name| entry.file_name().to_string_lossy() == name.as_str())
}

/// Directories, and symlinks to directories, are never content files.
/// Symlinks to files (even dangling ones) are kept.
fn is_directory(entry: &DirEntry) -> bool {
    entry.file_type().is_dir() || (entry.path_is_symlink() && entry.path().is_dir())
}

/// Relative, `/`-joined, extension-stripped identifier for `path`.
///
/// Returns `None` if `path` is not under `root`.
pub fn page_identifier(root: &Path, path: &Path, suffix: &str) -> Option<String> {
    let rel = path.strip_prefix(root).ok()?;
    let mut parts: Vec<String> = rel
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().to_string()),
            _ => None,
        })
        .collect();
    if let Some(name) = parts.last_mut() {
        *name = strip_extension(name, suffix).to_string();
    }
    Some(parts.join("/"))
}

/// Remove `suffix` from a file name. Leading dots belong to the stem, so
/// `.mdx` and `..mdx` keep their full name.
fn strip_extension<'a>(name: &'a str, suffix: &str) -> &'a str {
    let stem_start = name.len() - name.trim_start_matches('.').len();
    match name.strip_suffix(suffix) {
        Some(stem) if stem.len() > stem_start => stem,
        _ => name,
    }
}

/// On-disk location of the content file behind identifier `id`.
///
/// Dot-only names such as `.mdx` were never stripped, so they map back to
/// themselves.
pub fn content_path(root: &Path, id: &str, config: &LintConfig) -> PathBuf {
    let suffix = config.dotted_extension();
    let mut path = root.to_path_buf();
    for part in id.split('/') {
        path.push(part);
    }
    let last = id.rsplit('/').next().unwrap_or(id);
    if last.ends_with(&suffix) && strip_extension(last, &suffix) == last {
        return path;
    }
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(suffix);
    path.set_file_name(name);
    path
}
