//! Shared test utilities for the docs-lint test suite.
//!
//! Builds throwaway documentation sites in temp directories so each test
//! gets an isolated tree it can mutate.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let site = write_site(LEGACY_DOCS_JSON, &[
//!     ("index.mdx", "[intro](/intro)"),
//!     ("intro.mdx", "# Intro"),
//! ]);
//! let report = run(site.path(), &LintConfig::default()).unwrap();
//! assert!(report.broken_links.is_empty());
//! ```

use std::path::Path;
use tempfile::TempDir;

/// A schema-valid `docs.json` in the legacy groups form listing `index` and `intro`.
pub const LEGACY_DOCS_JSON: &str = r##"{
  "name": "Acme Docs",
  "logo": {"light": "/logo/light.svg", "dark": "/logo/dark.svg"},
  "favicon": "/favicon.svg",
  "colors": {"primary": "#0D9373"},
  "theme": "mint",
  "navigation": [
    {"group": "Getting Started", "pages": ["index", "intro"]}
  ]
}"##;

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/site/` to a temp directory and return it.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/site");
    copy_dir_recursive(&fixtures, tmp.path()).unwrap();
    tmp
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            std::fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

// =========================================================================
// Ad-hoc sites
// =========================================================================

/// Write `content` to `root/rel`, creating parent directories.
pub fn write_file(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, content).unwrap();
}

/// A temp site holding only the given `(path, content)` files.
pub fn write_site_files(files: &[(&str, &str)]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for (rel, content) in files {
        write_file(tmp.path(), rel, content);
    }
    tmp
}

/// A temp site with `docs.json` set to `docs_json` plus the given files.
pub fn write_site(docs_json: &str, files: &[(&str, &str)]) -> TempDir {
    let tmp = write_site_files(files);
    write_file(tmp.path(), "docs.json", docs_json);
    tmp
}
