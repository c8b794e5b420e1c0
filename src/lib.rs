//! # docs-lint
//!
//! Structural consistency checks for a documentation site driven by a
//! `docs.json` navigation file and a tree of `.mdx` pages. Meant to run as a
//! pre-commit hook or CI step.
//!
//! # Pipeline
//!
//! One synchronous pass over the project root:
//!
//! ```text
//! 1. Load      docs.json        →  DocsConfig          (abort on missing/invalid file)
//! 2. Schema    DocsConfig       →  Vec<SchemaViolation>
//! 3. Nav       DocsConfig       →  nav page set
//! 4. Scan      project root     →  content file set
//! 5. Check     both sets + files →  missing / orphans / broken links
//! ```
//!
//! Steps 3 and 4 are independent. Every finding category in step 5 is
//! computed regardless of what the others found.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`site`] | Loads `docs.json`; decodes navigation into [`site::Navigation`]; extracts nav pages |
//! | [`schema`] | Required keys, theme name, navigation shape |
//! | [`scan`] | Walks the root for content files, skipping excluded directories |
//! | [`links`] | `[label](target)` extraction and target normalisation |
//! | [`check`] | Set comparisons, link resolution, and the [`check::run`] entry point |
//! | [`config`] | Optional `docs-lint.toml` settings |
//! | [`output`] | Text report formatting |
//!
//! # Page Identifiers
//!
//! Files and navigation entries are matched on a normalised identifier: the
//! path relative to the root, extension removed, `/`-separated. No other
//! path resolution takes place; `./intro` and `intro` are different
//! identifiers.
//!
//! # Nested Navigation
//!
//! A group's `pages` may contain another group. Those nested pages are not
//! expanded unless `expand_nested_pages = true` is set in `docs-lint.toml`,
//! so by default their files show up as orphans.

pub mod check;
pub mod config;
pub mod links;
pub mod output;
pub mod scan;
pub mod schema;
pub mod site;

#[cfg(test)]
pub(crate) mod test_helpers;
