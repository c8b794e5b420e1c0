//! Human-readable report output.
//!
//! # Output Format
//!
//! ```text
//! 🔍 Documentation Validator Initiated...
//!
//!
//! 🔍 Validating Schema...
//! ❌ [SCHEMA] Errors detected in docs.json:
//!   - Missing required key: 'favicon'
//! ❌ [MISSING] The following pages are in docs.json but file missing:
//!   - guides/advanced
//!
//! ⚠️ [ORPHAN] The following MDX files found but NOT in docs.json navigation:
//!   - drafts/idea
//!
//! 🔍 Scanning Internal Links...
//! ⚠️ [BROKEN LINKS] Potential broken internal links detected:
//!   - index -> /guides/old#setup
//!
//! 🏁 Validation Complete. (3 errors, 1 warning)
//! ```
//!
//! Every list is printed in sorted order, so an unchanged tree always
//! produces the same bytes.
//!
//! # Architecture
//!
//! Each block has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure: no I/O, no side effects.

use crate::check::{BrokenLink, Report, UnreadableFile};
use crate::config::LintConfig;
use crate::schema::SchemaViolation;
use crate::site::LoadError;

// ============================================================================
// Shared helpers
// ============================================================================

fn bullet(text: impl std::fmt::Display) -> String {
    format!("  - {text}")
}

/// `1 error`, `2 errors`.
fn count(n: usize, noun: &str) -> String {
    if n == 1 {
        format!("{n} {noun}")
    } else {
        format!("{n} {noun}s")
    }
}

/// Label for content files in headings, e.g. `MDX`.
fn file_kind(config: &LintConfig) -> String {
    config.extension.to_uppercase()
}

// ============================================================================
// Blocks
// ============================================================================

pub fn format_banner() -> Vec<String> {
    vec![
        "🔍 Documentation Validator Initiated...".to_string(),
        String::new(),
    ]
}

pub fn format_load_error(err: &LoadError, config: &LintConfig) -> Vec<String> {
    let name = &config.docs_config;
    let line = match err {
        LoadError::NotFound(_) | LoadError::Read(..) => format!("❌ Error: {err}"),
        LoadError::Parse(_) | LoadError::NotAnObject => format!("❌ Error parsing {name}: {err}"),
    };
    vec![line]
}

pub fn format_schema(violations: &[SchemaViolation], config: &LintConfig) -> Vec<String> {
    let name = &config.docs_config;
    let mut lines = vec![String::new(), "🔍 Validating Schema...".to_string()];
    if violations.is_empty() {
        lines.push(format!("✅ [SCHEMA] {name} schema appears valid."));
    } else {
        lines.push(format!("❌ [SCHEMA] Errors detected in {name}:"));
        lines.extend(violations.iter().map(bullet));
    }
    lines
}

pub fn format_missing(missing: &[String], config: &LintConfig) -> Vec<String> {
    let name = &config.docs_config;
    if missing.is_empty() {
        return vec![format!("✅ [NAV] All {name} pages exist on disk.")];
    }
    let mut lines = vec![format!(
        "❌ [MISSING] The following pages are in {name} but file missing:"
    )];
    lines.extend(missing.iter().map(bullet));
    lines
}

pub fn format_orphans(orphans: &[String], config: &LintConfig) -> Vec<String> {
    let kind = file_kind(config);
    if orphans.is_empty() {
        return vec![format!("✅ [CLEAN] No orphan {kind} files found.")];
    }
    let mut lines = vec![
        String::new(),
        format!(
            "⚠️ [ORPHAN] The following {kind} files found but NOT in {} navigation:",
            config.docs_config
        ),
    ];
    lines.extend(orphans.iter().map(bullet));
    lines
}

pub fn format_links(broken: &[BrokenLink], unreadable: &[UnreadableFile]) -> Vec<String> {
    let mut lines = vec![String::new(), "🔍 Scanning Internal Links...".to_string()];

    if !unreadable.is_empty() {
        lines.push("⚠️ [UNREADABLE] These files could not be read and were skipped:".to_string());
        lines.extend(
            unreadable
                .iter()
                .map(|f| bullet(format!("{}: {}", f.source, f.reason))),
        );
    }

    if broken.is_empty() {
        lines.push(
            "✅ [LINKS] No broken internal link paths detected (AbsolutePath Check).".to_string(),
        );
    } else {
        lines.push("⚠️ [BROKEN LINKS] Potential broken internal links detected:".to_string());
        lines.extend(
            broken
                .iter()
                .map(|b| bullet(format!("{} -> {}", b.source, b.link))),
        );
    }
    lines
}

pub fn format_summary(report: &Report, config: &LintConfig) -> Vec<String> {
    let mut errors = report.schema.len() + report.missing.len() + report.broken_links.len();
    let mut warnings = report.unreadable.len();
    if config.orphans_are_errors {
        errors += report.orphans.len();
    } else {
        warnings += report.orphans.len();
    }

    let line = if errors == 0 && warnings == 0 {
        "🏁 Validation Complete.".to_string()
    } else {
        format!(
            "🏁 Validation Complete. ({}, {})",
            count(errors, "error"),
            count(warnings, "warning")
        )
    };
    vec![String::new(), line]
}

/// The full report, banner through summary.
pub fn format_report(report: &Report, config: &LintConfig) -> Vec<String> {
    let mut lines = format_banner();
    lines.extend(format_schema(&report.schema, config));
    lines.extend(format_missing(&report.missing, config));
    lines.extend(format_orphans(&report.orphans, config));
    lines.extend(format_links(&report.broken_links, &report.unreadable));
    lines.extend(format_summary(report, config));
    lines
}

/// Navigation pages and content files, one identifier per line.
pub fn format_pages(report: &Report) -> Vec<String> {
    let mut lines = vec![format!("Navigation pages ({})", report.nav_pages.len())];
    lines.extend(report.nav_pages.iter().map(|p| format!("    {p}")));
    lines.push(String::new());
    lines.push(format!("Content files ({})", report.content_files.len()));
    lines.extend(report.content_files.iter().map(|f| format!("    {f}")));
    lines
}

// ============================================================================
// Printing
// ============================================================================

fn print_lines(lines: Vec<String>) {
    for line in lines {
        println!("{}", line);
    }
}

pub fn print_banner() {
    print_lines(format_banner());
}

pub fn print_report(report: &Report, config: &LintConfig) {
    print_lines(format_report(report, config));
}

pub fn print_load_error(err: &LoadError, config: &LintConfig) {
    print_lines(format_load_error(err, config));
}

pub fn print_schema(violations: &[SchemaViolation], config: &LintConfig) {
    print_lines(format_schema(violations, config));
}

pub fn print_pages(report: &Report) {
    print_lines(format_pages(report));
}

// ============================================================================
// Tests
// ============================================================================
