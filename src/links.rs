//! Markdown link extraction.
//!
//! Links are found with a plain `[label](target)` pattern over the raw file
//! text; no MDX parsing happens. Both label and target are matched lazily
//! and never span a line break.

use regex::Regex;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::LazyLock;

static LINK_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[.*?\]\((.*?)\)").expect("link pattern is valid"));

/// Targets with these prefixes are external or same-page and never checked.
const SKIPPED_PREFIXES: &[&str] = &["http", "https", "mailto", "#"];

/// Internal link targets in `content`, in order of appearance, duplicates kept.
pub fn extract_links_from(content: &str) -> Vec<String> {
    LINK_PATTERN
        .captures_iter(content)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .filter(|target| !is_skipped(target))
        .map(str::to_string)
        .collect()
}

/// Read `path` and return its internal link targets.
///
/// The whole file is read at once; a file that is missing or not valid
/// UTF-8 is an error.
pub fn extract_links(path: &Path) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(extract_links_from(&content))
}

fn is_skipped(target: &str) -> bool {
    SKIPPED_PREFIXES.iter().any(|p| target.starts_with(p))
}

/// The page identifier a link points at: fragment dropped, then a single
/// leading `/` removed.
///
/// `/guides/setup#install` → `guides/setup`
pub fn link_target(link: &str) -> &str {
    let path = link.split('#').next().unwrap_or_default();
    path.strip_prefix('/').unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn extracts_targets_in_order() {
        let content = "See [setup](/guides/setup) and [API](api/intro).\n[again](/guides/setup)";
        assert_eq!(
            extract_links_from(content),
            vec!["/guides/setup", "api/intro", "/guides/setup"]
        );
    }

    #[test]
    fn skips_external_and_fragment_links() {
        let content = "[a](https://example.com) [b](http://x) [c](mailto:me@example.com) \
                       [d](#section) [e](/real)";
        assert_eq!(extract_links_from(content), vec!["/real"]);
    }

    #[test]
    fn prefix_match_is_literal() {
        // Anything starting with "http" is treated as external.
        assert!(extract_links_from("[x](httpbin)").is_empty());
        assert_eq!(extract_links_from("[x](guides/http)"), vec!["guides/http"]);
    }

    #[test]
    fn keeps_fragments_on_page_links() {
        assert_eq!(
            extract_links_from("[x](/page#anchor)"),
            vec!["/page#anchor"]
        );
    }

    #[test]
    fn lazy_matching_splits_adjacent_links() {
        assert_eq!(extract_links_from("[a](one)[b](two)"), vec!["one", "two"]);
    }

    #[test]
    fn images_are_links_too() {
        assert_eq!(
            extract_links_from("![diagram](/images/flow.png)"),
            vec!["/images/flow.png"]
        );
    }

    #[test]
    fn empty_target_is_kept() {
        assert_eq!(extract_links_from("[todo]()"), vec![""]);
    }

    #[test]
    fn link_does_not_span_lines() {
        assert!(extract_links_from("[label\n](target)").is_empty());
        assert!(extract_links_from("[label](tar\nget)").is_empty());
    }

    #[test]
    fn no_links() {
        assert!(extract_links_from("plain text, [brackets] and (parens)").is_empty());
    }

    #[test]
    fn reads_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("page.mdx");
        fs::write(&path, "# Title\n\n[next](/next)\n").unwrap();
        assert_eq!(extract_links(&path).unwrap(), vec!["/next"]);
    }

    #[test]
    fn invalid_utf8_is_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("page.mdx");
        fs::write(&path, [0x5b, 0x61, 0x5d, 0xff, 0xfe]).unwrap();
        assert!(extract_links(&path).is_err());
    }

    #[test]
    fn link_target_normalisation() {
        assert_eq!(link_target("/guides/setup#install"), "guides/setup");
        assert_eq!(link_target("guides/setup"), "guides/setup");
        assert_eq!(link_target("//double"), "/double");
        assert_eq!(link_target("/"), "");
        assert_eq!(link_target("a#b#c"), "a");
    }
}
