//! Changelog entry extraction
//!
//! Scans a document for version headings and collects the text between
//! consecutive headings. Non-version headings (`## Added`, `# Changelog`)
//! stay part of the surrounding entry body.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::changelog::heading::version_heading;
use crate::changelog::types::{ChangelogEntry, ParsedChangelog};

/// Stored in place of a body that is empty or trivially short
pub const EMPTY_ENTRY_PLACEHOLDER: &str = "No changelog details recorded for this version.";

/// Bodies whose raw span is shorter than this many characters count as empty
const MIN_CONTENT_CHARS: usize = 10;

/// Lines made only of `-`, `=`, `*` or `#` (horizontal rules, underlines)
static DECORATION_LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]*[-=*#]+[ \t]*$").expect("decoration pattern is valid")
});

/// Parse a changelog document into entries, in document order.
///
/// Never fails: a document without version headings yields an empty list.
pub fn parse(document: &str) -> ParsedChangelog {
    let lines: Vec<&str> = document.lines().collect();

    let headings: Vec<(usize, &str)> = lines
        .iter()
        .enumerate()
        .filter_map(|(index, line)| version_heading(line).map(|version| (index, version)))
        .collect();

    let entries: Vec<ChangelogEntry> = headings
        .iter()
        .enumerate()
        .map(|(position, &(line_index, version))| {
            let end = headings
                .get(position + 1)
                .map(|&(next_index, _)| next_index)
                .unwrap_or(lines.len());
            let body = lines[line_index + 1..end].join("\n");
            ChangelogEntry::new(version, entry_content(&body))
        })
        .collect();

    debug!("Extracted {} changelog entries", entries.len());
    ParsedChangelog::new(entries)
}

/// Decide the stored content for one heading's body span.
///
/// Decoration stripping only decides emptiness. When the body has substance
/// the trimmed original text is kept, separators included.
fn entry_content(body: &str) -> String {
    let trimmed = body.trim();
    let stripped = DECORATION_LINE_RE.replace_all(trimmed, "");

    if stripped.trim().is_empty() || body.chars().count() < MIN_CONTENT_CHARS {
        EMPTY_ENTRY_PLACEHOLDER.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn parse_splits_entries_at_version_headings() {
        let parsed = parse("## 1.0.0\nFixed bug\n\n## 0.9.0\nInitial release");

        assert_eq!(
            parsed.entries(),
            &[
                ChangelogEntry::new("1.0.0", "Fixed bug"),
                ChangelogEntry::new("0.9.0", "Initial release"),
            ]
        );
    }

    #[test]
    fn parse_keeps_non_version_headings_in_body() {
        let document = "\
# Changelog

## [1.1.0] - 2024-03-01

### Added
- Support for bracketed headings

### Fixed
- Crash on empty input

## [1.0.0] - 2024-01-01

### Added
- First public release
";
        let parsed = parse(document);

        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed.entries()[0].version, "1.1.0");
        assert_eq!(
            parsed.entries()[0].content,
            "### Added\n- Support for bracketed headings\n\n### Fixed\n- Crash on empty input"
        );
        assert_eq!(
            parsed.entries()[1].content,
            "### Added\n- First public release"
        );
    }

    #[test]
    fn parse_preserves_leading_v() {
        let parsed = parse("# v2.0.0\nBreaking changes everywhere\n# 1.9.0\nLast of the 1.x line");

        assert_eq!(parsed.entries()[0].version, "v2.0.0");
        assert_eq!(parsed.entries()[1].version, "1.9.0");
    }

    #[rstest]
    #[case("")]
    #[case("just some text\nwithout headings")]
    #[case("# Changelog\n## Unreleased\n- pending work")]
    #[case("## version 1.0.0\nheading token is not a version")]
    fn parse_returns_empty_without_version_headings(#[case] document: &str) {
        assert!(parse(document).is_empty());
    }

    #[rstest]
    #[case("## 1.0.0\n---\n---\n## 0.9.0\nInitial release")]
    #[case("## 1.0.0\n\n===\n***\n###\n\n## 0.9.0\nInitial release")]
    #[case("## 1.0.0\n## 0.9.0\nInitial release")]
    #[case("## 1.0.0\nFix\n## 0.9.0\nInitial release")]
    fn parse_uses_placeholder_for_empty_bodies(#[case] document: &str) {
        let parsed = parse(document);

        assert_eq!(parsed.entries()[0].content, EMPTY_ENTRY_PLACEHOLDER);
        assert_eq!(parsed.entries()[1].content, "Initial release");
    }

    #[test]
    fn parse_stores_decorated_body_unstripped() {
        let parsed = parse("## 1.0.0\n\nNew parser\n----------\nFaster startup\n");

        assert_eq!(
            parsed.entries()[0].content,
            "New parser\n----------\nFaster startup"
        );
    }

    #[test]
    fn parse_handles_crlf_line_endings() {
        let parsed = parse("## 1.0.0\r\nFixed a long standing bug\r\n## 0.9.0\r\nInitial release\r\n");

        assert_eq!(parsed.entries()[0].content, "Fixed a long standing bug");
        assert_eq!(parsed.entries()[1].content, "Initial release");
    }

    #[test]
    fn parse_is_idempotent() {
        let document = "## 2.0.0\nRewrite\n\n## 1.0.0\nInitial release";
        assert_eq!(parse(document), parse(document));
    }
}
