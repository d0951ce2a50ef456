//! Changelog document splitting and extraction
//!
//! Operates on Keep-a-Changelog structure: optional header prose, an
//! `## Unreleased` section with `### <Category>` subsections, then
//! `## [X.Y.Z] - <date>` sections ordered newest-first.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::{Category, SectionMap};

/// Matches the Unreleased block: the body after the heading, terminated
/// by the next version heading or end of input.
static UNRELEASED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)## Unreleased\s*\n(.*?)(\n## \[|\z)").expect("Invalid regex"));

/// Matches the document header: everything through the first blank line
/// that directly precedes a version heading.
static HEADER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\A(.*?\n\n)## \[").expect("Invalid regex"));

/// An Unreleased block located within a document.
#[derive(Debug)]
pub struct UnreleasedBlock<'a> {
    /// Text between the Unreleased heading and the next version heading
    pub body: &'a str,
    /// From the next `## [` heading to end of input; empty when none follows
    pub rest: &'a str,
}

/// Check for an `## Unreleased` heading anywhere in the document
pub fn has_unreleased(content: &str) -> bool {
    content.contains("## Unreleased")
}

/// Locate the Unreleased block and the remainder of the document.
///
/// Returns `None` when the document has no Unreleased heading (or the
/// heading is not followed by a newline, which the release workflow
/// never produces).
pub fn split_unreleased(content: &str) -> Option<UnreleasedBlock<'_>> {
    let caps = UNRELEASED_RE.captures(content)?;
    let body = caps.get(1).map_or("", |m| m.as_str());
    let rest = match caps.get(2) {
        // Skip the newline so rest starts at the `## [` heading itself.
        Some(m) if !m.as_str().is_empty() => &content[m.start() + 1..],
        _ => "",
    };
    Some(UnreleasedBlock { body, rest })
}

/// Pull the six canonical subsections out of an Unreleased block body.
///
/// A category is retained only when its captured text contains at least
/// one bullet line. The captured block is trimmed as a whole; interior
/// lines, including nested indentation, are preserved exactly.
pub fn extract_sections(body: &str) -> SectionMap {
    let mut sections = SectionMap::new();
    for category in Category::ALL {
        if let Some(content) = section_content(body, category) {
            sections.insert(category, content);
        }
    }
    sections
}

/// Capture one category's content: the lines between its heading and the
/// next `##`-prefixed heading (or end of block).
fn section_content(body: &str, category: Category) -> Option<String> {
    let mut lines = body.lines();
    lines.find(|line| is_category_heading(line, category))?;

    let captured: Vec<&str> = lines.take_while(|line| !line.starts_with("##")).collect();
    let content = captured.join("\n").trim().to_string();

    if content.lines().any(is_bullet) {
        Some(content)
    } else {
        None
    }
}

fn is_category_heading(line: &str, category: Category) -> bool {
    line.strip_prefix("### ")
        .is_some_and(|rest| rest.trim_end() == category.as_str())
}

fn is_bullet(line: &str) -> bool {
    line.trim_start().starts_with('-')
}

/// Check whether any line in the block is a bullet entry
pub fn block_has_bullets(body: &str) -> bool {
    body.lines().any(is_bullet)
}

/// Split the document header for Unreleased insertion.
///
/// The header is all text up to and including the blank line immediately
/// preceding the first `## [` heading; the remainder starts at that
/// heading. Returns `None` when no version heading anchors the split.
pub fn split_header(content: &str) -> Option<(&str, &str)> {
    let caps = HEADER_RE.captures(content)?;
    let header = caps.get(1)?.as_str();
    Some((header, &content[header.len()..]))
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = "\
## Unreleased

### Added

- New feature A

### Fixed

- Bug fix B

## [0.1.0] - 2025-12-01

### Added

- Initial release
";

    #[test]
    fn test_split_unreleased() {
        let block = split_unreleased(BODY).unwrap();
        assert!(block.body.contains("- New feature A"));
        assert!(block.body.contains("- Bug fix B"));
        assert!(!block.body.contains("0.1.0"));
        assert!(block.rest.starts_with("## [0.1.0] - 2025-12-01"));
    }

    #[test]
    fn test_split_unreleased_without_following_version() {
        let content = "## Unreleased\n\n### Added\n\n- Only change\n";
        let block = split_unreleased(content).unwrap();
        assert!(block.body.contains("- Only change"));
        assert_eq!(block.rest, "");
    }

    #[test]
    fn test_split_unreleased_missing() {
        assert!(split_unreleased("# Changelog\n\n## [1.0.0] - 2025-01-01\n").is_none());
    }

    #[test]
    fn test_extract_sections_retains_bulleted_only() {
        let body = "\
### Added

- New feature A

### Changed

### Fixed

some prose without bullets
";
        let sections = extract_sections(body);
        assert_eq!(sections.names(), vec!["Added"]);
        assert_eq!(sections.get(Category::Added), Some("- New feature A"));
    }

    #[test]
    fn test_extract_sections_preserves_nested_indentation() {
        let body = "\
### Added

- Top-level entry
  - nested detail
    with a wrapped line
";
        let sections = extract_sections(body);
        assert_eq!(
            sections.get(Category::Added),
            Some("- Top-level entry\n  - nested detail\n    with a wrapped line")
        );
    }

    #[test]
    fn test_extract_sections_canonical_order_regardless_of_document_order() {
        let body = "\
### Security

- CVE fix

### Added

- feature
";
        let sections = extract_sections(body);
        assert_eq!(sections.names(), vec!["Added", "Security"]);
    }

    #[test]
    fn test_extract_sections_stops_at_next_heading() {
        let block = split_unreleased(BODY).unwrap();
        let sections = extract_sections(block.body);
        assert_eq!(sections.get(Category::Added), Some("- New feature A"));
        assert_eq!(sections.get(Category::Fixed), Some("- Bug fix B"));
    }

    #[test]
    fn test_block_has_bullets() {
        assert!(block_has_bullets("### Added\n\n- something\n"));
        assert!(block_has_bullets("  - indented bullet\n"));
        assert!(!block_has_bullets("### Added\n\n### Fixed\n\n"));
    }

    #[test]
    fn test_split_header() {
        let content = "# Changelog\n\nIntro prose.\n\n## [1.0.0] - 2025-01-01\n";
        let (header, rest) = split_header(content).unwrap();
        assert_eq!(header, "# Changelog\n\nIntro prose.\n\n");
        assert!(rest.starts_with("## [1.0.0]"));
    }

    #[test]
    fn test_split_header_without_version_heading() {
        assert!(split_header("# Changelog\n\nNo versions here.\n").is_none());
    }
}
