//! Release-cycle operations over a changelog file
//!
//! Each operation performs one whole-file read and, when mutating, one
//! whole-file write. The cycle is: `prepare` moves Unreleased content
//! into a `## [<version>] - TBD` section, `finalize` stamps the release
//! date, and `reset` recreates empty Unreleased scaffolding once the
//! release has been merged back. Calls out of sequence fail explicitly
//! instead of silently rewriting the document.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, info, instrument, warn};

use crate::document;
use crate::error::{ChangelogError, Result};
use crate::render;
use crate::types::{SectionMap, ValidationReport};

static VERSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\d+\.\d+$").expect("Invalid regex"));

static DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("Invalid regex"));

/// Matches the start of any version heading line
static NEXT_VERSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^## \[").expect("Invalid regex"));

/// Check a MAJOR.MINOR.PATCH version string.
///
/// Pre-release and build metadata are not supported.
pub fn validate_version(version: &str) -> Result<()> {
    if VERSION_RE.is_match(version) {
        Ok(())
    } else {
        Err(ChangelogError::InvalidVersion(version.to_string()))
    }
}

/// Check a YYYY-MM-DD date string
pub fn validate_date(date: &str) -> Result<()> {
    if DATE_RE.is_match(date) {
        Ok(())
    } else {
        Err(ChangelogError::InvalidDate(date.to_string()))
    }
}

fn read_changelog(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(ChangelogError::FileNotFound(PathBuf::from(path)));
    }
    Ok(fs::read_to_string(path)?)
}

/// Move Unreleased content into a new `## [<version>] - TBD` section.
///
/// The document is rewritten as boilerplate header, the new version
/// section with its retained categories in canonical order, then the
/// prior releases verbatim. No Unreleased section remains; `reset`
/// recreates one after the release branch is merged back.
///
/// Returns the categories that carried content, for reporting. An empty
/// Unreleased section is a warning, not an error.
#[instrument(skip(path), fields(path = %path.display()))]
pub fn prepare(version: &str, path: &Path) -> Result<SectionMap> {
    validate_version(version)?;
    let content = read_changelog(path)?;

    let block = document::split_unreleased(&content).ok_or(ChangelogError::MissingUnreleased)?;
    let sections = document::extract_sections(block.body);
    if sections.is_empty() {
        warn!("no content found in Unreleased section");
    }

    fs::write(path, render::render_release(version, &sections, block.rest))?;

    info!(version, moved = sections.len(), "changelog prepared for release");
    Ok(sections)
}

/// Report whether the document has an Unreleased section and whether
/// that section contains any bullet entries.
///
/// Read-only; never fails on malformed structure, only on a missing
/// file.
#[instrument(skip(path), fields(path = %path.display()))]
pub fn validate(path: &Path) -> Result<ValidationReport> {
    let content = read_changelog(path)?;

    let has_section = document::has_unreleased(&content);
    let has_content = has_section
        && document::split_unreleased(&content)
            .is_some_and(|block| document::block_has_bullets(block.body));

    debug!(has_section, has_content, "changelog validated");
    Ok(ValidationReport {
        has_section,
        has_content,
    })
}

/// Insert fresh empty Unreleased scaffolding between the document
/// header and the first version heading.
///
/// Fails when an Unreleased section is still present (the release has
/// not been merged away yet) or when no version heading anchors the
/// insertion point.
#[instrument(skip(path), fields(path = %path.display()))]
pub fn reset(path: &Path) -> Result<()> {
    let content = read_changelog(path)?;

    if document::has_unreleased(&content) {
        return Err(ChangelogError::UnreleasedExists);
    }

    let (header, rest) =
        document::split_header(&content).ok_or(ChangelogError::NoInsertionPoint)?;
    fs::write(
        path,
        format!("{}{}{}", header, render::fresh_unreleased(), rest),
    )?;

    info!("fresh Unreleased section inserted");
    Ok(())
}

/// Replace the TBD placeholder for `version` with the release date.
///
/// An already-finalized version and a never-prepared version surface
/// identically: the exact `## [<version>] - TBD` heading is absent.
/// Every other byte of the document is left untouched.
#[instrument(skip(path), fields(path = %path.display()))]
pub fn finalize(version: &str, date: &str, path: &Path) -> Result<()> {
    validate_version(version)?;
    validate_date(date)?;
    let content = read_changelog(path)?;

    let placeholder = format!("## [{}] - TBD", version);
    if !content.contains(&placeholder) {
        return Err(ChangelogError::SectionNotFound(version.to_string()));
    }

    let stamped = format!("## [{}] - {}", version, date);
    fs::write(path, content.replace(&placeholder, &stamped))?;

    info!(version, date, "release date stamped");
    Ok(())
}

/// Return the body of the `## [<version>]` section, trimmed.
///
/// The heading's date suffix is ignored, so TBD-pending and dated
/// sections match alike. An absent version yields an empty string, not
/// an error. Read-only.
#[instrument(skip(path), fields(path = %path.display()))]
pub fn extract_notes(version: &str, path: &Path) -> Result<String> {
    validate_version(version)?;
    let content = read_changelog(path)?;

    let heading = Regex::new(&format!(
        r"(?m)^## \[{}\][^\n]*\n",
        regex::escape(version)
    ))
    .expect("Invalid regex");

    let Some(found) = heading.find(&content) else {
        debug!(version, "version section not found");
        return Ok(String::new());
    };

    let body = &content[found.end()..];
    let notes = match NEXT_VERSION_RE.find(body) {
        Some(next) => &body[..next.start()],
        None => body,
    };

    debug!(version, notes_len = notes.len(), "release notes extracted");
    Ok(notes.trim().to_string())
}
