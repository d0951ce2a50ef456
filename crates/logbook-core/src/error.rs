//! Error types for logbook

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using ChangelogError
pub type Result<T> = std::result::Result<T, ChangelogError>;

/// Failures raised by changelog operations
#[derive(Debug, Error)]
pub enum ChangelogError {
    /// Target changelog file does not exist
    #[error("CHANGELOG not found: {0}")]
    FileNotFound(PathBuf),

    /// Version string does not match MAJOR.MINOR.PATCH
    #[error("Invalid semantic version: {0}")]
    InvalidVersion(String),

    /// Date string does not match YYYY-MM-DD
    #[error("Invalid date format: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    /// No Unreleased heading where one is required
    #[error("No '## Unreleased' section found in CHANGELOG")]
    MissingUnreleased,

    /// Unreleased heading still present when reset expects none
    #[error(
        "Unreleased section already exists in CHANGELOG; \
         reset should only be used after merging a release, \
         when the Unreleased section has been removed"
    )]
    UnreleasedExists,

    /// Expected TBD version heading is absent
    #[error("Version section '## [{0}] - TBD' not found in CHANGELOG")]
    SectionNotFound(String),

    /// No version heading to anchor the Unreleased insertion
    #[error("Could not find appropriate location for Unreleased section")]
    NoInsertionPoint,

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
