//! Logbook - CHANGELOG management for the release workflow
//!
//! This crate provides Keep-a-Changelog document parsing, rewriting,
//! and release-note extraction.

pub mod document;
pub mod error;
pub mod render;
pub mod types;
pub mod workflow;

pub use error::{ChangelogError, Result};
pub use types::{Category, SectionMap, ValidationReport};
pub use workflow::{extract_notes, finalize, prepare, reset, validate};
