//! Changelog document types

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the six canonical Keep-a-Changelog subsection names.
///
/// Variant order is the canonical emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    /// New functionality
    Added,
    /// Changes to existing functionality
    Changed,
    /// Soon-to-be-removed functionality
    Deprecated,
    /// Removed functionality
    Removed,
    /// Bug fixes
    Fixed,
    /// Vulnerability fixes
    Security,
}

impl Category {
    /// All categories in canonical order.
    pub const ALL: [Category; 6] = [
        Category::Added,
        Category::Changed,
        Category::Deprecated,
        Category::Removed,
        Category::Fixed,
        Category::Security,
    ];

    /// Get the subsection heading name for this category
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Added => "Added",
            Self::Changed => "Changed",
            Self::Deprecated => "Deprecated",
            Self::Removed => "Removed",
            Self::Fixed => "Fixed",
            Self::Security => "Security",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "Added" => Ok(Self::Added),
            "Changed" => Ok(Self::Changed),
            "Deprecated" => Ok(Self::Deprecated),
            "Removed" => Ok(Self::Removed),
            "Fixed" => Ok(Self::Fixed),
            "Security" => Ok(Self::Security),
            _ => Err(()),
        }
    }
}

/// Unreleased content keyed by category.
///
/// Entries are kept sorted in canonical category order regardless of
/// insertion order, so rendering never has to re-sort.
#[derive(Debug, Clone, Default)]
pub struct SectionMap {
    entries: Vec<(Category, String)>,
}

impl SectionMap {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the content for a category
    pub fn insert(&mut self, category: Category, content: impl Into<String>) {
        let content = content.into();
        if let Some((_, existing)) = self.entries.iter_mut().find(|(c, _)| *c == category) {
            *existing = content;
            return;
        }
        let idx = self
            .entries
            .iter()
            .position(|(c, _)| *c > category)
            .unwrap_or(self.entries.len());
        self.entries.insert(idx, (category, content));
    }

    /// Get the content for a category
    pub fn get(&self, category: Category) -> Option<&str> {
        self.entries
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, content)| content.as_str())
    }

    /// Check whether a category is present
    pub fn contains(&self, category: Category) -> bool {
        self.get(category).is_some()
    }

    /// Number of categories with content
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no category has content
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (Category, &str)> {
        self.entries.iter().map(|(c, content)| (*c, content.as_str()))
    }

    /// Heading names of the retained categories, in canonical order
    pub fn names(&self) -> Vec<&'static str> {
        self.entries.iter().map(|(c, _)| c.as_str()).collect()
    }
}

/// Result of checking a document for releasable Unreleased content
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ValidationReport {
    /// An `## Unreleased` heading is present
    pub has_section: bool,
    /// The Unreleased block contains at least one bullet entry
    pub has_content: bool,
}

impl ValidationReport {
    /// True when the document is ready to release
    pub fn is_releasable(&self) -> bool {
        self.has_section && self.has_content
    }
}
