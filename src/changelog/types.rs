//! Common types for parsed changelogs

use serde::Serialize;

/// One version heading and the body text below it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangelogEntry {
    /// Heading token as written in the document (a leading `v` is kept)
    pub version: String,
    /// Body text, or [`EMPTY_ENTRY_PLACEHOLDER`](crate::changelog::EMPTY_ENTRY_PLACEHOLDER)
    pub content: String,
}

impl ChangelogEntry {
    pub fn new(version: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            content: content.into(),
        }
    }
}

/// Entries in document order, newest first by convention
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedChangelog {
    entries: Vec<ChangelogEntry>,
}

impl ParsedChangelog {
    pub fn new(entries: Vec<ChangelogEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[ChangelogEntry] {
        &self.entries
    }

    /// First entry in the document, treated as the latest release
    pub fn latest(&self) -> Option<&ChangelogEntry> {
        self.entries.first()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// A successfully selected entry with a human-readable message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub entry: ChangelogEntry,
    pub message: String,
}
