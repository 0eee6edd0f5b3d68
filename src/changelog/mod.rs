//! Changelog parsing and version resolution
//!
//! Turns free-form changelog text into an ordered list of entries and picks
//! the entry to present for an optional requested version.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  raw text   │────▶│  Extractor  │────▶│  Resolver   │
//! │ (document)  │     │  (parse)    │     │ (find/list) │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                            │                   │
//!                            ▼                   ▼
//!                     ┌─────────────┐     ┌─────────────┐
//!                     │   Heading   │     │   Compare   │
//!                     │ (classify)  │     │ (is_newer)  │
//!                     └─────────────┘     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`heading`]: Heading-candidate matcher and version-shape predicate
//! - [`extractor`]: Splits a document into [`ChangelogEntry`] values
//! - [`resolver`]: Entry lookup and version listing
//! - [`compare`]: Version normalization and numeric ordering
//! - [`error`]: Resolution failures
//! - [`types`]: `ChangelogEntry`, `ParsedChangelog`, `Resolution`
//!
//! Entries are kept in document order. Changelogs are assumed to list the
//! newest release first; nothing here sorts or validates that order.

pub mod compare;
pub mod error;
pub mod extractor;
pub mod heading;
pub mod resolver;
pub mod types;

pub use compare::{is_newer, normalize_version};
pub use error::ResolveError;
pub use extractor::{EMPTY_ENTRY_PLACEHOLDER, parse};
pub use heading::{heading_token, is_version_token};
pub use resolver::{find_entry, list_versions};
pub use types::{ChangelogEntry, ParsedChangelog, Resolution};
