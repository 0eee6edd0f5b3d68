//! Entry lookup over a parsed changelog

use tracing::debug;

use crate::changelog::compare::normalize_version;
use crate::changelog::error::ResolveError;
use crate::changelog::types::{ChangelogEntry, ParsedChangelog, Resolution};

/// Select the entry to present for an optional requested version.
///
/// - `None` selects the first entry (the latest release)
/// - `Some(version)` selects the first entry whose version matches, with or
///   without a leading `v` on either side
pub fn find_entry(
    parsed: &ParsedChangelog,
    requested: Option<&str>,
) -> Result<Resolution, ResolveError> {
    let Some(latest) = parsed.latest() else {
        return Err(ResolveError::NoEntries);
    };

    let Some(requested) = requested else {
        return Ok(Resolution {
            entry: latest.clone(),
            message: format!("Latest changelog entry: {}", latest.version),
        });
    };

    match parsed
        .entries()
        .iter()
        .find(|entry| version_matches(&entry.version, requested))
    {
        Some(entry) => Ok(Resolution {
            entry: entry.clone(),
            message: format!("Found changelog for version {}", entry.version),
        }),
        None => {
            debug!("Version {} not present in changelog", requested);
            Err(ResolveError::VersionNotFound {
                requested: requested.to_string(),
                available: versions_of(parsed.entries()),
            })
        }
    }
}

/// All versions in document order.
pub fn list_versions(parsed: &ParsedChangelog) -> Result<Vec<String>, ResolveError> {
    if parsed.is_empty() {
        return Err(ResolveError::NoEntries);
    }
    Ok(versions_of(parsed.entries()))
}

/// Documents mix `v1.0.0` and `1.0.0` freely, so compare every spelling.
fn version_matches(candidate: &str, requested: &str) -> bool {
    let normalized_requested = normalize_version(requested);

    candidate == requested
        || candidate == format!("v{normalized_requested}")
        || normalize_version(candidate) == normalized_requested
}

fn versions_of(entries: &[ChangelogEntry]) -> Vec<String> {
    entries.iter().map(|entry| entry.version.clone()).collect()
}
