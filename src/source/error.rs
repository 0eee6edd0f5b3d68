use std::path::PathBuf;

use thiserror::Error;

use crate::changelog::ResolveError;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Changelog not found: {0}")]
    NotFound(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

#[derive(Debug, Error)]
pub enum SelectError {
    #[error(
        "Version {requested} is newer than installed {installed}, and the remote changelog is unavailable: {reason}"
    )]
    RemoteUnavailable {
        requested: String,
        installed: String,
        reason: String,
    },

    #[error("Changelog unavailable: {}", .reasons.join("; "))]
    SourceUnavailable { reasons: Vec<String> },

    #[error(transparent)]
    Resolve(#[from] ResolveError),
}
