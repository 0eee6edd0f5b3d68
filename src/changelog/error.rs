use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("No version entries found")]
    NoEntries,

    #[error("Version {requested} not found. Available: {}", .available.join(", "))]
    VersionNotFound {
        requested: String,
        available: Vec<String>,
    },
}
