//! Local changelog file source

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::source::error::SourceError;
use crate::source::traits::DocumentSource;

/// Reads the changelog shipped with the installed package
pub struct LocalFileSource {
    path: PathBuf,
}

impl LocalFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait::async_trait]
impl DocumentSource for LocalFileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch(&self) -> Result<String, SourceError> {
        debug!("Reading changelog from {:?}", self.path);

        tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => SourceError::NotFound(self.describe()),
                _ => SourceError::Io {
                    path: self.path.clone(),
                    source: e,
                },
            })
    }
}
