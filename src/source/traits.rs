//! Document source trait for loading changelog text

#[cfg(test)]
use mockall::automock;

use crate::source::error::SourceError;

/// Trait for loading the raw text of a changelog document
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait DocumentSource: Send + Sync {
    /// Human-readable location, used in logs and failure messages
    fn describe(&self) -> String;

    /// Loads the whole document as text
    async fn fetch(&self) -> Result<String, SourceError>;
}
