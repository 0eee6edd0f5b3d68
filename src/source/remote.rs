//! Remote changelog source over HTTP

use std::time::Duration;

use tracing::{debug, warn};

use crate::source::error::SourceError;
use crate::source::traits::DocumentSource;

/// Fetches the published changelog, typically a raw file URL
pub struct RemoteSource {
    client: reqwest::Client,
    url: String,
}

impl RemoteSource {
    /// Creates a RemoteSource whose requests give up after `timeout`
    pub fn new(url: &str, timeout: Duration) -> Result<Self, SourceError> {
        let client = reqwest::Client::builder()
            .user_agent("changelog-resolver")
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            url: url.to_string(),
        })
    }
}

#[async_trait::async_trait]
impl DocumentSource for RemoteSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    async fn fetch(&self) -> Result<String, SourceError> {
        debug!("Fetching changelog from {}", self.url);

        let response = self.client.get(&self.url).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(SourceError::NotFound(self.url.clone()));
        }

        if !status.is_success() {
            warn!("Changelog host returned status {}: {}", status, self.url);
            return Err(SourceError::InvalidResponse(format!(
                "Unexpected status {} from {}",
                status, self.url
            )));
        }

        Ok(response.text().await?)
    }
}
