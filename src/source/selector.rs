//! Chooses where the changelog text comes from
//!
//! The installed package ships a local changelog, which by definition cannot
//! describe releases newer than itself. Requests for such releases go to the
//! remote copy, and a failed remote fetch is reported rather than answered
//! from the stale local file.

use std::sync::Arc;

use tracing::{info, warn};

use crate::changelog::{Resolution, find_entry, is_newer, list_versions, parse};
use crate::source::error::SelectError;
use crate::source::traits::DocumentSource;

/// Groups the local and optional remote sources for one changelog
pub struct SourceSelector {
    local: Arc<dyn DocumentSource>,
    remote: Option<Arc<dyn DocumentSource>>,
}

impl SourceSelector {
    pub fn new(local: Arc<dyn DocumentSource>, remote: Option<Arc<dyn DocumentSource>>) -> Self {
        Self { local, remote }
    }

    /// Load, parse, and resolve the entry for `requested`.
    ///
    /// `installed` is the locally installed version; without it the local
    /// changelog is always used first.
    pub async fn resolve(
        &self,
        requested: Option<&str>,
        installed: Option<&str>,
    ) -> Result<Resolution, SelectError> {
        let document = match (requested, installed) {
            (Some(requested), Some(installed)) if is_newer(requested, installed) => {
                self.fetch_remote_for_newer(requested, installed).await?
            }
            _ => self.fetch_with_fallback().await?,
        };

        let parsed = parse(&document);
        Ok(find_entry(&parsed, requested)?)
    }

    /// Load and parse the changelog, returning every version in document order.
    pub async fn list_versions(&self) -> Result<Vec<String>, SelectError> {
        let document = self.fetch_with_fallback().await?;
        Ok(list_versions(&parse(&document))?)
    }

    async fn fetch_remote_for_newer(
        &self,
        requested: &str,
        installed: &str,
    ) -> Result<String, SelectError> {
        let unavailable = |reason: String| SelectError::RemoteUnavailable {
            requested: requested.to_string(),
            installed: installed.to_string(),
            reason,
        };

        let Some(remote) = &self.remote else {
            return Err(unavailable("no remote changelog configured".to_string()));
        };

        info!(
            "Requested {} is newer than installed {}, fetching {}",
            requested,
            installed,
            remote.describe()
        );

        remote.fetch().await.map_err(|e| {
            warn!("Remote changelog fetch failed: {}", e);
            unavailable(e.to_string())
        })
    }

    async fn fetch_with_fallback(&self) -> Result<String, SelectError> {
        let local_err = match self.local.fetch().await {
            Ok(document) => return Ok(document),
            Err(e) => e,
        };
        warn!("Local changelog unavailable: {}", local_err);

        let mut reasons = vec![local_err.to_string()];

        if let Some(remote) = &self.remote {
            info!("Falling back to remote changelog {}", remote.describe());
            match remote.fetch().await {
                Ok(document) => return Ok(document),
                Err(e) => {
                    warn!("Remote changelog fetch failed: {}", e);
                    reasons.push(e.to_string());
                }
            }
        }

        Err(SelectError::SourceUnavailable { reasons })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::changelog::ResolveError;
    use crate::source::error::SourceError;
    use crate::source::traits::MockDocumentSource;

    const LOCAL_DOC: &str = "## 1.0.0\nFixed bug\n\n## 0.9.0\nInitial release";
    const REMOTE_DOC: &str = "## 2.0.0\nBrand new release\n\n## 1.0.0\nFixed bug\n\n## 0.9.0\nInitial release";

    fn source_returning(document: &'static str) -> MockDocumentSource {
        let mut source = MockDocumentSource::new();
        source.expect_describe().returning(|| "mock".to_string());
        source
            .expect_fetch()
            .times(1)
            .returning(move || Ok(document.to_string()));
        source
    }

    fn source_failing() -> MockDocumentSource {
        let mut source = MockDocumentSource::new();
        source.expect_describe().returning(|| "mock".to_string());
        source
            .expect_fetch()
            .times(1)
            .returning(|| Err(SourceError::NotFound("mock".to_string())));
        source
    }

    fn source_unused() -> MockDocumentSource {
        let mut source = MockDocumentSource::new();
        source.expect_describe().returning(|| "mock".to_string());
        source.expect_fetch().never();
        source
    }

    #[tokio::test]
    async fn resolve_reads_local_when_no_version_requested() {
        let selector = SourceSelector::new(
            Arc::new(source_returning(LOCAL_DOC)),
            Some(Arc::new(source_unused())),
        );

        let resolution = selector.resolve(None, Some("1.0.0")).await.unwrap();

        assert_eq!(resolution.entry.version, "1.0.0");
        assert_eq!(resolution.message, "Latest changelog entry: 1.0.0");
    }

    #[tokio::test]
    async fn resolve_reads_local_for_installed_or_older_version() {
        let selector = SourceSelector::new(
            Arc::new(source_returning(LOCAL_DOC)),
            Some(Arc::new(source_unused())),
        );

        let resolution = selector.resolve(Some("v0.9.0"), Some("1.0.0")).await.unwrap();

        assert_eq!(resolution.entry.version, "0.9.0");
    }

    #[tokio::test]
    async fn resolve_fetches_remote_for_newer_version() {
        let selector = SourceSelector::new(
            Arc::new(source_unused()),
            Some(Arc::new(source_returning(REMOTE_DOC))),
        );

        let resolution = selector.resolve(Some("2.0.0"), Some("1.0.0")).await.unwrap();

        assert_eq!(resolution.entry.content, "Brand new release");
        assert_eq!(resolution.message, "Found changelog for version 2.0.0");
    }

    #[tokio::test]
    async fn resolve_does_not_fall_back_to_local_when_remote_fails() {
        let selector = SourceSelector::new(
            Arc::new(source_unused()),
            Some(Arc::new(source_failing())),
        );

        let err = selector
            .resolve(Some("2.0.0"), Some("1.0.0"))
            .await
            .unwrap_err();

        assert!(matches!(err, SelectError::RemoteUnavailable { .. }));
        assert!(err.to_string().contains("newer than installed 1.0.0"));
    }

    #[tokio::test]
    async fn resolve_reports_remote_unavailable_without_remote() {
        let selector = SourceSelector::new(Arc::new(source_unused()), None);

        let err = selector
            .resolve(Some("2.0.0"), Some("1.0.0"))
            .await
            .unwrap_err();

        assert!(matches!(err, SelectError::RemoteUnavailable { .. }));
    }

    #[tokio::test]
    async fn resolve_falls_back_to_remote_when_local_missing() {
        let selector = SourceSelector::new(
            Arc::new(source_failing()),
            Some(Arc::new(source_returning(LOCAL_DOC))),
        );

        let resolution = selector.resolve(Some("1.0.0"), None).await.unwrap();

        assert_eq!(resolution.entry.content, "Fixed bug");
    }

    #[tokio::test]
    async fn resolve_reports_every_failed_source() {
        let selector = SourceSelector::new(
            Arc::new(source_failing()),
            Some(Arc::new(source_failing())),
        );

        let err = selector.resolve(None, None).await.unwrap_err();

        match err {
            SelectError::SourceUnavailable { reasons } => assert_eq!(reasons.len(), 2),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn resolve_surfaces_version_not_found() {
        let selector = SourceSelector::new(Arc::new(source_returning(LOCAL_DOC)), None);

        let err = selector.resolve(Some("0.5.0"), Some("1.0.0")).await.unwrap_err();

        assert!(matches!(
            err,
            SelectError::Resolve(ResolveError::VersionNotFound { .. })
        ));
        assert!(err.to_string().contains("Available: 1.0.0, 0.9.0"));
    }

    #[tokio::test]
    async fn list_versions_returns_document_order() {
        let selector = SourceSelector::new(Arc::new(source_returning(LOCAL_DOC)), None);

        let versions = selector.list_versions().await.unwrap();

        assert_eq!(versions, vec!["1.0.0".to_string(), "0.9.0".to_string()]);
    }

    #[tokio::test]
    async fn list_versions_reports_no_entries() {
        let selector = SourceSelector::new(
            Arc::new(source_returning("# Changelog\n\nNothing released yet.")),
            None,
        );

        let err = selector.list_versions().await.unwrap_err();

        assert!(matches!(err, SelectError::Resolve(ResolveError::NoEntries)));
    }
}
