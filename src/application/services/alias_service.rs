//! Alias creation and resolution service.

use std::sync::Arc;

use serde_json::json;
use tracing::{debug, error, info, warn};

use crate::domain::repositories::{AliasStore, StorageKind, StoreError};
use crate::error::AppError;
use crate::utils::alias_codec;

/// Service the HTTP layer and the admin CLI go through to reach the store.
///
/// Holds the store chosen at startup. Store failures are logged here and
/// converted to [`AppError`].
pub struct AliasService {
    store: Arc<dyn AliasStore>,
}

impl AliasService {
    /// Creates a new alias service.
    pub fn new(store: Arc<dyn AliasStore>) -> Self {
        Self { store }
    }

    /// Issues an alias for `long_url`.
    ///
    /// The URL is not validated or normalised; byte-identical URLs are the
    /// only ones treated as duplicates.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the URL was already shortened.
    ///
    /// Returns [`AppError::Internal`] on storage failures or alias collisions.
    pub async fn shorten(&self, long_url: &str) -> Result<String, AppError> {
        match self.store.create_alias(long_url).await {
            Ok(short_url) => {
                info!(%long_url, %short_url, "Created short URL");
                Ok(short_url)
            }
            Err(e) => {
                log_store_error(&e);
                Err(e.into())
            }
        }
    }

    /// Resolves an alias to its long URL.
    ///
    /// `alias` may be a bare token, `{token}.com` or `https://{token}.com`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the alias is malformed or unknown.
    ///
    /// Returns [`AppError::Internal`] on storage failures.
    pub async fn resolve(&self, alias: &str) -> Result<String, AppError> {
        debug!(%alias, "Requested short URL");

        let Some(token) = alias_codec::parse(alias) else {
            debug!(%alias, "Alias is not well formed");
            return Err(AppError::not_found(
                "Short URL not found",
                json!({ "token": alias }),
            ));
        };

        match self.store.resolve_alias(token).await {
            Ok(long_url) => {
                debug!(%token, %long_url, "Resolved short URL");
                Ok(long_url)
            }
            Err(e) => {
                log_store_error(&e);
                Err(e.into())
            }
        }
    }

    /// Returns the number of stored records.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage failures.
    pub async fn count(&self) -> Result<i64, AppError> {
        self.store.count().await.map_err(|e| {
            log_store_error(&e);
            e.into()
        })
    }

    /// Checks whether the store can serve requests.
    pub async fn is_healthy(&self) -> bool {
        self.store.health_check().await
    }

    /// Returns the storage variant in use.
    pub fn storage_kind(&self) -> StorageKind {
        self.store.kind()
    }
}

fn log_store_error(e: &StoreError) {
    match e {
        StoreError::DuplicateUrl(_) | StoreError::AliasNotFound(_) => debug!("{}", e),
        StoreError::AliasCollision(_) => warn!("{}", e),
        StoreError::BackendUnavailable(_) => error!("{}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockAliasStore;

    fn service(store: MockAliasStore) -> AliasService {
        AliasService::new(Arc::new(store))
    }

    #[tokio::test]
    async fn test_shorten_success() {
        let mut store = MockAliasStore::new();
        store
            .expect_create_alias()
            .withf(|url| url == "https://example.com/a")
            .times(1)
            .returning(|_| Ok("https://abcdefghij.com".to_string()));

        let result = service(store).shorten("https://example.com/a").await;

        assert_eq!(result.unwrap(), "https://abcdefghij.com");
    }

    #[tokio::test]
    async fn test_shorten_duplicate_is_conflict() {
        let mut store = MockAliasStore::new();
        store
            .expect_create_alias()
            .times(1)
            .returning(|url| Err(StoreError::DuplicateUrl(url.to_string())));

        let result = service(store).shorten("https://example.com/a").await;

        assert!(matches!(result.unwrap_err(), AppError::Conflict { .. }));
    }

    #[tokio::test]
    async fn test_shorten_backend_failure_is_internal() {
        let mut store = MockAliasStore::new();
        store
            .expect_create_alias()
            .times(1)
            .returning(|_| Err(StoreError::BackendUnavailable("connection refused".into())));

        let result = service(store).shorten("https://example.com/a").await;

        assert!(matches!(result.unwrap_err(), AppError::Internal { .. }));
    }

    #[tokio::test]
    async fn test_resolve_strips_alias_wrapper() {
        let mut store = MockAliasStore::new();
        store
            .expect_resolve_alias()
            .withf(|token| token == "abcdefghij")
            .times(3)
            .returning(|_| Ok("https://example.com/a".to_string()));

        let svc = service(store);

        for alias in ["abcdefghij", "abcdefghij.com", "https://abcdefghij.com"] {
            assert_eq!(
                svc.resolve(alias).await.unwrap(),
                "https://example.com/a"
            );
        }
    }

    #[tokio::test]
    async fn test_resolve_malformed_alias_skips_store() {
        let mut store = MockAliasStore::new();
        store.expect_resolve_alias().times(0);

        let result = service(store).resolve("not/a/token").await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_resolve_unknown_alias() {
        let mut store = MockAliasStore::new();
        store
            .expect_resolve_alias()
            .times(1)
            .returning(|token| Err(StoreError::AliasNotFound(token.to_string())));

        let result = service(store).resolve("zzzzzzzzzz").await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_storage_kind_and_health() {
        let mut store = MockAliasStore::new();
        store.expect_kind().return_const(StorageKind::Postgres);
        store.expect_health_check().times(1).returning(|| false);

        let svc = service(store);

        assert_eq!(svc.storage_kind(), StorageKind::Postgres);
        assert!(!svc.is_healthy().await);
    }
}
