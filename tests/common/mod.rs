#![allow(dead_code)]

use alias_shortener::api::handlers::health_handler;
use alias_shortener::api::routes::alias_routes;
use alias_shortener::application::services::AliasService;
use alias_shortener::domain::entities::UrlRecord;
use alias_shortener::domain::repositories::{AliasStore, StorageKind, StoreError, StoreResult};
use alias_shortener::infrastructure::persistence::VolatileStore;
use alias_shortener::state::AppState;
use async_trait::async_trait;
use axum::{Router, routing::get};
use axum_test::TestServer;
use std::sync::Arc;

pub const ALIAS_PATTERN: &str = r"^https://[A-Za-z0-9_]{10}\.com$";

/// Store whose backend is always down.
pub struct UnreachableStore;

#[async_trait]
impl AliasStore for UnreachableStore {
    async fn create_alias(&self, _long_url: &str) -> StoreResult<String> {
        Err(StoreError::BackendUnavailable("connection refused".into()))
    }

    async fn resolve_alias(&self, _token: &str) -> StoreResult<String> {
        Err(StoreError::BackendUnavailable("connection refused".into()))
    }

    async fn find_by_long_url(&self, _long_url: &str) -> StoreResult<Option<UrlRecord>> {
        Err(StoreError::BackendUnavailable("connection refused".into()))
    }

    async fn count(&self) -> StoreResult<i64> {
        Err(StoreError::BackendUnavailable("connection refused".into()))
    }

    async fn health_check(&self) -> bool {
        false
    }

    fn kind(&self) -> StorageKind {
        StorageKind::Postgres
    }
}

pub fn create_state(store: Arc<dyn AliasStore>) -> AppState {
    AppState::new(Arc::new(AliasService::new(store)))
}

pub fn create_test_state() -> AppState {
    create_state(Arc::new(VolatileStore::new()))
}

pub fn create_server(state: AppState) -> TestServer {
    let app = Router::new()
        .merge(alias_routes())
        .route("/health", get(health_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

/// Strips `https://` and `.com` from an issued alias.
pub fn token_of(short_url: &str) -> &str {
    short_url
        .strip_prefix("https://")
        .and_then(|rest| rest.strip_suffix(".com"))
        .unwrap()
}
