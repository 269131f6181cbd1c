//! In-process implementation of the alias store.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::domain::entities::UrlRecord;
use crate::domain::repositories::{AliasStore, StorageKind, StoreError, StoreResult};
use crate::utils::alias_codec;

#[derive(Debug, Default)]
struct Tables {
    /// long URL -> alias
    by_url: HashMap<String, String>,
    /// alias -> long URL
    by_alias: HashMap<String, String>,
}

/// Alias store backed by a process-local map.
///
/// Records live as long as the store. Creation runs the existence check and
/// the insert under a single write lock, so concurrent creates for the same
/// URL yield exactly one alias. Resolution goes through a secondary index
/// keyed by alias and only takes a read lock.
#[derive(Debug, Default)]
pub struct VolatileStore {
    tables: RwLock<Tables>,
}

impl VolatileStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a pair with a caller-chosen alias.
    ///
    /// Used by [`AliasStore::create_alias`] after generating the alias.
    fn insert(&self, long_url: &str, short_alias: String) -> StoreResult<String> {
        let mut tables = self.tables.write();

        if tables.by_url.contains_key(long_url) {
            return Err(StoreError::DuplicateUrl(long_url.to_string()));
        }

        match tables.by_alias.entry(short_alias.clone()) {
            Entry::Occupied(_) => return Err(StoreError::AliasCollision(short_alias)),
            Entry::Vacant(slot) => {
                slot.insert(long_url.to_string());
            }
        }
        tables
            .by_url
            .insert(long_url.to_string(), short_alias.clone());

        Ok(short_alias)
    }
}

#[async_trait]
impl AliasStore for VolatileStore {
    async fn create_alias(&self, long_url: &str) -> StoreResult<String> {
        // Cheap pre-check so duplicates never consume a token.
        if self.tables.read().by_url.contains_key(long_url) {
            return Err(StoreError::DuplicateUrl(long_url.to_string()));
        }

        let short_alias = alias_codec::format(&alias_codec::generate_token());
        self.insert(long_url, short_alias)
    }

    async fn resolve_alias(&self, token: &str) -> StoreResult<String> {
        let target = alias_codec::format(token);

        self.tables
            .read()
            .by_alias
            .get(&target)
            .cloned()
            .ok_or_else(|| StoreError::AliasNotFound(token.to_string()))
    }

    async fn find_by_long_url(&self, long_url: &str) -> StoreResult<Option<UrlRecord>> {
        Ok(self
            .tables
            .read()
            .by_url
            .get(long_url)
            .map(|alias| UrlRecord::new(long_url, alias.clone())))
    }

    async fn count(&self) -> StoreResult<i64> {
        Ok(self.tables.read().by_url.len() as i64)
    }

    async fn health_check(&self) -> bool {
        true
    }

    fn kind(&self) -> StorageKind {
        StorageKind::InMemory
    }
}
