//! Storage contract for URL aliases.

use crate::domain::entities::UrlRecord;
use async_trait::async_trait;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Failures reported by an [`AliasStore`].
///
/// Stores never log; they hand these back and let the caller decide how to
/// surface them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The long URL already has an alias.
    #[error("URL already shortened: {0}")]
    DuplicateUrl(String),

    /// No record carries the requested alias.
    #[error("short URL {0} not found")]
    AliasNotFound(String),

    /// A freshly generated alias is already taken by another URL.
    #[error("generated alias already in use: {0}")]
    AliasCollision(String),

    /// The storage backend failed or could not be reached.
    #[error("storage backend unavailable: {0}")]
    BackendUnavailable(String),
}

/// Which storage variant backs the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageKind {
    /// Process-local map, lost on restart.
    #[default]
    InMemory,
    /// PostgreSQL `urls` table.
    Postgres,
}

impl StorageKind {
    /// Returns the configuration spelling of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InMemory => "in-memory",
            Self::Postgres => "postgres",
        }
    }
}

impl fmt::Display for StorageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StorageKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "in-memory" => Ok(Self::InMemory),
            "postgres" => Ok(Self::Postgres),
            other => Err(format!(
                "unknown storage type '{other}', expected 'in-memory' or 'postgres'"
            )),
        }
    }
}

/// A backend that issues aliases for long URLs and resolves them back.
///
/// Each long URL gets at most one alias. Implementations must be safe to call
/// concurrently from many request handlers.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::VolatileStore`] - In-process map
/// - [`crate::infrastructure::persistence::RelationalStore`] - PostgreSQL table
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AliasStore: Send + Sync {
    /// Issues a new alias for `long_url` and stores the pair.
    ///
    /// `long_url` is stored exactly as given.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateUrl`] if `long_url` already has an alias;
    /// nothing is generated or stored in that case.
    ///
    /// Returns [`StoreError::AliasCollision`] if the generated alias is taken.
    ///
    /// Returns [`StoreError::BackendUnavailable`] on storage failures.
    async fn create_alias(&self, long_url: &str) -> StoreResult<String>;

    /// Resolves a bare token to the long URL it was issued for.
    ///
    /// The token is wrapped into the full alias form before the lookup.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::AliasNotFound`] if no record matches.
    ///
    /// Returns [`StoreError::BackendUnavailable`] on storage failures.
    async fn resolve_alias(&self, token: &str) -> StoreResult<String>;

    /// Finds the record for a long URL.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::BackendUnavailable`] on storage failures.
    async fn find_by_long_url(&self, long_url: &str) -> StoreResult<Option<UrlRecord>>;

    /// Counts stored records.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::BackendUnavailable`] on storage failures.
    async fn count(&self) -> StoreResult<i64>;

    /// Checks whether the backend can serve requests.
    async fn health_check(&self) -> bool;

    /// Returns the storage variant.
    fn kind(&self) -> StorageKind;
}
