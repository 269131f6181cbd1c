//! PostgreSQL implementation of the alias store.

use async_trait::async_trait;
use sqlx::PgPool;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::domain::entities::UrlRecord;
use crate::domain::repositories::{AliasStore, StorageKind, StoreError, StoreResult};
use crate::utils::alias_codec;
use crate::utils::db_error::is_unique_violation_on;

const CREATE_URLS_TABLE: &str = include_str!("../../../schema/urls.sql");
const CREATE_LONG_URL_INDEX: &str = include_str!("../../../schema/urls_long_url_key.sql");

const SHORT_URL_CONSTRAINT: &str = "urls_short_url_key";
const LONG_URL_CONSTRAINT: &str = "urls_long_url_key";

/// How [`RelationalStore`] guards against duplicate long URLs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InsertMode {
    /// One conditional insert backed by a unique index on `md5(long_url)`.
    #[default]
    Atomic,
    /// A `COUNT(*)` existence check followed by a separate insert.
    ///
    /// Concurrent creates for the same URL can both pass the check and store
    /// two rows. A failing existence query counts as "not present".
    CheckThenInsert,
}

impl InsertMode {
    /// Returns the configuration spelling of this mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Atomic => "atomic",
            Self::CheckThenInsert => "check-then-insert",
        }
    }
}

impl fmt::Display for InsertMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InsertMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "atomic" => Ok(Self::Atomic),
            "check-then-insert" => Ok(Self::CheckThenInsert),
            other => Err(format!(
                "unknown insert mode '{other}', expected 'atomic' or 'check-then-insert'"
            )),
        }
    }
}

/// Alias store backed by the PostgreSQL `urls` table.
///
/// The table is `urls(id SERIAL PRIMARY KEY, long_url TEXT NOT NULL,
/// short_url TEXT NOT NULL UNIQUE)`. In [`InsertMode::Atomic`] a unique index
/// `urls_long_url_key` is added on `md5(long_url)`; hashing keeps long URLs of
/// any size under the btree entry limit.
pub struct RelationalStore {
    pool: Arc<PgPool>,
    mode: InsertMode,
}

impl RelationalStore {
    /// Creates a store over an existing pool without touching the schema.
    pub fn new(pool: Arc<PgPool>, mode: InsertMode) -> Self {
        Self { pool, mode }
    }

    /// Creates a store and makes sure its schema exists.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::BackendUnavailable`] if the DDL fails.
    pub async fn open(pool: Arc<PgPool>, mode: InsertMode) -> StoreResult<Self> {
        let store = Self::new(pool, mode);
        store.ensure_schema().await?;
        Ok(store)
    }

    /// Creates the `urls` table (and the long URL index in atomic mode) if absent.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::BackendUnavailable`] if the DDL fails.
    pub async fn ensure_schema(&self) -> StoreResult<()> {
        sqlx::query(CREATE_URLS_TABLE)
            .execute(self.pool.as_ref())
            .await
            .map_err(map_sqlx_error)?;

        if self.mode == InsertMode::Atomic {
            sqlx::query(CREATE_LONG_URL_INDEX)
                .execute(self.pool.as_ref())
                .await
                .map_err(map_sqlx_error)?;
        }

        Ok(())
    }

    /// Returns the insert mode in use.
    pub fn mode(&self) -> InsertMode {
        self.mode
    }

    /// Returns a reference to the underlying pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    async fn insert_if_absent(&self, long_url: &str, short_alias: &str) -> StoreResult<String> {
        let inserted = sqlx::query_scalar::<_, String>(
            r#"
            INSERT INTO urls (long_url, short_url)
            VALUES ($1, $2)
            ON CONFLICT (md5(long_url)) DO NOTHING
            RETURNING short_url
            "#,
        )
        .bind(long_url)
        .bind(short_alias)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(|e| map_insert_error(e, long_url, short_alias))?;

        inserted.ok_or_else(|| StoreError::DuplicateUrl(long_url.to_string()))
    }

    async fn check_then_insert(&self, long_url: &str, short_alias: &str) -> StoreResult<String> {
        if self.url_exists(long_url).await {
            return Err(StoreError::DuplicateUrl(long_url.to_string()));
        }

        sqlx::query("INSERT INTO urls (long_url, short_url) VALUES ($1, $2)")
            .bind(long_url)
            .bind(short_alias)
            .execute(self.pool.as_ref())
            .await
            .map_err(|e| map_insert_error(e, long_url, short_alias))?;

        Ok(short_alias.to_string())
    }

    /// Fail-open existence check: query errors read as "absent".
    async fn url_exists(&self, long_url: &str) -> bool {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM urls WHERE long_url = $1")
            .bind(long_url)
            .fetch_one(self.pool.as_ref())
            .await
            .is_ok_and(|count| count > 0)
    }
}

fn map_sqlx_error(err: sqlx::Error) -> StoreError {
    StoreError::BackendUnavailable(err.to_string())
}

/// The long URL index can outlive a switch to check-then-insert mode, so it
/// is classified in both modes.
fn map_insert_error(err: sqlx::Error, long_url: &str, short_alias: &str) -> StoreError {
    if is_unique_violation_on(&err, SHORT_URL_CONSTRAINT) {
        return StoreError::AliasCollision(short_alias.to_string());
    }

    if is_unique_violation_on(&err, LONG_URL_CONSTRAINT) {
        return StoreError::DuplicateUrl(long_url.to_string());
    }

    map_sqlx_error(err)
}

#[async_trait]
impl AliasStore for RelationalStore {
    async fn create_alias(&self, long_url: &str) -> StoreResult<String> {
        let short_alias = alias_codec::format(&alias_codec::generate_token());

        match self.mode {
            InsertMode::Atomic => self.insert_if_absent(long_url, &short_alias).await,
            InsertMode::CheckThenInsert => self.check_then_insert(long_url, &short_alias).await,
        }
    }

    async fn resolve_alias(&self, token: &str) -> StoreResult<String> {
        let long_url =
            sqlx::query_scalar::<_, String>("SELECT long_url FROM urls WHERE short_url = $1")
                .bind(alias_codec::format(token))
                .fetch_optional(self.pool.as_ref())
                .await
                .map_err(map_sqlx_error)?;

        long_url.ok_or_else(|| StoreError::AliasNotFound(token.to_string()))
    }

    async fn find_by_long_url(&self, long_url: &str) -> StoreResult<Option<UrlRecord>> {
        let row = sqlx::query_as::<_, (String, String)>(
            r#"
            SELECT long_url, short_url
            FROM urls
            WHERE long_url = $1
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(long_url)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.map(|(long_url, short_url)| UrlRecord::new(long_url, short_url)))
    }

    async fn count(&self) -> StoreResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM urls")
            .fetch_one(self.pool.as_ref())
            .await
            .map_err(map_sqlx_error)
    }

    async fn health_check(&self) -> bool {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(self.pool.as_ref())
            .await
            .is_ok()
    }

    fn kind(&self) -> StorageKind {
        StorageKind::Postgres
    }
}
