//! # Alias Shortener
//!
//! A URL shortening service built with Axum. Long URLs are mapped to aliases
//! of the form `https://{token}.com`, where `token` is ten characters drawn
//! from `[A-Za-z0-9_]`.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - The URL record and the store contract
//! - **Application Layer** ([`application`]) - Alias issuance and resolution
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory and PostgreSQL stores
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Storage
//!
//! The store is picked once at startup with `STORAGE_TYPE`:
//!
//! - `in-memory` (default) - records live as long as the process
//! - `postgres` - records live in the `urls` table
//!
//! ## Quick Start
//!
//! ```bash
//! cargo run
//!
//! curl -X POST localhost:3000/shorten \
//!      -H 'content-type: application/json' \
//!      -d '{"long_url": "https://example.com/a"}'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::AliasService;
    pub use crate::domain::entities::UrlRecord;
    pub use crate::domain::repositories::{AliasStore, StorageKind, StoreError};
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::{InsertMode, RelationalStore, VolatileStore};
    pub use crate::state::AppState;
}
