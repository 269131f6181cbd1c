//! Alias store implementations.
//!
//! # Stores
//!
//! - [`VolatileStore`] - In-process maps guarded by a read-write lock
//! - [`RelationalStore`] - PostgreSQL `urls` table via SQLx

pub mod relational_store;
pub mod volatile_store;

pub use relational_store::{InsertMode, RelationalStore};
pub use volatile_store::VolatileStore;
