//! Storage contract for the domain layer.
//!
//! [`AliasStore`] abstracts over where alias records live. Implementations are
//! in `crate::infrastructure::persistence`; a `mockall` mock is generated for
//! unit tests.
//!
//! # Testing
//!
//! See `tests/store_volatile.rs` and `tests/store_relational.rs`.

pub mod alias_store;

pub use alias_store::{AliasStore, StorageKind, StoreError, StoreResult};

#[cfg(test)]
pub use alias_store::MockAliasStore;
