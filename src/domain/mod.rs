//! Domain layer containing the data model and the storage contract.
//!
//! This module is independent of HTTP and of any particular backend.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - The [`repositories::AliasStore`] contract and its error type
//!
//! Concrete stores live in [`crate::infrastructure::persistence`].

pub mod entities;
pub mod repositories;
