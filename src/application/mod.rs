//! Application layer services.
//!
//! Services sit between the HTTP handlers and the storage contract: they call
//! the injected store, log outcomes and translate store failures into
//! [`crate::error::AppError`].
//!
//! # Available Services
//!
//! - [`services::alias_service::AliasService`] - Alias creation and resolution

pub mod services;
