//! Helper functions shared across layers.
//!
//! - [`alias_codec`] - Alias token generation, formatting and parsing
//! - [`db_error`] - Classification of database errors

pub mod alias_codec;
pub mod db_error;
