//! Core domain entities.
//!
//! - [`UrlRecord`] - A long URL and the alias issued for it

pub mod url_record;

pub use url_record::UrlRecord;
