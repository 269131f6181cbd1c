//! DTOs for the resolution endpoint.

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ResolveResponse {
    pub long_url: String,
}
