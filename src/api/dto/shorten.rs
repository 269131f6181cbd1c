//! DTOs for the shortening endpoint.

use serde::{Deserialize, Serialize};

/// Request to shorten a single URL.
///
/// `long_url` is taken as-is; it is neither validated nor normalised.
#[derive(Debug, Deserialize)]
pub struct ShortenRequest {
    pub long_url: String,
}

/// Alias issued for the submitted URL, in `https://{token}.com` form.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub short_url: String,
}
