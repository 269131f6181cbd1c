//! API route configuration.

use crate::api::handlers::{resolve_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Alias routes.
///
/// # Endpoints
///
/// - `POST /shorten`       - Issue an alias for a long URL
/// - `GET  /short/{token}` - Resolve an alias token to its long URL
pub fn alias_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/short/{token}", get(resolve_handler))
}
