//! Handler for alias resolution endpoint.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::resolve::ResolveResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the long URL behind an alias.
///
/// # Endpoint
///
/// `GET /short/{token}`
///
/// The path segment is normally the bare token; `{token}.com` is accepted too.
///
/// # Response
///
/// ```json
/// { "long_url": "https://example.com/a" }
/// ```
///
/// # Errors
///
/// - 404 Not Found if no URL was shortened to this alias
/// - 500 Internal Server Error on storage failures
pub async fn resolve_handler(
    Path(token): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ResolveResponse>, AppError> {
    let long_url = state.alias_service.resolve(&token).await?;

    Ok(Json(ResolveResponse { long_url }))
}
