//! Handler for link shortening endpoint.

use axum::{Json, extract::State, extract::rejection::JsonRejection};

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Issues a short alias for a long URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// { "long_url": "https://example.com/a" }
/// ```
///
/// # Response
///
/// ```json
/// { "short_url": "https://Ab3_xYz901.com" }
/// ```
///
/// # Errors
///
/// - 400 Bad Request if the body is not a JSON object with a string `long_url`
/// - 409 Conflict if the URL was already shortened
/// - 500 Internal Server Error on storage failures
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<Json<ShortenResponse>, AppError> {
    let Json(request) = payload?;

    let short_url = state.alias_service.shorten(&request.long_url).await?;

    Ok(Json(ShortenResponse { short_url }))
}
