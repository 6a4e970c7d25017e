//! Handler for alias creation endpoint.

use axum::{Extension, Json, extract::State, http::StatusCode};
use validator::Validate;

use super::run_blocking;
use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::api::middleware::AuthenticatedUser;
use crate::error::AppError;
use crate::state::AppState;

/// Creates an alias for a long URL, owned by the caller.
///
/// # Endpoint
///
/// `POST /urls/shorten`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com/some/long/path",
///   "alias": "my-link"   // optional, random 8-character alias if omitted
/// }
/// ```
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// {
///   "alias": "my-link",
///   "short_url": "https://sho.rt/r/my-link"
/// }
/// ```
///
/// # Errors
///
/// - `400 Bad Request` if the URL or alias is invalid
/// - `409 Conflict` if the requested alias is already taken
pub async fn shorten_handler(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(payload): Json<ShortenRequest>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    payload.validate()?;

    let service = state.alias_service.clone();
    let ShortenRequest { url, alias } = payload;

    let alias =
        run_blocking(move || service.create_alias(&user.email, &url, alias.as_deref())).await?;

    let short_url = state.short_url(&alias);

    Ok((StatusCode::CREATED, Json(ShortenResponse { alias, short_url })))
}
