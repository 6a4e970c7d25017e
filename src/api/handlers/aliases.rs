//! Handlers for the caller's own aliases (list, delete).

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::json;

use super::run_blocking;
use crate::api::dto::alias::{AliasItem, AliasListResponse};
use crate::api::middleware::AuthenticatedUser;
use crate::error::AppError;
use crate::state::AppState;

/// Lists every alias owned by the caller.
///
/// # Endpoint
///
/// `GET /urls`
///
/// # Response
///
/// ```json
/// {
///   "total": 1,
///   "items": [
///     {
///       "alias": "my-link",
///       "url": "https://example.com",
///       "owner": "alice@example.com",
///       "short_url": "https://sho.rt/r/my-link"
///     }
///   ]
/// }
/// ```
pub async fn list_aliases_handler(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Json<AliasListResponse> {
    let mut aliases = state.alias_service.list_owned_aliases(&user.email);
    aliases.sort_by(|a, b| a.alias.cmp(&b.alias));

    let items: Vec<_> = aliases
        .into_iter()
        .map(|alias| {
            let short_url = state.short_url(&alias.alias);
            AliasItem::from_alias(alias, short_url)
        })
        .collect();

    Json(AliasListResponse {
        total: items.len(),
        items,
    })
}

/// Deletes one of the caller's aliases.
///
/// # Endpoint
///
/// `DELETE /urls/{alias}`
///
/// # Response Codes
///
/// - `204 No Content` - the alias existed, belonged to the caller and was removed
/// - `404 Not Found` - the alias doesn't exist or belongs to someone else
///
/// The two 404 cases are intentionally indistinguishable.
pub async fn delete_alias_handler(
    Path(alias): Path<String>,
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<StatusCode, AppError> {
    let service = state.alias_service.clone();
    let key = alias.clone();

    let deleted = run_blocking(move || service.delete_owned_alias(&user.email, &key)).await?;

    if !deleted {
        return Err(AppError::not_found(
            "Alias not found",
            json!({ "alias": alias }),
        ));
    }

    Ok(StatusCode::NO_CONTENT)
}
