//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::Redirect,
};
use serde_json::json;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects an alias to its target URL.
///
/// # Endpoint
///
/// `GET /r/{alias}`
///
/// Lookups are served from memory and never touch disk.
///
/// # Errors
///
/// Returns 404 Not Found if the alias doesn't exist.
pub async fn redirect_handler(
    Path(alias): Path<String>,
    State(state): State<AppState>,
) -> Result<Redirect, AppError> {
    let target_url = state
        .alias_service
        .resolve_url(&alias)
        .ok_or_else(|| AppError::not_found("Alias not found", json!({ "alias": alias })))?;

    Ok(Redirect::temporary(&target_url))
}
