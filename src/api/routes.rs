//! API route configuration.
//!
//! All routes here require the caller identity injected by
//! [`crate::api::middleware::auth`].

use crate::api::handlers::{delete_alias_handler, list_aliases_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post},
};

/// Routes operating on the caller's own aliases.
///
/// # Endpoints
///
/// - `GET    /urls`          - List the caller's aliases
/// - `POST   /urls/shorten`  - Create an alias (explicit or random)
/// - `DELETE /urls/{alias}`  - Delete one of the caller's aliases
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/urls", get(list_aliases_handler))
        .route("/urls/shorten", post(shorten_handler))
        .route("/urls/{alias}", delete(delete_alias_handler))
}
