//! Caller identification middleware.
//!
//! Authentication itself happens upstream (gateway or auth proxy). That layer
//! forwards the verified user email in the configured identity header, which
//! this middleware turns into an [`AuthenticatedUser`] request extension.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use serde_json::json;

use crate::{error::AppError, state::AppState};

/// Verified identity of the caller, available to protected handlers via
/// `Extension<AuthenticatedUser>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub email: String,
}

/// Requires the identity header on protected routes.
///
/// # Header Format
///
/// ```text
/// X-User-Email: alice@example.com
/// ```
///
/// # Errors
///
/// Returns `401 Unauthorized` if the header is missing, not valid UTF-8, or blank.
///
/// # Example
///
/// ```rust,ignore
/// use axum::{Router, routing::get, middleware};
/// use crate::api::middleware::auth;
///
/// let protected = Router::new()
///     .route("/urls", get(list_aliases_handler))
///     .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));
/// ```
pub async fn layer(
    State(st): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let email = req
        .headers()
        .get(&st.identity_header)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|email| !email.is_empty())
        .map(str::to_string)
        .ok_or_else(|| {
            AppError::unauthorized(
                "Unauthorized",
                json!({ "reason": format!("{} header is missing or invalid", st.identity_header) }),
            )
        })?;

    req.extensions_mut().insert(AuthenticatedUser { email });

    Ok(next.run(req).await)
}
