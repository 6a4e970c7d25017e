//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod aliases;
pub mod health;
pub mod redirect;
pub mod shorten;

pub use aliases::{delete_alias_handler, list_aliases_handler};
pub use health::health_handler;
pub use redirect::redirect_handler;
pub use shorten::shorten_handler;

use serde_json::json;

use crate::domain::errors::AliasError;
use crate::error::AppError;

/// Runs a storage mutation on the blocking pool.
///
/// The durable backing rewrites its snapshot synchronously, so mutations must
/// not run on the async executor threads.
pub(crate) async fn run_blocking<T, F>(f: F) -> Result<T, AppError>
where
    F: FnOnce() -> Result<T, AliasError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| {
            AppError::internal("Storage task failed", json!({ "reason": e.to_string() }))
        })?
        .map_err(AppError::from)
}
