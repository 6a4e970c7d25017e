//! Handler for health check endpoint.

use axum::{Json, extract::State};

use crate::api::dto::health::{HealthResponse, StorageStatus};
use crate::state::AppState;

/// Returns service health and storage status.
///
/// # Endpoint
///
/// `GET /health`
///
/// The alias store is loaded at startup and failures there are fatal, so a
/// running process always reports healthy.
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "storage": { "backend": "file", "aliases": 42 }
/// }
/// ```
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        storage: StorageStatus {
            backend: state.storage_backend.to_string(),
            aliases: state.alias_service.alias_count(),
        },
    })
}
