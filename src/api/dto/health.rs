//! DTOs for health check endpoint.

use serde::Serialize;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub storage: StorageStatus,
}

/// Alias storage status.
#[derive(Debug, Serialize)]
pub struct StorageStatus {
    pub backend: String,
    pub aliases: usize,
}
