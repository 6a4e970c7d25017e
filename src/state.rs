//! Shared application state injected into all handlers.

use axum::http::HeaderName;
use std::sync::Arc;

use crate::application::services::AliasService;
use crate::config::StorageBackend;
use crate::domain::repositories::AliasRepository;

/// Alias service over whichever repository the server was started with.
pub type DynAliasService = AliasService<dyn AliasRepository>;

#[derive(Clone)]
pub struct AppState {
    pub alias_service: Arc<DynAliasService>,
    pub base_url: String,
    pub identity_header: HeaderName,
    pub storage_backend: StorageBackend,
}

impl AppState {
    pub fn new(
        alias_service: Arc<DynAliasService>,
        base_url: impl Into<String>,
        identity_header: HeaderName,
        storage_backend: StorageBackend,
    ) -> Self {
        Self {
            alias_service,
            base_url: base_url.into(),
            identity_header,
            storage_backend,
        }
    }

    /// Builds the public short URL for `alias`.
    pub fn short_url(&self, alias: &str) -> String {
        format!("{}/r/{}", self.base_url.trim_end_matches('/'), alias)
    }
}
