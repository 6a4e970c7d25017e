#![allow(dead_code)]

use alias_shortener::application::services::AliasService;
use alias_shortener::config::StorageBackend;
use alias_shortener::domain::repositories::AliasRepository;
use alias_shortener::infrastructure::persistence::{FileAliasRepository, MemoryAliasRepository};
use alias_shortener::routes::router;
use alias_shortener::state::AppState;
use axum::http::HeaderName;
use axum_test::TestServer;
use std::path::Path;
use std::sync::Arc;

pub const IDENTITY_HEADER: &str = "x-user-email";
pub const BASE_URL: &str = "http://sho.rt";

pub fn create_state(repository: Arc<dyn AliasRepository>, backend: StorageBackend) -> AppState {
    AppState::new(
        Arc::new(AliasService::new(repository)),
        BASE_URL,
        HeaderName::from_static(IDENTITY_HEADER),
        backend,
    )
}

pub fn create_memory_state() -> AppState {
    create_state(Arc::new(MemoryAliasRepository::new()), StorageBackend::Memory)
}

pub fn create_file_state(storage_root: &Path) -> AppState {
    let repository = FileAliasRepository::open(storage_root).unwrap();
    create_state(Arc::new(repository), StorageBackend::File)
}

pub fn create_server(state: AppState) -> TestServer {
    TestServer::new(router(state)).unwrap()
}

/// Seeds an alias through the service, bypassing HTTP.
pub fn seed_alias(state: &AppState, owner: &str, alias: &str, url: &str) {
    state
        .alias_service
        .create_alias(owner, url, Some(alias))
        .unwrap();
}
