//! HTTP server initialization and runtime setup.
//!
//! Opens the alias store, wires the service and serves the Axum router until
//! a shutdown signal arrives.

use crate::application::services::AliasService;
use crate::config::{Config, StorageBackend};
use crate::domain::repositories::AliasRepository;
use crate::infrastructure::persistence::{FileAliasRepository, MemoryAliasRepository};
use crate::routes::app_router;
use crate::state::AppState;
use crate::utils::alias_generator::RandomAliasGenerator;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Opens the configured alias repository.
///
/// # Errors
///
/// Returns an error if the file backing cannot read or create its snapshot.
/// A corrupt snapshot is never replaced with an empty store.
pub fn open_repository(config: &Config) -> Result<Arc<dyn AliasRepository>> {
    let repository: Arc<dyn AliasRepository> = match config.storage_backend {
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage; aliases are lost on restart");
            Arc::new(MemoryAliasRepository::new())
        }
        StorageBackend::File => {
            let repository = FileAliasRepository::open(&config.storage_root).with_context(|| {
                format!(
                    "Failed to open alias storage at {}",
                    config.storage_root.display()
                )
            })?;
            Arc::new(repository)
        }
    };

    Ok(repository)
}

/// Builds the shared application state from configuration.
///
/// # Errors
///
/// Returns an error if the repository cannot be opened or the identity
/// header is invalid.
pub fn build_state(config: &Config) -> Result<AppState> {
    let repository = open_repository(config)?;

    let alias_service = AliasService::with_generator(
        repository,
        Box::new(RandomAliasGenerator::new(config.alias_length)),
        config.alias_max_attempts,
    );

    Ok(AppState::new(
        Arc::new(alias_service),
        config.base_url.clone(),
        config.identity_header_name()?,
        config.storage_backend,
    ))
}

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - The alias store cannot be opened
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let state = build_state(&config)?;
    tracing::info!(
        backend = %config.storage_backend,
        aliases = state.alias_service.alias_count(),
        "Alias store ready"
    );

    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
