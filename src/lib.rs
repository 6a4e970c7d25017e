//! # Alias Shortener
//!
//! A URL shortening service built around an owner-scoped alias store.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - `UrlAlias` entity, error taxonomy and repository trait
//! - **Application Layer** ([`application`]) - Alias allocation and ownership rules
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory and JSON snapshot storage
//! - **API Layer** ([`api`]) - REST API handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - User-chosen or random 8-character alphanumeric aliases
//! - Globally unique aliases with atomic check-and-insert
//! - Owner-only deletion
//! - Durable whole-file JSON snapshot, rewritten on every mutation
//!
//! ## Quick Start
//!
//! ```bash
//! export STORAGE_ROOT="./data"
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::AliasService;
    pub use crate::domain::AliasError;
    pub use crate::domain::entities::UrlAlias;
    pub use crate::domain::repositories::AliasRepository;
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::{FileAliasRepository, MemoryAliasRepository};
    pub use crate::state::AppState;
}
