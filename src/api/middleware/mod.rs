//! HTTP middleware for request processing.
//!
//! Provides caller identification and observability middleware.

pub mod auth;
pub mod tracing;

pub use auth::AuthenticatedUser;
