//! Core domain entities.
//!
//! - [`UrlAlias`] - A short alias mapped to a target URL and its owner

pub mod alias;

pub use alias::UrlAlias;
