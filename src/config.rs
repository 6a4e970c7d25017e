//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ```bash
//! export STORAGE_BACKEND="file"
//! export STORAGE_ROOT="/var/lib/alias-shortener"
//! export BASE_URL="https://sho.rt"
//! ```
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `BASE_URL` - Prefix for returned short URLs (default: `http://localhost:3000`)
//! - `STORAGE_BACKEND` - `file` or `memory` (default: `file`)
//! - `STORAGE_ROOT` - Directory holding `alias-repository.json` (default: `./data`)
//! - `ALIAS_LENGTH` - Length of random aliases (default: 8, range: 4-64)
//! - `ALIAS_MAX_ATTEMPTS` - Random allocation retry cap (default: 10, range: 1-1000)
//! - `IDENTITY_HEADER` - Header carrying the verified user email (default: `x-user-email`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::{Context, Result};
use axum::http::HeaderName;
use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::application::services::DEFAULT_MAX_ATTEMPTS;
use crate::utils::alias_generator::DEFAULT_ALIAS_LENGTH;

/// Where aliases are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    /// Process-lifetime map; nothing survives a restart.
    Memory,
    /// JSON snapshot under `STORAGE_ROOT`.
    File,
}

impl StorageBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageBackend::Memory => "memory",
            StorageBackend::File => "file",
        }
    }
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StorageBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "memory" => Ok(StorageBackend::Memory),
            "file" => Ok(StorageBackend::File),
            other => anyhow::bail!("STORAGE_BACKEND must be 'file' or 'memory', got '{}'", other),
        }
    }
}

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub base_url: String,
    pub storage_backend: StorageBackend,
    /// Directory holding the alias snapshot. Ignored by the memory backend.
    pub storage_root: PathBuf,
    pub alias_length: usize,
    pub alias_max_attempts: usize,
    /// Header set by the upstream authentication layer with the caller's email.
    pub identity_header: String,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable or `STORAGE_BACKEND` cannot be parsed.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let base_url =
            env::var("BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());

        let storage_backend = env::var("STORAGE_BACKEND")
            .unwrap_or_else(|_| "file".to_string())
            .parse()?;

        let storage_root = env::var("STORAGE_ROOT")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./data"));

        let alias_length = parse_var("ALIAS_LENGTH", DEFAULT_ALIAS_LENGTH)?;
        let alias_max_attempts = parse_var("ALIAS_MAX_ATTEMPTS", DEFAULT_MAX_ATTEMPTS)?;

        let identity_header =
            env::var("IDENTITY_HEADER").unwrap_or_else(|_| "x-user-email".to_string());

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            listen_addr,
            base_url,
            storage_backend,
            storage_root,
            alias_length,
            alias_max_attempts,
            identity_header,
            log_level,
            log_format,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `alias_length` is outside 4-64
    /// - `alias_max_attempts` is outside 1-1000
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - `base_url` is not HTTP(S)
    /// - `identity_header` is not a valid header name
    pub fn validate(&self) -> Result<()> {
        if !(4..=64).contains(&self.alias_length) {
            anyhow::bail!(
                "ALIAS_LENGTH must be between 4 and 64, got {}",
                self.alias_length
            );
        }

        if !(1..=1000).contains(&self.alias_max_attempts) {
            anyhow::bail!(
                "ALIAS_MAX_ATTEMPTS must be between 1 and 1000, got {}",
                self.alias_max_attempts
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            anyhow::bail!(
                "BASE_URL must start with 'http://' or 'https://', got '{}'",
                self.base_url
            );
        }

        self.identity_header_name()?;

        Ok(())
    }

    /// Parsed form of [`Self::identity_header`].
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not a valid HTTP header name.
    pub fn identity_header_name(&self) -> Result<HeaderName> {
        HeaderName::from_str(&self.identity_header).with_context(|| {
            format!(
                "IDENTITY_HEADER must be a valid header name, got '{}'",
                self.identity_header
            )
        })
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Base URL: {}", self.base_url);
        match self.storage_backend {
            StorageBackend::File => {
                tracing::info!("  Storage: file ({})", self.storage_root.display())
            }
            StorageBackend::Memory => tracing::info!("  Storage: memory (not persisted)"),
        }
        tracing::info!("  Alias length: {}", self.alias_length);
        tracing::info!("  Alias max attempts: {}", self.alias_max_attempts);
        tracing::info!("  Identity header: {}", self.identity_header);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

fn parse_var(name: &str, default: usize) -> Result<usize> {
    match env::var(name) {
        Ok(value) => value
            .parse()
            .with_context(|| format!("{} must be a positive integer, got '{}'", name, value)),
        Err(_) => Ok(default),
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable cannot be parsed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: &[&str] = &[
        "LISTEN",
        "BASE_URL",
        "STORAGE_BACKEND",
        "STORAGE_ROOT",
        "ALIAS_LENGTH",
        "ALIAS_MAX_ATTEMPTS",
        "IDENTITY_HEADER",
        "LOG_FORMAT",
    ];

    fn clear_env() {
        // SAFETY: Tests touching the environment are run serially.
        unsafe {
            for var in VARS {
                env::remove_var(var);
            }
        }
    }

    fn valid_config() -> Config {
        Config {
            listen_addr: "0.0.0.0:3000".to_string(),
            base_url: "http://localhost:3000".to_string(),
            storage_backend: StorageBackend::File,
            storage_root: PathBuf::from("./data"),
            alias_length: 8,
            alias_max_attempts: 10,
            identity_header: "x-user-email".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = valid_config();
        assert!(config.validate().is_ok());

        config.alias_length = 3;
        assert!(config.validate().is_err());
        config.alias_length = 8;

        config.alias_max_attempts = 0;
        assert!(config.validate().is_err());
        config.alias_max_attempts = 10;

        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());
        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.listen_addr = "3000".to_string();
        assert!(config.validate().is_err());
        config.listen_addr = "0.0.0.0:3000".to_string();

        config.base_url = "ftp://sho.rt".to_string();
        assert!(config.validate().is_err());
        config.base_url = "https://sho.rt".to_string();

        config.identity_header = "bad header".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_storage_backend_parsing() {
        assert_eq!(
            "memory".parse::<StorageBackend>().unwrap(),
            StorageBackend::Memory
        );
        assert_eq!("FILE".parse::<StorageBackend>().unwrap(), StorageBackend::File);
        assert!("postgres".parse::<StorageBackend>().is_err());
        assert_eq!(StorageBackend::File.to_string(), "file");
    }

    #[test]
    #[serial]
    fn test_defaults() {
        clear_env();

        let config = Config::from_env().unwrap();

        assert_eq!(config.listen_addr, "0.0.0.0:3000");
        assert_eq!(config.storage_backend, StorageBackend::File);
        assert_eq!(config.storage_root, PathBuf::from("./data"));
        assert_eq!(config.alias_length, DEFAULT_ALIAS_LENGTH);
        assert_eq!(config.alias_max_attempts, DEFAULT_MAX_ATTEMPTS);
        assert_eq!(config.identity_header, "x-user-email");
    }

    #[test]
    #[serial]
    fn test_load_from_env_overrides() {
        clear_env();
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("STORAGE_BACKEND", "memory");
            env::set_var("STORAGE_ROOT", "/tmp/aliases");
            env::set_var("ALIAS_LENGTH", "12");
            env::set_var("ALIAS_MAX_ATTEMPTS", "25");
        }

        let config = load_from_env().unwrap();

        assert_eq!(config.storage_backend, StorageBackend::Memory);
        assert_eq!(config.storage_root, PathBuf::from("/tmp/aliases"));
        assert_eq!(config.alias_length, 12);
        assert_eq!(config.alias_max_attempts, 25);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_unparsable_number_is_an_error() {
        clear_env();
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("ALIAS_LENGTH", "eight");
        }

        let err = Config::from_env().unwrap_err();
        assert!(err.to_string().contains("ALIAS_LENGTH"));

        clear_env();
    }
}
