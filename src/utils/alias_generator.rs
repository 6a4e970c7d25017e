//! Random alias generation and validation of user-chosen aliases.

use rand::Rng;
use rand::distr::Alphanumeric;
use std::sync::LazyLock;

use regex::Regex;

use crate::domain::errors::AliasError;

/// Default length of randomly generated aliases.
pub const DEFAULT_ALIAS_LENGTH: usize = 8;

/// Maximum length of a user-chosen alias.
pub const MAX_CUSTOM_ALIAS_LENGTH: usize = 64;

/// Aliases that collide with static routes under `/urls`.
pub const RESERVED_ALIASES: &[&str] = &["shorten"];

/// Characters allowed in user-chosen aliases.
pub static CUSTOM_ALIAS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("alias regex is valid"));

/// Source of candidate aliases for random allocation.
#[cfg_attr(test, mockall::automock)]
pub trait AliasGenerator: Send + Sync {
    /// Produces the next candidate alias.
    fn generate(&self) -> String;
}

/// Generates fixed-length aliases of i.i.d. uniform symbols from `[0-9A-Za-z]`.
#[derive(Debug, Clone)]
pub struct RandomAliasGenerator {
    length: usize,
}

impl RandomAliasGenerator {
    pub fn new(length: usize) -> Self {
        Self { length }
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

impl Default for RandomAliasGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_ALIAS_LENGTH)
    }
}

impl AliasGenerator for RandomAliasGenerator {
    fn generate(&self) -> String {
        rand::rng()
            .sample_iter(&Alphanumeric)
            .take(self.length)
            .map(char::from)
            .collect()
    }
}

/// Validates a user-chosen alias.
///
/// # Rules
///
/// - Length: 1-64 characters
/// - Allowed characters: ASCII letters, digits, `-` and `_`
/// - Not one of [`RESERVED_ALIASES`]
///
/// # Errors
///
/// Returns [`AliasError::Validation`] if any rule is violated.
pub fn validate_custom_alias(alias: &str) -> Result<(), AliasError> {
    if alias.is_empty() || alias.len() > MAX_CUSTOM_ALIAS_LENGTH {
        return Err(AliasError::Validation(format!(
            "alias must be 1-{} characters, got {}",
            MAX_CUSTOM_ALIAS_LENGTH,
            alias.len()
        )));
    }

    if !CUSTOM_ALIAS_REGEX.is_match(alias) {
        return Err(AliasError::Validation(
            "alias can only contain letters, digits, hyphens and underscores".to_string(),
        ));
    }

    if RESERVED_ALIASES.contains(&alias) {
        return Err(AliasError::Validation(format!("alias '{}' is reserved", alias)));
    }

    Ok(())
}
