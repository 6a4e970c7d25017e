//! Alias creation, resolution, deletion and listing.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::entities::UrlAlias;
use crate::domain::errors::AliasError;
use crate::domain::repositories::AliasRepository;
use crate::utils::alias_generator::{
    AliasGenerator, RESERVED_ALIASES, RandomAliasGenerator, validate_custom_alias,
};
use crate::utils::url_validator::validate_target_url;

/// Default cap on random allocation attempts.
pub const DEFAULT_MAX_ATTEMPTS: usize = 10;

/// Business rules for aliases on top of an [`AliasRepository`].
///
/// Holds no alias state of its own; the repository is the single source of truth.
pub struct AliasService<R: AliasRepository + ?Sized> {
    repository: Arc<R>,
    generator: Box<dyn AliasGenerator>,
    max_attempts: usize,
}

impl<R: AliasRepository + ?Sized> AliasService<R> {
    /// Creates a service with the default random generator and retry cap.
    pub fn new(repository: Arc<R>) -> Self {
        Self::with_generator(
            repository,
            Box::new(RandomAliasGenerator::default()),
            DEFAULT_MAX_ATTEMPTS,
        )
    }

    /// Creates a service with an explicit generator and retry cap.
    pub fn with_generator(
        repository: Arc<R>,
        generator: Box<dyn AliasGenerator>,
        max_attempts: usize,
    ) -> Self {
        Self {
            repository,
            generator,
            max_attempts,
        }
    }

    /// Creates an alias for `target_url` owned by `owner`.
    ///
    /// With `requested_alias`, exactly that key is used. Without it a random
    /// alphanumeric key is generated, retrying on collision up to the
    /// configured cap.
    ///
    /// Returns the accepted key.
    ///
    /// # Errors
    ///
    /// - [`AliasError::Validation`] if the owner is blank, the URL is not
    ///   HTTP(S), or the requested alias is malformed
    /// - [`AliasError::AlreadyExists`] if the requested alias is taken
    /// - [`AliasError::AllocationExhausted`] if every random candidate collided
    /// - [`AliasError::Io`] if the durable backing fails to persist
    pub fn create_alias(
        &self,
        owner: &str,
        target_url: &str,
        requested_alias: Option<&str>,
    ) -> Result<String, AliasError> {
        validate_owner(owner)?;
        validate_target_url(target_url)?;

        let alias = match requested_alias {
            Some(alias) => {
                validate_custom_alias(alias)?;
                self.repository
                    .create(UrlAlias::new(alias, target_url, owner))?;
                alias.to_string()
            }
            None => self.allocate_random(owner, target_url)?,
        };

        info!(alias = %alias, owner, "Alias created");
        Ok(alias)
    }

    /// Returns the target URL for `alias`, or `None` if it does not exist.
    pub fn resolve_url(&self, alias: &str) -> Option<String> {
        let found = self.repository.find(alias).map(|record| record.target_url);
        debug!(alias, found = found.is_some(), "Alias lookup");
        found
    }

    /// Deletes `alias` if `owner` owns it.
    ///
    /// Returns `Ok(false)` both when the alias does not exist and when it
    /// belongs to someone else; callers cannot tell the two apart.
    ///
    /// # Errors
    ///
    /// Returns [`AliasError::Io`] if the durable backing fails to persist.
    pub fn delete_owned_alias(&self, owner: &str, alias: &str) -> Result<bool, AliasError> {
        match self.repository.delete(owner, alias) {
            Ok(true) => {
                info!(alias, owner, "Alias deleted");
                Ok(true)
            }
            Ok(false) => {
                debug!(alias, owner, "Delete of missing alias");
                Ok(false)
            }
            Err(AliasError::PermissionDenied(_)) => {
                debug!(alias, owner, "Delete of alias owned by another user");
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }

    /// Returns every alias owned by `owner`, in no particular order.
    pub fn list_owned_aliases(&self, owner: &str) -> Vec<UrlAlias> {
        self.repository.list_by_owner(owner)
    }

    /// Number of live aliases across all owners.
    pub fn alias_count(&self) -> usize {
        self.repository.count()
    }

    fn allocate_random(&self, owner: &str, target_url: &str) -> Result<String, AliasError> {
        for attempt in 1..=self.max_attempts {
            let candidate = self.generator.generate();

            if RESERVED_ALIASES.contains(&candidate.as_str()) {
                debug!(attempt, candidate = %candidate, "Random alias is reserved, retrying");
                continue;
            }

            match self
                .repository
                .create(UrlAlias::new(candidate.as_str(), target_url, owner))
            {
                Ok(()) => return Ok(candidate),
                Err(AliasError::AlreadyExists(_)) => {
                    debug!(attempt, candidate = %candidate, "Random alias collided, retrying");
                }
                Err(e) => return Err(e),
            }
        }

        warn!(
            attempts = self.max_attempts,
            "Random alias allocation exhausted"
        );
        Err(AliasError::AllocationExhausted(self.max_attempts))
    }
}

fn validate_owner(owner: &str) -> Result<(), AliasError> {
    if owner.trim().is_empty() {
        return Err(AliasError::Validation("owner must not be empty".to_string()));
    }
    Ok(())
}
