//! Repository trait for alias storage.

use crate::domain::entities::UrlAlias;
use crate::domain::errors::AliasError;

/// Uniqueness-enforcing keyed storage for [`UrlAlias`] records.
///
/// Every operation is synchronous and atomic with respect to concurrent
/// callers. Implementations never expose their underlying map.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MemoryAliasRepository`] - volatile, for tests
/// - [`crate::infrastructure::persistence::FileAliasRepository`] - durable JSON snapshot
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait AliasRepository: Send + Sync {
    /// Inserts a record if its key is free.
    ///
    /// # Errors
    ///
    /// Returns [`AliasError::AlreadyExists`] if the key is taken.
    /// Durable backings return [`AliasError::Io`] if the snapshot cannot be written;
    /// the insert is rolled back in that case.
    fn create(&self, alias: UrlAlias) -> Result<(), AliasError>;

    /// Looks up a record by key. Never fails.
    fn find(&self, alias: &str) -> Option<UrlAlias>;

    /// Removes a record owned by `owner`.
    ///
    /// Returns `Ok(true)` if the record was removed, `Ok(false)` if no record
    /// with that key exists.
    ///
    /// # Errors
    ///
    /// Returns [`AliasError::PermissionDenied`] if the key exists but belongs
    /// to another owner. Durable backings return [`AliasError::Io`] if the
    /// snapshot cannot be written.
    fn delete(&self, owner: &str, alias: &str) -> Result<bool, AliasError>;

    /// Returns every record owned by `owner`, in no particular order.
    fn list_by_owner(&self, owner: &str) -> Vec<UrlAlias>;

    /// Number of live records.
    fn count(&self) -> usize;
}
