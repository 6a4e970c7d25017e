//! In-memory alias repository for testing.

use parking_lot::RwLock;
use tracing::debug;

use super::alias_table::AliasTable;
use crate::domain::entities::UrlAlias;
use crate::domain::errors::AliasError;
use crate::domain::repositories::AliasRepository;

/// Volatile alias storage backed by a lock-guarded map.
///
/// Contents live as long as the process. Writes take the exclusive lock for
/// the whole check-and-mutate step; reads share the lock.
#[derive(Debug, Default)]
pub struct MemoryAliasRepository {
    table: RwLock<AliasTable>,
}

impl MemoryAliasRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        debug!("Using in-memory alias storage");
        Self::default()
    }
}

impl AliasRepository for MemoryAliasRepository {
    fn create(&self, alias: UrlAlias) -> Result<(), AliasError> {
        self.table.write().insert_unique(alias)
    }

    fn find(&self, alias: &str) -> Option<UrlAlias> {
        self.table.read().get(alias)
    }

    fn delete(&self, owner: &str, alias: &str) -> Result<bool, AliasError> {
        Ok(self.table.write().remove_owned(owner, alias)?.is_some())
    }

    fn list_by_owner(&self, owner: &str) -> Vec<UrlAlias> {
        self.table.read().owned_by(owner)
    }

    fn count(&self) -> usize {
        self.table.read().len()
    }
}
