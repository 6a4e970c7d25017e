//! Keyed alias map shared by the in-memory and file-backed repositories.

use std::collections::{BTreeMap, HashMap};

use crate::domain::entities::UrlAlias;
use crate::domain::errors::AliasError;

/// Alias records keyed by alias string.
///
/// Not thread-safe on its own; repositories wrap it in a lock and call the
/// check-and-mutate methods while holding the write guard.
#[derive(Debug, Default)]
pub(crate) struct AliasTable {
    entries: HashMap<String, UrlAlias>,
}

impl AliasTable {
    /// Builds a table from a decoded snapshot, rejecting entries whose key
    /// disagrees with the record's own `alias` field.
    pub(crate) fn from_snapshot(entries: HashMap<String, UrlAlias>) -> Result<Self, String> {
        if let Some((key, record)) = entries.iter().find(|(key, record)| **key != record.alias) {
            return Err(format!(
                "snapshot key '{}' does not match record alias '{}'",
                key, record.alias
            ));
        }

        Ok(Self { entries })
    }

    /// Sorted view of the table for serialization.
    pub(crate) fn snapshot(&self) -> BTreeMap<&str, &UrlAlias> {
        self.entries
            .iter()
            .map(|(key, record)| (key.as_str(), record))
            .collect()
    }

    pub(crate) fn insert_unique(&mut self, alias: UrlAlias) -> Result<(), AliasError> {
        if self.entries.contains_key(&alias.alias) {
            return Err(AliasError::AlreadyExists(alias.alias));
        }

        self.entries.insert(alias.alias.clone(), alias);
        Ok(())
    }

    pub(crate) fn get(&self, alias: &str) -> Option<UrlAlias> {
        self.entries.get(alias).cloned()
    }

    /// Removes `alias` if `owner` owns it.
    ///
    /// Returns `Ok(None)` when the key is absent and the removed record otherwise.
    pub(crate) fn remove_owned(
        &mut self,
        owner: &str,
        alias: &str,
    ) -> Result<Option<UrlAlias>, AliasError> {
        match self.entries.get(alias) {
            None => Ok(None),
            Some(record) if !record.is_owned_by(owner) => {
                Err(AliasError::PermissionDenied(alias.to_string()))
            }
            Some(_) => Ok(self.entries.remove(alias)),
        }
    }

    /// Drops a record unconditionally. Used to undo an insert whose persist failed.
    pub(crate) fn discard(&mut self, alias: &str) {
        self.entries.remove(alias);
    }

    /// Puts back a record removed by [`Self::remove_owned`]. Used to undo a
    /// delete whose persist failed.
    pub(crate) fn restore(&mut self, alias: UrlAlias) {
        self.entries.insert(alias.alias.clone(), alias);
    }

    pub(crate) fn owned_by(&self, owner: &str) -> Vec<UrlAlias> {
        self.entries
            .values()
            .filter(|record| record.is_owned_by(owner))
            .cloned()
            .collect()
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}
