//! File-backed alias repository persisting a whole-map JSON snapshot.

use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use parking_lot::RwLock;
use tracing::{debug, error, info};

use super::alias_table::AliasTable;
use crate::domain::entities::UrlAlias;
use crate::domain::errors::AliasError;
use crate::domain::repositories::AliasRepository;

/// Name of the snapshot file inside the storage root.
pub const SNAPSHOT_FILE_NAME: &str = "alias-repository.json";

/// Durable alias storage.
///
/// The full map is loaded into memory on [`open`](Self::open) and the whole
/// snapshot is rewritten after every successful mutation. Reads never touch
/// disk. The rewrite happens while the write lock is held, so concurrent
/// mutations never interleave file writes.
///
/// # Snapshot format
///
/// ```json
/// {
///   "short": { "alias": "short", "url": "https://example.com", "email": "aaa@bbb.com" }
/// }
/// ```
///
/// An empty store is `{}`.
#[derive(Debug)]
pub struct FileAliasRepository {
    path: PathBuf,
    table: RwLock<AliasTable>,
}

impl FileAliasRepository {
    /// Opens the snapshot under `storage_root`, creating an empty one on first boot.
    ///
    /// # Errors
    ///
    /// Returns [`AliasError::Io`] if the storage root or snapshot cannot be
    /// read or created, and [`AliasError::Corrupt`] if the snapshot does not
    /// decode. No partial recovery is attempted.
    pub fn open(storage_root: impl AsRef<Path>) -> Result<Self, AliasError> {
        let root = storage_root.as_ref();
        fs::create_dir_all(root).map_err(|e| AliasError::io(root, e))?;

        let path = root.join(SNAPSHOT_FILE_NAME);

        let table = match fs::read(&path) {
            Ok(bytes) => decode_snapshot(&path, &bytes)?,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                let table = AliasTable::default();
                write_snapshot(&path, &table)?;
                info!(path = %path.display(), "Created empty alias snapshot");
                table
            }
            Err(e) => return Err(AliasError::io(&path, e)),
        };

        info!(
            path = %path.display(),
            aliases = table.len(),
            "Alias snapshot loaded"
        );

        Ok(Self {
            path,
            table: RwLock::new(table),
        })
    }

    /// Opens the snapshot under `storage_root` only if it already exists.
    ///
    /// Returns `Ok(None)` without creating the root or the file when there is
    /// no snapshot yet.
    ///
    /// # Errors
    ///
    /// Same as [`open`](Self::open) for an existing snapshot.
    pub fn open_existing(storage_root: impl AsRef<Path>) -> Result<Option<Self>, AliasError> {
        let root = storage_root.as_ref();
        let path = root.join(SNAPSHOT_FILE_NAME);

        match path.try_exists() {
            Ok(true) => Self::open(root).map(Some),
            Ok(false) => Ok(None),
            Err(e) => Err(AliasError::io(&path, e)),
        }
    }

    /// Path of the snapshot file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, table: &AliasTable) -> Result<(), AliasError> {
        write_snapshot(&self.path, table).inspect_err(|e| {
            error!(path = %self.path.display(), error = %e, "Failed to persist alias snapshot");
        })
    }
}

impl AliasRepository for FileAliasRepository {
    fn create(&self, alias: UrlAlias) -> Result<(), AliasError> {
        let mut table = self.table.write();
        let key = alias.alias.clone();

        table.insert_unique(alias)?;

        if let Err(e) = self.persist(&table) {
            table.discard(&key);
            return Err(e);
        }

        debug!(alias = %key, "Alias persisted");
        Ok(())
    }

    fn find(&self, alias: &str) -> Option<UrlAlias> {
        self.table.read().get(alias)
    }

    fn delete(&self, owner: &str, alias: &str) -> Result<bool, AliasError> {
        let mut table = self.table.write();

        let Some(removed) = table.remove_owned(owner, alias)? else {
            return Ok(false);
        };

        if let Err(e) = self.persist(&table) {
            table.restore(removed);
            return Err(e);
        }

        debug!(alias, "Alias removal persisted");
        Ok(true)
    }

    fn list_by_owner(&self, owner: &str) -> Vec<UrlAlias> {
        self.table.read().owned_by(owner)
    }

    fn count(&self) -> usize {
        self.table.read().len()
    }
}

fn decode_snapshot(path: &Path, bytes: &[u8]) -> Result<AliasTable, AliasError> {
    let entries: HashMap<String, UrlAlias> =
        serde_json::from_slice(bytes).map_err(|e| AliasError::corrupt(path, e))?;

    AliasTable::from_snapshot(entries)
        .map_err(|reason| AliasError::corrupt(path, serde::de::Error::custom(reason)))
}

/// Replaces the snapshot atomically: write a sibling temp file, sync it, rename.
fn write_snapshot(path: &Path, table: &AliasTable) -> Result<(), AliasError> {
    let json = serde_json::to_vec_pretty(&table.snapshot())
        .map_err(|e| AliasError::io(path, e.into()))?;

    let tmp_path = path.with_extension("json.tmp");

    let mut file = File::create(&tmp_path).map_err(|e| AliasError::io(&tmp_path, e))?;
    file.write_all(&json)
        .and_then(|()| file.sync_all())
        .map_err(|e| AliasError::io(&tmp_path, e))?;
    drop(file);

    fs::rename(&tmp_path, path).map_err(|e| AliasError::io(path, e))
}
