//! Error taxonomy for alias storage and allocation.

use std::path::PathBuf;

/// Errors raised by alias repositories and [`crate::application::services::AliasService`].
///
/// Not-found conditions are deliberately absent: lookups return `Option` and
/// deletes return `bool`.
#[derive(Debug, thiserror::Error)]
pub enum AliasError {
    /// The requested key is already taken.
    #[error("Alias '{0}' is already taken")]
    AlreadyExists(String),

    /// The key exists but belongs to another owner.
    #[error("Alias '{0}' belongs to another user")]
    PermissionDenied(String),

    /// Random allocation hit the retry cap without finding a free key.
    #[error("Failed to allocate a free alias after {0} attempts")]
    AllocationExhausted(usize),

    /// Caller input was rejected before touching storage.
    #[error("Invalid input: {0}")]
    Validation(String),

    /// Reading or writing the snapshot file failed.
    #[error("Snapshot I/O failed at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The snapshot file exists but cannot be decoded.
    #[error("Snapshot at {} is corrupt: {source}", path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl AliasError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn corrupt(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Corrupt {
            path: path.into(),
            source,
        }
    }

    /// Returns true for storage faults that must not be masked as routine outcomes.
    pub fn is_storage_fault(&self) -> bool {
        matches!(self, Self::Io { .. } | Self::Corrupt { .. })
    }
}
