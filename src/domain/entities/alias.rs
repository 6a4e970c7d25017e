//! Alias entity representing a shortened URL mapping owned by a user.

use serde::{Deserialize, Serialize};

/// A short alias pointing at a target URL.
///
/// Records are immutable once stored; the only state change is deletion.
/// The serialized field names (`alias`, `url`, `email`) are the on-disk
/// snapshot format used by [`crate::infrastructure::persistence::FileAliasRepository`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlAlias {
    /// Globally unique short key.
    pub alias: String,

    /// Original long URL.
    #[serde(rename = "url")]
    pub target_url: String,

    /// Email of the user who created the alias.
    #[serde(rename = "email")]
    pub owner: String,
}

impl UrlAlias {
    /// Creates a new alias record.
    pub fn new(
        alias: impl Into<String>,
        target_url: impl Into<String>,
        owner: impl Into<String>,
    ) -> Self {
        Self {
            alias: alias.into(),
            target_url: target_url.into(),
            owner: owner.into(),
        }
    }

    /// Returns true if `email` owns this alias.
    pub fn is_owned_by(&self, email: &str) -> bool {
        self.owner == email
    }
}
