//! DTOs for alias listing.

use serde::Serialize;

use crate::domain::entities::UrlAlias;

/// One alias owned by the caller.
#[derive(Debug, Serialize)]
pub struct AliasItem {
    pub alias: String,
    pub url: String,
    pub owner: String,
    pub short_url: String,
}

impl AliasItem {
    pub fn from_alias(alias: UrlAlias, short_url: String) -> Self {
        Self {
            alias: alias.alias,
            url: alias.target_url,
            owner: alias.owner,
            short_url,
        }
    }
}

/// All aliases owned by the caller, sorted by alias.
#[derive(Debug, Serialize)]
pub struct AliasListResponse {
    pub total: usize,
    pub items: Vec<AliasItem>,
}
