//! DTOs for the alias creation endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::alias_generator::CUSTOM_ALIAS_REGEX;

/// Request to shorten a URL.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL to shorten (must be valid HTTP/HTTPS).
    #[validate(url(message = "Invalid URL format"))]
    pub url: String,

    /// Optional user-chosen alias. A random one is generated when absent.
    #[validate(length(min = 1, max = 64))]
    #[validate(regex(path = *CUSTOM_ALIAS_REGEX))]
    pub alias: Option<String>,
}

/// Response for a created alias.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub alias: String,
    pub short_url: String,
}
