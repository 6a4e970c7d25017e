//! Target URL validation.
//!
//! URLs are checked but stored exactly as submitted, so what a user shortens
//! is byte-for-byte what the redirect returns.

use url::Url;

use crate::domain::errors::AliasError;

/// Maximum accepted length of a target URL.
pub const MAX_URL_LENGTH: usize = 2048;

/// Checks that `input` is an absolute HTTP(S) URL with a host.
///
/// # Security
///
/// Rejects schemes such as `javascript:`, `data:` and `file:` that would turn
/// a redirect into script execution or local file access.
///
/// # Errors
///
/// Returns [`AliasError::Validation`] for malformed, oversized, host-less or
/// non-HTTP(S) URLs, and for any URL containing whitespace or control characters.
pub fn validate_target_url(input: &str) -> Result<(), AliasError> {
    if input.len() > MAX_URL_LENGTH {
        return Err(AliasError::Validation(format!(
            "URL must be at most {} characters",
            MAX_URL_LENGTH
        )));
    }

    // Url::parse drops tabs and newlines, but the raw input is what gets
    // stored and later sent back as a Location header.
    if input.chars().any(|c| c.is_control() || c.is_whitespace()) {
        return Err(AliasError::Validation(
            "URL must not contain whitespace or control characters".to_string(),
        ));
    }

    let url = Url::parse(input)
        .map_err(|e| AliasError::Validation(format!("invalid URL format: {e}")))?;

    match url.scheme() {
        "http" | "https" => {}
        other => {
            return Err(AliasError::Validation(format!(
                "only HTTP and HTTPS URLs are allowed, got '{other}'"
            )));
        }
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(AliasError::Validation("URL must have a host".to_string()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_http_and_https() {
        assert!(validate_target_url("https://example.com").is_ok());
        assert!(validate_target_url("http://example.com/path?q=1#frag").is_ok());
        assert!(validate_target_url("https://EXAMPLE.com:8443/Path").is_ok());
    }

    #[test]
    fn test_rejects_relative_url() {
        let err = validate_target_url("not-a-url").unwrap_err();
        assert!(err.to_string().contains("invalid URL format"));
    }

    #[test]
    fn test_rejects_dangerous_schemes() {
        for input in [
            "javascript:alert(1)",
            "data:text/html,hi",
            "file:///etc/passwd",
            "ftp://example.com",
        ] {
            assert!(
                matches!(validate_target_url(input), Err(AliasError::Validation(_))),
                "{input} should be rejected"
            );
        }
    }

    #[test]
    fn test_rejects_oversized_url() {
        let input = format!("https://example.com/{}", "a".repeat(MAX_URL_LENGTH));
        assert!(validate_target_url(&input).is_err());
    }

    #[test]
    fn test_rejects_embedded_whitespace_and_control_characters() {
        for input in [
            "https://example.com/a\nb",
            "https://example.com/a\tb",
            "https://example.com/a\rb",
            "https://example.com/a b",
            " https://example.com",
            "https://example.com/\u{7f}",
        ] {
            let err = validate_target_url(input).unwrap_err();
            assert!(
                err.to_string().contains("whitespace or control"),
                "{input:?} should be rejected"
            );
        }
    }
}
