//! Target URL validation.

use url::Url;

/// Errors produced when checking a target URL.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum UrlValidationError {
    #[error("URL is required")]
    Empty,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),
}

/// Checks that `input` is a syntactically valid absolute URL.
///
/// The URL is only checked, never rewritten: the registry stores and
/// redirects to exactly what the caller supplied. Any scheme the URL parser
/// accepts as absolute is allowed.
///
/// # Errors
///
/// Returns [`UrlValidationError::Empty`] for an empty string and
/// [`UrlValidationError::InvalidFormat`] for relative or malformed input.
///
/// # Examples
///
/// ```ignore
/// assert!(validate_target_url("https://example.com/page").is_ok());
/// assert!(validate_target_url("not-a-url").is_err());
/// ```
pub fn validate_target_url(input: &str) -> Result<(), UrlValidationError> {
    if input.is_empty() {
        return Err(UrlValidationError::Empty);
    }

    // The parser strips tabs and newlines, but the stored input must stay a
    // valid `Location` header value.
    if input.chars().any(char::is_control) {
        return Err(UrlValidationError::InvalidFormat(
            "URL contains control characters".to_string(),
        ));
    }

    Url::parse(input)
        .map(|_| ())
        .map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))
}
