//! Short code generation, normalization and validation.
//!
//! Random codes are 6 lowercase hex characters drawn from the operating
//! system's entropy source. With 16.7 million possible codes a collision is
//! rare enough that retrying on collision is sufficient for uniqueness.

use crate::error::AppError;
use serde_json::json;

/// Number of random bytes behind a generated code (two hex chars per byte).
const CODE_LENGTH_BYTES: usize = 3;

/// Longest custom code accepted from clients.
const MAX_CUSTOM_CODE_LENGTH: usize = 32;

/// Path segments owned by the router; a short code with one of these names
/// would never be reachable through `GET /{code}`.
const RESERVED_CODES: &[&str] = &["shorturls", "api", "health"];

/// Generates a random 6-character lowercase hex code.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if the system random number generator is
/// unavailable.
pub fn generate_code() -> Result<String, AppError> {
    let mut buffer = [0u8; CODE_LENGTH_BYTES];

    getrandom::fill(&mut buffer).map_err(|e| {
        AppError::internal(
            "Failed to generate random short code",
            json!({ "reason": e.to_string() }),
        )
    })?;

    Ok(hex::encode(buffer))
}

/// Normalizes a caller-supplied code. Codes are case-insensitive and stored
/// in lowercase; nothing else is changed.
pub fn normalize_code(code: &str) -> String {
    code.to_lowercase()
}

/// Validates the format of a client-provided custom code.
///
/// This check belongs to the caller, not to the registry; the HTTP layer runs
/// it before handing the code over.
///
/// # Rules
///
/// - Length: 1-32 characters
/// - Allowed characters: ASCII letters, digits, `-` and `_`
/// - Cannot be a reserved route segment (compared case-insensitively)
///
/// # Errors
///
/// Returns [`AppError::InvalidInput`] if any rule is violated.
pub fn validate_custom_code(code: &str) -> Result<(), AppError> {
    if code.is_empty() || code.len() > MAX_CUSTOM_CODE_LENGTH {
        return Err(AppError::invalid_input(
            "Shortcode must be 1-32 characters",
            json!({ "provided_length": code.len() }),
        ));
    }

    if !code
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(AppError::invalid_input(
            "Shortcode can only contain letters, digits, hyphens and underscores",
            json!({ "shortcode": code }),
        ));
    }

    if RESERVED_CODES.contains(&normalize_code(code).as_str()) {
        return Err(AppError::invalid_input(
            "This shortcode is reserved",
            json!({ "shortcode": code }),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_code_has_correct_length() {
        let code = generate_code().unwrap();
        assert_eq!(code.len(), 6);
    }

    #[test]
    fn test_generate_code_is_lowercase_hex() {
        let code = generate_code().unwrap();
        assert!(
            code.chars()
                .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
        );
    }

    #[test]
    fn test_generate_code_mostly_unique() {
        let codes: HashSet<_> = (0..200).map(|_| generate_code().unwrap()).collect();
        // 200 draws from 2^24 values; a handful of collisions at most.
        assert!(codes.len() >= 195);
    }

    #[test]
    fn test_normalize_lowercases() {
        assert_eq!(normalize_code("ABC123"), "abc123");
        assert_eq!(normalize_code("My-Link_1"), "my-link_1");
    }

    #[test]
    fn test_validate_accepts_alphanumeric() {
        assert!(validate_custom_code("abc123").is_ok());
        assert!(validate_custom_code("ABC123").is_ok());
        assert!(validate_custom_code("a").is_ok());
    }

    #[test]
    fn test_validate_accepts_hyphen_and_underscore() {
        assert!(validate_custom_code("my-cool_link").is_ok());
    }

    #[test]
    fn test_validate_empty_string() {
        assert!(validate_custom_code("").is_err());
    }

    #[test]
    fn test_validate_too_long() {
        let code = "a".repeat(33);
        let err = validate_custom_code(&code).unwrap_err();
        assert!(err.to_string().contains("1-32 characters"));
    }

    #[test]
    fn test_validate_special_characters() {
        assert!(validate_custom_code("my code").is_err());
        assert!(validate_custom_code("a/b").is_err());
        assert!(validate_custom_code("caf\u{e9}").is_err());
    }

    #[test]
    fn test_validate_all_reserved_codes() {
        for &reserved in RESERVED_CODES {
            assert!(
                validate_custom_code(reserved).is_err(),
                "Reserved code '{}' should be invalid",
                reserved
            );
        }
        assert!(validate_custom_code("HEALTH").is_err());
    }
}
