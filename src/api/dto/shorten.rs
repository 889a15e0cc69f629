//! DTOs for the short URL creation endpoint.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::borrow::Cow;
use validator::{Validate, ValidationError};

use crate::domain::entities::{Entry, NewEntry};
use crate::error::AppError;
use crate::utils::code_generator::validate_custom_code;

/// Request to create a short URL.
///
/// # Example
///
/// ```json
/// { "url": "https://example.com/page", "validity": 60, "shortcode": "promo" }
/// ```
#[derive(Debug, Deserialize, Validate)]
pub struct CreateShortUrlRequest {
    /// Target URL. A missing value is rejected by the registry like an empty one.
    pub url: Option<String>,

    /// Lifetime in minutes. Kept as raw JSON so that non-integer values can
    /// be reported as input errors instead of body rejections.
    pub validity: Option<Value>,

    /// Optional custom short code. An empty string counts as absent.
    #[validate(custom(function = "validate_shortcode"))]
    pub shortcode: Option<String>,
}

impl CreateShortUrlRequest {
    /// Parses `validity` into whole minutes.
    ///
    /// Accepts JSON integers and integral floats such as `30.0`; `null` or a
    /// missing field yields `None`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidInput`] for strings, fractions, booleans and
    /// other non-integer values.
    pub fn validity_minutes(&self) -> Result<Option<i64>, AppError> {
        let Some(value) = &self.validity else {
            return Ok(None);
        };

        let minutes = match value {
            Value::Null => return Ok(None),
            Value::Number(n) => n.as_i64().or_else(|| {
                n.as_f64()
                    .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64)
                    .map(|f| f as i64)
            }),
            _ => None,
        };

        minutes.map(Some).ok_or_else(|| {
            AppError::invalid_input(
                "Validity must be a positive integer representing minutes",
                json!({ "validity": value }),
            )
        })
    }

    /// Custom code with empty strings treated as absent.
    pub fn custom_code(&self) -> Option<&str> {
        self.shortcode.as_deref().filter(|code| !code.is_empty())
    }

    /// Converts the request into registry input.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidInput`] if `validity` is not an integer.
    pub fn into_new_entry(self) -> Result<NewEntry, AppError> {
        let validity_minutes = self.validity_minutes()?;
        let custom_code = self.custom_code().map(str::to_string);

        Ok(NewEntry {
            target_url: self.url.unwrap_or_default(),
            validity_minutes,
            custom_code,
        })
    }
}

fn validate_shortcode(code: &str) -> Result<(), ValidationError> {
    if code.is_empty() {
        return Ok(());
    }

    validate_custom_code(code).map_err(|e| {
        ValidationError::new("shortcode").with_message(Cow::Owned(e.to_string()))
    })
}

/// Response returned after a successful create.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateShortUrlResponse {
    pub short_link: String,
    pub code: String,
    /// Expiry instant, RFC 3339.
    pub expiry: String,
}

impl CreateShortUrlResponse {
    pub fn new(base_url: &str, entry: &Entry) -> Self {
        Self {
            short_link: format!("{}/{}", base_url.trim_end_matches('/'), entry.code),
            code: entry.code.clone(),
            expiry: entry.expires_at.to_rfc3339(),
        }
    }
}
