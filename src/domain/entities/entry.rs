//! Entry entity representing one short-code mapping.

use chrono::{DateTime, Duration, Utc};

/// A stored short-code mapping with its time-to-live.
///
/// Entries are write-once: the store hands out clones and never mutates a
/// stored value. Expiry is logical only, so an expired entry keeps being
/// returned by lookups and reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub code: String,
    pub target_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub validity_minutes: u32,
}

impl Entry {
    /// Creates an entry valid for `validity_minutes` starting at `created_at`.
    ///
    /// Returns `None` when the validity is zero or the expiry would fall
    /// outside the representable time range.
    pub fn new(
        code: String,
        target_url: String,
        created_at: DateTime<Utc>,
        validity_minutes: u32,
    ) -> Option<Self> {
        if validity_minutes == 0 {
            return None;
        }

        let expires_at =
            created_at.checked_add_signed(Duration::try_minutes(i64::from(validity_minutes))?)?;

        Some(Self {
            code,
            target_url,
            created_at,
            expires_at,
            validity_minutes,
        })
    }

    /// Returns true once `now` is strictly past the expiry instant.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }
}

/// Input for creating an entry through the registry.
#[derive(Debug, Clone, Default)]
pub struct NewEntry {
    pub target_url: String,
    /// `None` falls back to the registry's default validity.
    pub validity_minutes: Option<i64>,
    pub custom_code: Option<String>,
}

impl NewEntry {
    pub fn new(target_url: impl Into<String>) -> Self {
        Self {
            target_url: target_url.into(),
            ..Self::default()
        }
    }

    pub fn with_validity(mut self, minutes: i64) -> Self {
        self.validity_minutes = Some(minutes);
        self
    }

    pub fn with_custom_code(mut self, code: impl Into<String>) -> Self {
        self.custom_code = Some(code.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_creation() {
        let now = Utc::now();
        let entry = Entry::new(
            "abc123".to_string(),
            "https://example.com/page".to_string(),
            now,
            30,
        )
        .unwrap();

        assert_eq!(entry.code, "abc123");
        assert_eq!(entry.target_url, "https://example.com/page");
        assert_eq!(entry.created_at, now);
        assert_eq!(entry.expires_at, now + Duration::minutes(30));
        assert!(entry.expires_at > entry.created_at);
        assert!(!entry.is_expired_at(now));
    }

    #[test]
    fn test_entry_rejects_zero_validity() {
        let entry = Entry::new("x".to_string(), "https://a.b".to_string(), Utc::now(), 0);
        assert!(entry.is_none());
    }

    #[test]
    fn test_entry_expiry_boundary() {
        let now = Utc::now();
        let entry = Entry::new("x".to_string(), "https://a.b".to_string(), now, 1).unwrap();

        assert!(!entry.is_expired_at(entry.expires_at));
        assert!(entry.is_expired_at(entry.expires_at + Duration::milliseconds(1)));
    }

    #[test]
    fn test_entry_created_in_past_is_expired() {
        let created = Utc::now() - Duration::minutes(2);
        let entry = Entry::new("old".to_string(), "https://a.b".to_string(), created, 1).unwrap();
        assert!(entry.is_expired_at(Utc::now()));
    }

    #[test]
    fn test_new_entry_builder() {
        let new_entry = NewEntry::new("https://rust-lang.org")
            .with_validity(5)
            .with_custom_code("Rust");

        assert_eq!(new_entry.target_url, "https://rust-lang.org");
        assert_eq!(new_entry.validity_minutes, Some(5));
        assert_eq!(new_entry.custom_code.as_deref(), Some("Rust"));
    }
}
