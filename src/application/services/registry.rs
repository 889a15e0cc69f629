//! Short-code registry: create, resolve, and report on short links.

use std::sync::Arc;

use chrono::Utc;
use serde_json::json;
use tracing::{debug, info, warn};

use crate::application::telemetry::Telemetry;
use crate::domain::entities::{AccessEvent, Entry, NewEntry, Report, RequestContext};
use crate::domain::repositories::{AccessLog, EntryStore};
use crate::error::AppError;
use crate::utils::code_generator::{generate_code, normalize_code};
use crate::utils::url_validator::{UrlValidationError, validate_target_url};

/// Validity applied when a create request does not specify one.
pub const DEFAULT_VALIDITY_MINUTES: u32 = 30;

/// Upper bound on random code draws per create call.
const MAX_GENERATION_ATTEMPTS: usize = 16;

/// Telemetry component name for registry operations.
const COMPONENT: &str = "controller";

/// Composition root of the short-code registry.
///
/// Owns the entry store and the access log and exposes the four registry
/// operations. All operations are synchronous and only wait on in-memory
/// locks; telemetry is handed off without waiting.
pub struct Registry<S: EntryStore, A: AccessLog> {
    entry_store: Arc<S>,
    access_log: Arc<A>,
    telemetry: Telemetry,
    default_validity_minutes: u32,
}

impl<S: EntryStore, A: AccessLog> Registry<S, A> {
    pub fn new(entry_store: Arc<S>, access_log: Arc<A>, telemetry: Telemetry) -> Self {
        Self {
            entry_store,
            access_log,
            telemetry,
            default_validity_minutes: DEFAULT_VALIDITY_MINUTES,
        }
    }

    /// Overrides the validity used when a request leaves it out.
    pub fn with_default_validity(mut self, minutes: u32) -> Self {
        self.default_validity_minutes = minutes.max(1);
        self
    }

    pub fn telemetry(&self) -> &Telemetry {
        &self.telemetry
    }

    /// Creates a new short-code entry.
    ///
    /// # Code Selection
    ///
    /// - A custom code is lowercased and used as-is (format checks are the
    ///   caller's job)
    /// - Otherwise a random 6-character hex code is drawn, retrying on
    ///   collision up to 16 times
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidInput`] if:
    /// - The URL is empty or not an absolute URL
    /// - The validity is not a positive integer or is out of range
    ///
    /// Returns [`AppError::CodeCollision`] if the custom code is taken,
    /// including when a concurrent create claims it first.
    ///
    /// Returns [`AppError::Internal`] if no free random code was found.
    pub fn create(&self, new_entry: NewEntry) -> Result<Entry, AppError> {
        if let Err(e) = validate_target_url(&new_entry.target_url) {
            let message = match e {
                UrlValidationError::Empty => "Missing URL in request",
                UrlValidationError::InvalidFormat(_) => "Invalid URL format provided",
            };
            self.telemetry.error(COMPONENT, message);
            return Err(AppError::invalid_input(
                e.to_string(),
                json!({ "url": new_entry.target_url }),
            ));
        }

        let validity_minutes = self.validity_minutes(new_entry.validity_minutes)?;

        let entry = match new_entry.custom_code {
            Some(custom) => {
                let code = normalize_code(&custom);

                if self.entry_store.exists(&code)? {
                    return Err(self.collision(&code));
                }

                let entry = self.build_entry(code, &new_entry.target_url, validity_minutes)?;
                self.store(entry.clone()).map_err(|e| match e {
                    AppError::CodeCollision { .. } => self.collision(&entry.code),
                    other => other,
                })?;
                entry
            }
            None => self.store_with_generated_code(&new_entry.target_url, validity_minutes)?,
        };

        info!(code = %entry.code, expires_at = %entry.expires_at, "Short URL created");
        self.telemetry
            .info(COMPONENT, format!("Short URL created: {}", entry.code));

        Ok(entry)
    }

    /// Resolves a code to its target URL and records the access.
    ///
    /// The access event is appended before this returns, so any later
    /// [`Self::stats`] call observes it.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for unknown codes and
    /// [`AppError::Expired`] once the entry's validity has lapsed. Expired
    /// entries are kept for reporting.
    pub fn resolve(&self, code: &str, context: RequestContext) -> Result<String, AppError> {
        let Some(entry) = self.entry_store.get(code)? else {
            debug!(code, "Short URL not found");
            self.telemetry
                .warn(COMPONENT, format!("Short URL not found: {code}"));
            return Err(AppError::not_found(
                "Short URL not found",
                json!({ "code": code }),
            ));
        };

        let now = Utc::now();
        if entry.is_expired_at(now) {
            debug!(code = %entry.code, expired_at = %entry.expires_at, "Expired URL accessed");
            self.telemetry
                .warn(COMPONENT, format!("Expired URL accessed: {code}"));
            return Err(AppError::expired(
                "Short URL has expired",
                json!({ "code": entry.code, "expired_at": entry.expires_at }),
            ));
        }

        self.access_log
            .append(&entry.code, AccessEvent::from_context(context, now))?;

        debug!(code = %entry.code, target = %entry.target_url, "URL redirected");
        self.telemetry
            .info(COMPONENT, format!("URL redirected: {code}"));

        Ok(entry.target_url)
    }

    /// Returns the report for one code, whether or not it has expired.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code was never created.
    pub fn stats(&self, code: &str) -> Result<Report, AppError> {
        let Some(entry) = self.entry_store.get(code)? else {
            self.telemetry.warn(
                COMPONENT,
                format!("Statistics requested for non-existent URL: {code}"),
            );
            return Err(AppError::not_found(
                "Short URL not found",
                json!({ "code": code }),
            ));
        };

        let report = self.report(entry)?;
        self.telemetry
            .info(COMPONENT, format!("Statistics retrieved for: {code}"));

        Ok(report)
    }

    /// Returns a report for every entry, in creation order.
    pub fn list_all(&self) -> Result<Vec<Report>, AppError> {
        let reports = self
            .entry_store
            .all_entries()?
            .into_iter()
            .map(|entry| self.report(entry))
            .collect::<Result<Vec<_>, _>>()?;

        self.telemetry
            .info(COMPONENT, "All URLs statistics retrieved");

        Ok(reports)
    }

    /// Builds a report from one events snapshot. The total is the length of
    /// that snapshot rather than a separate [`AccessLog::count`] call, so the
    /// count and the click list always agree even while resolves append
    /// concurrently.
    fn report(&self, entry: Entry) -> Result<Report, AppError> {
        let events = self.access_log.events(&entry.code)?;
        let total_clicks = events.len();
        Ok(Report::new(entry, total_clicks, events))
    }

    fn validity_minutes(&self, requested: Option<i64>) -> Result<u32, AppError> {
        let Some(minutes) = requested else {
            return Ok(self.default_validity_minutes);
        };

        match u32::try_from(minutes) {
            Ok(minutes) if minutes > 0 => Ok(minutes),
            _ => {
                self.telemetry.error(COMPONENT, "Invalid validity period");
                Err(AppError::invalid_input(
                    "Validity must be a positive integer representing minutes",
                    json!({ "validity": minutes }),
                ))
            }
        }
    }

    fn build_entry(
        &self,
        code: String,
        target_url: &str,
        validity_minutes: u32,
    ) -> Result<Entry, AppError> {
        Entry::new(code, target_url.to_string(), Utc::now(), validity_minutes).ok_or_else(|| {
            self.telemetry.error(COMPONENT, "Invalid validity period");
            AppError::invalid_input(
                "Validity is out of range",
                json!({ "validity": validity_minutes }),
            )
        })
    }

    /// Writes the access log sequence first, then the entry, so a reader
    /// that can see the entry always finds its sequence.
    fn store(&self, entry: Entry) -> Result<(), AppError> {
        self.access_log.init(&entry.code)?;
        self.entry_store.insert(entry)
    }

    fn store_with_generated_code(
        &self,
        target_url: &str,
        validity_minutes: u32,
    ) -> Result<Entry, AppError> {
        for _ in 0..MAX_GENERATION_ATTEMPTS {
            let code = generate_code()?;

            if self.entry_store.exists(&code)? {
                continue;
            }

            let entry = self.build_entry(code, target_url, validity_minutes)?;
            match self.store(entry.clone()) {
                Ok(()) => return Ok(entry),
                // Claimed concurrently between the check and the insert.
                Err(AppError::CodeCollision { .. }) => continue,
                Err(e) => return Err(e),
            }
        }

        warn!(
            attempts = MAX_GENERATION_ATTEMPTS,
            "Failed to generate a unique short code"
        );
        Err(AppError::internal(
            "Failed to generate unique code",
            json!({ "reason": "Too many collisions" }),
        ))
    }

    fn collision(&self, code: &str) -> AppError {
        self.telemetry
            .error(COMPONENT, "Shortcode collision detected");
        AppError::code_collision("Shortcode already exists", json!({ "code": code }))
    }
}
