//! Access event recorded for every successful resolution of a short code.

use chrono::{DateTime, Utc};

/// Placeholder used when a request carries no `User-Agent` or client address.
pub const UNKNOWN: &str = "Unknown";

/// Placeholder used when a request carries no `Referer`.
pub const DIRECT: &str = "Direct";

/// Request metadata captured by the transport at resolve time.
///
/// Every field is optional; defaults are applied once, when the context is
/// turned into an [`AccessEvent`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestContext {
    pub user_agent: Option<String>,
    pub referer: Option<String>,
    pub client_identifier: Option<String>,
}

impl RequestContext {
    pub fn new(
        user_agent: Option<&str>,
        referer: Option<&str>,
        client_identifier: Option<String>,
    ) -> Self {
        Self {
            user_agent: user_agent.map(|s| s.to_string()),
            referer: referer.map(|s| s.to_string()),
            client_identifier,
        }
    }
}

/// One recorded resolution of a short code.
///
/// All fields are concrete: absent request metadata has already been
/// replaced by [`UNKNOWN`] or [`DIRECT`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessEvent {
    pub timestamp: DateTime<Utc>,
    pub user_agent: String,
    pub referer: String,
    pub client_identifier: String,
}

impl AccessEvent {
    /// Builds an event from request metadata, substituting defaults for
    /// missing or empty values.
    pub fn from_context(context: RequestContext, timestamp: DateTime<Utc>) -> Self {
        Self {
            timestamp,
            user_agent: or_default(context.user_agent, UNKNOWN),
            referer: or_default(context.referer, DIRECT),
            client_identifier: or_default(context.client_identifier, UNKNOWN),
        }
    }
}

fn or_default(value: Option<String>, default: &str) -> String {
    value
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}
