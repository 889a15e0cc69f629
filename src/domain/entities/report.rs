//! Report projection returned by stats queries.

use chrono::{DateTime, Utc};

use super::{AccessEvent, Entry};

/// Location reported for every click. Client addresses are never geo-resolved.
pub const UNKNOWN_LOCATION: &str = "Unknown";

/// A single click as it appears in a report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickDetail {
    pub timestamp: DateTime<Utc>,
    pub user_agent: String,
    pub referer: String,
    pub client_identifier: String,
    pub location: &'static str,
}

impl From<AccessEvent> for ClickDetail {
    fn from(event: AccessEvent) -> Self {
        Self {
            timestamp: event.timestamp,
            user_agent: event.user_agent,
            referer: event.referer,
            client_identifier: event.client_identifier,
            location: UNKNOWN_LOCATION,
        }
    }
}

/// Aggregated view of an entry plus its access events.
///
/// Reports do not distinguish live from expired entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub code: String,
    pub target_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub validity_minutes: u32,
    pub total_clicks: usize,
    /// Chronological order.
    pub click_details: Vec<ClickDetail>,
}

impl Report {
    pub fn new(entry: Entry, total_clicks: usize, events: Vec<AccessEvent>) -> Self {
        Self {
            code: entry.code,
            target_url: entry.target_url,
            created_at: entry.created_at,
            expires_at: entry.expires_at,
            validity_minutes: entry.validity_minutes,
            total_clicks,
            click_details: events.into_iter().map(ClickDetail::from).collect(),
        }
    }
}
