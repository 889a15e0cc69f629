//! DTOs for short URL statistics.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::clicks::ClickInfo;
use crate::domain::entities::Report;

/// Statistics for a single short code.
///
/// Returned by `GET /shorturls/{code}` and, as a list, by
/// `GET /api/all-urls`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub short_code: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub expiry_date: DateTime<Utc>,
    /// Validity in minutes.
    pub validity: u32,
    pub total_clicks: usize,
    pub click_details: Vec<ClickInfo>,
}

impl From<Report> for StatsResponse {
    fn from(report: Report) -> Self {
        Self {
            short_code: report.code,
            original_url: report.target_url,
            created_at: report.created_at,
            expiry_date: report.expires_at,
            validity: report.validity_minutes,
            total_clicks: report.total_clicks,
            click_details: report
                .click_details
                .into_iter()
                .map(ClickInfo::from)
                .collect(),
        }
    }
}
