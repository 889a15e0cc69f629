//! DTOs for click event data.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::ClickDetail;

/// One recorded click as it appears in a report.
///
/// The client identifier is recorded but never exposed here.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClickInfo {
    pub timestamp: DateTime<Utc>,
    pub referer: String,
    pub user_agent: String,
    pub location: &'static str,
}

impl From<ClickDetail> for ClickInfo {
    fn from(click: ClickDetail) -> Self {
        Self {
            timestamp: click.timestamp,
            referer: click.referer,
            user_agent: click.user_agent,
            location: click.location,
        }
    }
}
