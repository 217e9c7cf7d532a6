use serde::{Deserialize, Serialize};

use crate::worktime::WorkSummary;

/// One date's complete display record in the time-register view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEntry {
    /// Canonical `yyyy-mm-dd` date string
    pub date: String,
    /// Localized label, e.g. `11/15(土)`
    pub display_date: String,
    /// 0 = Sunday .. 6 = Saturday
    pub weekday_number: u8,
    pub start_time: String,
    pub end_time: String,
    /// Whether the user edited this date's time window since last submission
    pub modified: bool,
}

/// View model for the time-register page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeRegisterView {
    pub date_info_list: Vec<ScheduleEntry>,
    pub total_days: usize,
    pub work_summary: WorkSummary,
}
