use serde::{Deserialize, Serialize};

/// View model for the calendar page: the reconciled selection plus the raw
/// time and modified lists, passed back so the client can round-trip them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarView {
    pub selected_dates: Vec<String>,
    pub start_times: Vec<String>,
    pub end_times: Vec<String>,
    pub modified_dates: Vec<String>,
}
