use axum::Json;
use axum_extra::extract::Query;
use serde::Deserialize;
use shiftsync_core::{models::calendar::CalendarView, selection};

/// Query parameters for the calendar view
///
/// Everything is optional: a first visit has no state to restore. `dates`,
/// `startTimes`, `endTimes`, and `modifiedDates` are repeated keys;
/// `removedDates` is a single comma-joined string.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarParams {
    #[serde(default)]
    pub dates: Vec<String>,
    pub removed_dates: Option<String>,
    #[serde(default)]
    pub start_times: Vec<String>,
    #[serde(default)]
    pub end_times: Vec<String>,
    #[serde(default)]
    pub modified_dates: Vec<String>,
}

/// Restores the calendar view state from the query parameters.
///
/// Runs the reconciler only: the net selection is computed here, while the
/// time and modified lists pass through untouched for the client to
/// round-trip. Selected dates are emitted sorted for a deterministic wire.
#[axum::debug_handler]
pub async fn show_calendar(Query(params): Query<CalendarParams>) -> Json<CalendarView> {
    let mut selected_dates: Vec<String> =
        selection::reconcile(&params.dates, params.removed_dates.as_deref())
            .into_iter()
            .collect();
    selected_dates.sort();

    Json(CalendarView {
        selected_dates,
        start_times: params.start_times,
        end_times: params.end_times,
        modified_dates: params.modified_dates,
    })
}
