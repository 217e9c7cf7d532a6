//! # Time-Register Handlers
//!
//! The time-register view lists every currently-selected date with its time
//! window so the user can set per-date start/end times before submitting.
//! The view handler runs the full schedule builder; the submission handler
//! performs no new computation and redirects back to the calendar with the
//! client's state intact.

use std::sync::Arc;

use axum::{Json, extract::State, response::Redirect};
use axum_extra::extract::{Form, Query};
use serde::{Deserialize, Serialize};
use shiftsync_core::{
    errors::ShiftError,
    models::register::TimeRegisterView,
    schedule::{self, ScheduleRequest},
    worktime,
};
use tracing::info;

use crate::{ApiState, middleware::error_handling::AppError};

/// Query parameters for the time-register view
///
/// `dates` is required; the remaining parameters are optional and default to
/// empty. Missing `dates` is rejected by the extractor before the handler
/// runs.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeRegisterParams {
    pub dates: Vec<String>,
    pub removed_dates: Option<String>,
    #[serde(default)]
    pub start_times: Vec<String>,
    #[serde(default)]
    pub end_times: Vec<String>,
    #[serde(default)]
    pub modified_dates: Vec<String>,
}

impl From<TimeRegisterParams> for ScheduleRequest {
    fn from(params: TimeRegisterParams) -> Self {
        ScheduleRequest {
            dates: params.dates,
            removed_dates: params.removed_dates,
            start_times: params.start_times,
            end_times: params.end_times,
            modified_dates: params.modified_dates,
        }
    }
}

/// Builds the time-register view: the sorted schedule entries, the total day
/// count, and the working-time summary.
#[axum::debug_handler]
pub async fn show_time_register(
    State(state): State<Arc<ApiState>>,
    Query(params): Query<TimeRegisterParams>,
) -> Result<Json<TimeRegisterView>, AppError> {
    let request = ScheduleRequest::from(params);

    let entries = schedule::build_schedule(&request, state.weekday_names.as_ref())?;
    let work_summary = worktime::summarize(&entries);

    Ok(Json(TimeRegisterView {
        total_days: entries.len(),
        work_summary,
        date_info_list: entries,
    }))
}

/// Form parameters for the final submission
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitParams {
    pub dates: Vec<String>,
    pub start_times: Vec<String>,
    pub end_times: Vec<String>,
    pub removed_dates: Option<String>,
}

/// Redirect parameters carried back to the calendar view so client state
/// survives the post-submit navigation.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CalendarRedirect<'a> {
    dates: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    removed_dates: Option<&'a str>,
}

/// Accepts the final submission and redirects back to the calendar.
///
/// No new computation happens here; the submitted shifts are logged and the
/// reconciled state is forwarded as redirect parameters.
#[axum::debug_handler]
pub async fn submit_time_register(
    Form(params): Form<SubmitParams>,
) -> Result<Redirect, AppError> {
    info!(total = params.dates.len(), "shift submission received");
    for ((date, start), end) in params
        .dates
        .iter()
        .zip(&params.start_times)
        .zip(&params.end_times)
    {
        info!(%date, %start, %end, "submitted shift");
    }

    let removed_dates = params
        .removed_dates
        .as_deref()
        .filter(|spec| !spec.is_empty());
    if let Some(removed) = removed_dates {
        info!(%removed, "removed shifts");
    }

    let query = serde_html_form::to_string(&CalendarRedirect {
        dates: &params.dates,
        removed_dates,
    })
    .map_err(|err| ShiftError::Internal(Box::new(err)))?;

    Ok(Redirect::to(&format!("/?{query}")))
}
