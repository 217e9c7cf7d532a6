//! # Schedule View Builder
//!
//! Builds the sorted, display-ready schedule for the time-register view from
//! a [`ScheduleRequest`]. The builder is the one place date format validity
//! is enforced: any surviving date that is not a valid `yyyy-mm-dd` calendar
//! date fails the whole request.
//!
//! ## Build Steps
//!
//! 1. Drop every date that appears (by exact string match) in the
//!    removed-date spec; parse the survivors, failing fast on the first
//!    malformed one
//! 2. Sort by calendar value (year, month, day), not by string order
//! 3. Index start/end times by date string from the original parallel lists,
//!    but only when all three lists have equal length. Anything else leaves
//!    the index empty and every entry on the default window
//! 4. Derive the display fields per date: `month/day(weekday)` label and the
//!    Sunday-based weekday number
//! 5. Mark an entry modified iff its date string is in the modified set
//! 6. Attach the time window, defaulting where the index has no entry

use std::collections::{HashMap, HashSet};

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::{ShiftError, ShiftResult};
use crate::locale::WeekdayNames;
use crate::models::register::ScheduleEntry;
use crate::selection;

/// Start of the default time window for dates without saved times.
pub const DEFAULT_START_TIME: &str = "09:00";
/// End of the default time window for dates without saved times.
pub const DEFAULT_END_TIME: &str = "18:00";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// The full working state of one scheduling request.
///
/// Every field arrives from the client on each navigation; nothing is kept
/// between requests. `start_times` and `end_times` are positionally aligned
/// with `dates`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScheduleRequest {
    pub dates: Vec<String>,
    pub removed_dates: Option<String>,
    pub start_times: Vec<String>,
    pub end_times: Vec<String>,
    pub modified_dates: Vec<String>,
}

/// Builds the ordered schedule entries for a request.
///
/// # Errors
///
/// Returns [`ShiftError::MalformedDate`] if any date that survives the
/// removed-date filter does not parse as `yyyy-mm-dd`.
pub fn build_schedule(
    request: &ScheduleRequest,
    weekdays: &dyn WeekdayNames,
) -> ShiftResult<Vec<ScheduleEntry>> {
    let removed = selection::removed_set(request.removed_dates.as_deref());

    let mut sorted_dates = Vec::new();
    for date_str in &request.dates {
        if removed.contains(date_str.as_str()) {
            continue;
        }
        let date = NaiveDate::parse_from_str(date_str, DATE_FORMAT)
            .map_err(|_| ShiftError::MalformedDate(date_str.clone()))?;
        sorted_dates.push(date);
    }
    sorted_dates.sort();

    // Saved times are only trusted when the three lists line up exactly;
    // a length mismatch disables the whole index rather than guessing at a
    // partial alignment.
    let mut start_times: HashMap<&str, &str> = HashMap::new();
    let mut end_times: HashMap<&str, &str> = HashMap::new();
    if request.dates.len() == request.start_times.len()
        && request.dates.len() == request.end_times.len()
    {
        for (i, date_str) in request.dates.iter().enumerate() {
            start_times.insert(date_str.as_str(), request.start_times[i].as_str());
            end_times.insert(date_str.as_str(), request.end_times[i].as_str());
        }
    }

    let modified: HashSet<&str> = request.modified_dates.iter().map(String::as_str).collect();

    let mut entries = Vec::with_capacity(sorted_dates.len());
    for date in sorted_dates {
        // Entries carry the canonical spelling; the time index is keyed by
        // the spelling the client sent, so a non-canonical input keeps its
        // calendar position but falls back to the default window.
        let date_str = date.format(DATE_FORMAT).to_string();
        let weekday = date.weekday();

        let display_date = format!(
            "{}/{}({})",
            date.month(),
            date.day(),
            weekdays.short_name(weekday)
        );

        entries.push(ScheduleEntry {
            display_date,
            weekday_number: weekday.num_days_from_sunday() as u8,
            start_time: start_times
                .get(date_str.as_str())
                .copied()
                .unwrap_or(DEFAULT_START_TIME)
                .to_string(),
            end_time: end_times
                .get(date_str.as_str())
                .copied()
                .unwrap_or(DEFAULT_END_TIME)
                .to_string(),
            modified: modified.contains(date_str.as_str()),
            date: date_str,
        });
    }

    Ok(entries)
}
