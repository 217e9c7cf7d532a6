//! # Working-Time Arithmetic
//!
//! Computes worked, break, and actual minutes for submitted shifts so the
//! register view can show totals. Time strings are opaque everywhere else in
//! the service; this module parses them leniently and simply skips values it
//! cannot read.

use serde::{Deserialize, Serialize};

use crate::models::register::ScheduleEntry;

/// Statutory break per worked span: none under 6 hours, 45 minutes under
/// 8 hours, 60 minutes from 8 hours up. Bounds are (min inclusive, max
/// exclusive) in minutes.
const BREAK_RULES: &[(u32, Option<u32>, u32)] = &[
    (0, Some(6 * 60), 0),
    (6 * 60, Some(8 * 60), 45),
    (8 * 60, None, 60),
];

/// Parses an `HH:MM` string into hour and minute. Out-of-range or malformed
/// values yield `None`.
pub fn parse_time(value: &str) -> Option<(u32, u32)> {
    let (hour, minute) = value.split_once(':')?;
    let hour: u32 = hour.parse().ok()?;
    let minute: u32 = minute.parse().ok()?;
    if hour > 23 || minute > 59 {
        return None;
    }
    Some((hour, minute))
}

/// Minutes worked between `start` and `end`. An end at or before the start
/// is treated as the next day (overnight shift).
pub fn work_minutes(start: &str, end: &str) -> Option<u32> {
    let (start_hour, start_minute) = parse_time(start)?;
    let (end_hour, end_minute) = parse_time(end)?;

    let start_total = start_hour * 60 + start_minute;
    let mut end_total = end_hour * 60 + end_minute;
    if end_total <= start_total {
        end_total += 24 * 60;
    }

    Some(end_total - start_total)
}

/// Break minutes owed for a worked span.
pub fn break_minutes(work_minutes: u32) -> u32 {
    for &(min, max, break_min) in BREAK_RULES {
        if work_minutes >= min && max.map_or(true, |max| work_minutes < max) {
            return break_min;
        }
    }
    0
}

/// Aggregate working-time figures for a schedule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkSummary {
    pub total_work_minutes: u32,
    pub total_break_minutes: u32,
    pub total_actual_minutes: u32,
}

/// Sums worked, break, and actual minutes over all entries. Entries whose
/// times do not parse contribute nothing.
pub fn summarize(entries: &[ScheduleEntry]) -> WorkSummary {
    let mut summary = WorkSummary::default();
    for entry in entries {
        let Some(worked) = work_minutes(&entry.start_time, &entry.end_time) else {
            continue;
        };
        let breaks = break_minutes(worked);
        summary.total_work_minutes += worked;
        summary.total_break_minutes += breaks;
        summary.total_actual_minutes += worked.saturating_sub(breaks);
    }
    summary
}
