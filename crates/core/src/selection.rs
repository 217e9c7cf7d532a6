//! # Selected-Date Reconciliation
//!
//! The calendar view never stores anything server-side; the browser resends
//! the full list of picked dates plus a comma-joined list of dates the user
//! has since removed. Reconciliation computes the net selection: the set of
//! all selected dates minus every removed token.
//!
//! Matching is by exact string: the reconciler treats date strings as opaque
//! tokens and never validates or normalizes them. Format validity is enforced
//! later, by the schedule builder, for the dates that survive.

use std::collections::HashSet;

/// Parses a comma-joined removed-date spec into a set of tokens.
///
/// Each segment is trimmed; segments that are empty after trimming are
/// dropped. `None` and the empty string both yield an empty set.
pub fn removed_set(spec: Option<&str>) -> HashSet<String> {
    let mut removed = HashSet::new();
    if let Some(spec) = spec {
        for token in spec.split(',') {
            let token = token.trim();
            if !token.is_empty() {
                removed.insert(token.to_string());
            }
        }
    }
    removed
}

/// Computes the net selection: all of `selected_dates` minus every token in
/// `removed_spec`.
///
/// Removal is by exact string match, not date-value equality; two spellings
/// of the same calendar date are different tokens.
pub fn reconcile(selected_dates: &[String], removed_spec: Option<&str>) -> HashSet<String> {
    let mut selected: HashSet<String> = selected_dates.iter().cloned().collect();

    let removed = removed_set(removed_spec);
    selected.retain(|date| !removed.contains(date));

    selected
}
