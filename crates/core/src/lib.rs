//! # ShiftSync Core
//!
//! Domain logic for the ShiftSync shift-scheduling service. The server is
//! fully stateless: every request carries its entire working set (selected
//! dates, removed dates, time windows, modified markers) in its parameters,
//! and this crate rebuilds the authoritative view from scratch each time.
//!
//! ## Architecture
//!
//! - **Selection**: reconciles raw selected dates against the removed-date
//!   spec into the net selection set
//! - **Schedule**: builds the sorted, display-ready per-date schedule from a
//!   reconciled request
//! - **Worktime**: working-time and statutory-break arithmetic for shifts
//! - **Locale**: localized short weekday names behind a small trait so the
//!   assembly logic stays testable without locale concerns
//! - **Models**: wire DTOs shared with the API crate
//!
//! Everything here is pure: no I/O, no shared state, and re-running any
//! operation on the same inputs yields the same output.

/// Domain error types
pub mod errors;
/// Localized weekday-name providers
pub mod locale;
/// Wire data-transfer objects
pub mod models;
/// Schedule view builder
pub mod schedule;
/// Selected-date reconciliation
pub mod selection;
/// Working-time arithmetic
pub mod worktime;
