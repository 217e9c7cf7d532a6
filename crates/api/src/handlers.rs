/// Calendar view handler
pub mod calendar;
/// Time-register view and submission handlers
pub mod register;
