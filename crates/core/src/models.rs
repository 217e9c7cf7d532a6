/// Calendar view DTOs
pub mod calendar;
/// Time-register view DTOs
pub mod register;
