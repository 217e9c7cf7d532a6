/// Calendar view route
pub mod calendar;
/// Health check routes
pub mod health;
/// Time-register view and submission routes
pub mod register;
