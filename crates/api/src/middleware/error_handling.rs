//! # Error Handling Middleware
//!
//! This module provides a standardized way to handle errors in the ShiftSync
//! API. It maps domain-specific errors to appropriate HTTP status codes and
//! JSON error responses, ensuring a consistent error handling experience
//! across the entire API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use shiftsync_core::errors::ShiftError;

/// Application error wrapper that provides HTTP status code mapping
///
/// `AppError` wraps domain-specific `ShiftError` instances and implements
/// `IntoResponse` to convert them into HTTP responses with appropriate
/// status codes and JSON payloads.
#[derive(Debug)]
pub struct AppError(pub ShiftError);

/// Converts application errors to HTTP responses
///
/// This implementation maps each error type to the appropriate HTTP status
/// code and formats the error message into a JSON response body.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Map error types to HTTP status codes
        let status = match &self.0 {
            ShiftError::MalformedDate(_) => StatusCode::BAD_REQUEST,
            ShiftError::Validation(_) => StatusCode::BAD_REQUEST,
            ShiftError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Get the error message and format as JSON
        let message = self.0.to_string();
        let body = Json(json!({ "error": message }));

        // Combine status code and JSON body into a response
        (status, body).into_response()
    }
}

/// Automatic conversion from ShiftError to AppError
///
/// This implementation allows using the `?` operator with functions that
/// return `Result<T, ShiftError>` in handler functions that return
/// `Result<T, AppError>`.
impl From<ShiftError> for AppError {
    fn from(err: ShiftError) -> Self {
        AppError(err)
    }
}
