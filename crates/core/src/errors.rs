use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShiftError {
    #[error("Malformed date: {0}")]
    MalformedDate(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),
}

pub type ShiftResult<T> = Result<T, ShiftError>;
