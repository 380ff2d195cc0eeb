use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        field: Option<&'static str>,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// User-facing message without the source location
    pub fn message(&self) -> &str {
        match self {
            CoreError::Validation { message, .. } => message,
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
