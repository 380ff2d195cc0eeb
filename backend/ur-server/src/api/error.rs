//! REST API error types
//!
//! Every failure is rendered as `{ "success": false, "message": ... }` with
//! a status code matching the variant.

use ur_core::CoreError;
use ur_db::DbError;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// Message shown to clients for any store failure
pub const STORE_FAILURE_MESSAGE: &str = "Database operation failed";

/// Message shown to clients when the email is already registered
pub const DUPLICATE_EMAIL_MESSAGE: &str = "A user with this email already exists";

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiFailureResponse {
    pub success: bool,
    pub message: String,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or blank required field (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    /// Unique constraint hit (409)
    #[error("Conflict: {message} {location}")]
    Conflict {
        message: String,
        location: ErrorLocation,
    },

    /// Store unavailable or failed (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },

    /// JSON body present but unparseable (400)
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation { .. } | ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::Conflict { .. } => StatusCode::CONFLICT,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            log::error!("{}", self);
        } else {
            log::warn!("{}", self);
        }

        let message = match self {
            ApiError::Validation { message, .. }
            | ApiError::Conflict { message, .. }
            | ApiError::Internal { message, .. }
            | ApiError::BadRequest { message, .. } => message,
        };

        (
            status,
            Json(ApiFailureResponse {
                success: false,
                message,
            }),
        )
            .into_response()
    }
}

/// Convert core validation errors to API errors
impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::Validation { message, field, .. } => {
                if let Some(field) = field {
                    log::debug!("Validation failed on field '{}'", field);
                }
                ApiError::Validation {
                    message,
                    location: ErrorLocation::from(Location::caller()),
                }
            }
        }
    }
}

/// Convert database errors to API errors
impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        match e {
            DbError::DuplicateEmail { .. } => ApiError::Conflict {
                message: DUPLICATE_EMAIL_MESSAGE.to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
            other => {
                // Don't expose internal database details to clients
                log::error!("Database error: {}", other);
                ApiError::Internal {
                    message: STORE_FAILURE_MESSAGE.to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
