use crate::{ApiError, ApiResult};

use std::panic::Location;

use axum::http::{HeaderMap, header::CONTENT_TYPE};
use error_location::ErrorLocation;
use serde::Deserialize;

/// Body of `POST /`. Both fields are optional here so a missing field
/// surfaces as the same validation error as a blank one.
#[derive(Debug, Default, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub email: Option<String>,
}

impl CreateUserRequest {
    /// Decode a raw `POST /` body.
    ///
    /// A body that is empty or not declared as JSON carries no fields and is
    /// left for validation to reject. Only a JSON body that fails to parse
    /// is a `BadRequest`.
    #[track_caller]
    pub fn from_body(headers: &HeaderMap, body: &[u8]) -> ApiResult<Self> {
        if !has_json_content_type(headers) || body.trim_ascii().is_empty() {
            return Ok(Self::default());
        }

        match serde_json::from_slice(body) {
            Ok(req) => Ok(req),
            Err(e) => Err(ApiError::BadRequest {
                message: format!("Failed to parse the request body as JSON: {}", e),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

/// `application/json` or any `+json` media type, parameters ignored
fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(mime) = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
    else {
        return false;
    };

    let mime = mime.trim().to_ascii_lowercase();
    mime == "application/json" || mime.ends_with("+json")
}
