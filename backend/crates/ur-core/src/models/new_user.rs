use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;

/// Message returned when either required field is missing or blank
pub const REQUIRED_FIELDS_MESSAGE: &str = "Email and name are required";

/// A validated, not-yet-persisted user.
///
/// Both fields are trimmed and guaranteed non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    name: String,
    email: String,
}

impl NewUser {
    /// Validate raw input. Missing fields are treated the same as blank ones.
    #[track_caller]
    pub fn new(name: Option<&str>, email: Option<&str>) -> CoreErrorResult<Self> {
        let name = name.map(str::trim).unwrap_or_default();
        let email = email.map(str::trim).unwrap_or_default();

        let field = match (name.is_empty(), email.is_empty()) {
            (false, false) => {
                return Ok(Self {
                    name: name.to_string(),
                    email: email.to_string(),
                });
            }
            (true, false) => Some("name"),
            (false, true) => Some("email"),
            (true, true) => None,
        };

        Err(CoreError::Validation {
            message: REQUIRED_FIELDS_MESSAGE.to_string(),
            field,
            location: ErrorLocation::from(Location::caller()),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}
