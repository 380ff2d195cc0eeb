use ur_core::UserId;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ControllerError {
    /// The registry has no delete operation; the affordance is inert
    #[error("Removing user {id} is not supported by the registry {location}")]
    RemoveUnsupported { id: UserId, location: ErrorLocation },
}

pub type Result<T> = std::result::Result<T, ControllerError>;
