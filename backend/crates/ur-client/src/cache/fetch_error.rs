use crate::ClientError;

use thiserror::Error;

/// Client-side fetch failure.
///
/// Cloneable so every waiter on a shared in-flight fetch gets its own copy.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Fetch failed: {message}")]
pub struct FetchError {
    pub message: String,
}

impl FetchError {
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<ClientError> for FetchError {
    fn from(err: ClientError) -> Self {
        Self::new(err.to_string())
    }
}
