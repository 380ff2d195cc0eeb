pub mod error;
pub mod models;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use models::new_user::{NewUser, REQUIRED_FIELDS_MESSAGE};
pub use models::user::{User, UserId};
