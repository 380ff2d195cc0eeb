pub mod connection;
pub mod error;
pub mod repositories;

pub use connection::{MIGRATOR, connect, ping};
pub use error::{DbError, Result};
pub use repositories::user_repository::UserRepository;
