//! User entity - a registered person in the registry.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Store-assigned user identifier (SQLite rowid)
pub type UserId = i64;

/// A persisted user record.
///
/// `id` and `created_at` are assigned by the store on insert and never change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}
