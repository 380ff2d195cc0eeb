//! JSON bodies exchanged with ur-server.

use ur_core::User;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UserRecord {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<UserRecord> for User {
    fn from(r: UserRecord) -> Self {
        User {
            id: r.id,
            name: r.name,
            email: r.email,
            created_at: r.created_at,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct UserListEnvelope {
    pub success: bool,
    pub users: Vec<UserRecord>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct UserEnvelope {
    pub success: bool,
    pub user: UserRecord,
}

#[derive(Debug, Deserialize)]
pub(crate) struct FailureEnvelope {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct CreateUserBody<'a> {
    pub name: &'a str,
    pub email: &'a str,
}
