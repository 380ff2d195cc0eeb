//! Render model for the user list.

use ur_core::{User, UserId};

use std::fmt;

use chrono::SecondsFormat;

pub const LOADING_TEXT: &str = "Loading Data...";
pub const LOAD_FAILED_TEXT: &str = "Failed to load users...";
pub const EMPTY_LIST_TEXT: &str = "Your users will appear here";
pub const NO_USERS_HEADER: &str = "No users yet";
const TITLE: &str = "User Manager";

/// One rendered list item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRow {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub added: String,
}

impl From<&User> for UserRow {
    fn from(u: &User) -> Self {
        Self {
            id: u.id,
            name: u.name.clone(),
            email: u.email.clone(),
            added: u.created_at.to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }
}

/// What the list component shows for the current controller state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListView {
    Loading,
    Error,
    Ready { header: String, rows: Vec<UserRow> },
}

impl ListView {
    pub fn ready(users: &[User]) -> Self {
        let header = match users.len() {
            0 => NO_USERS_HEADER.to_string(),
            n => format!("{} users registered", n),
        };

        ListView::Ready {
            header,
            rows: users.iter().map(UserRow::from).collect(),
        }
    }
}

impl fmt::Display for ListView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListView::Loading => writeln!(f, "{}", LOADING_TEXT),
            ListView::Error => writeln!(f, "{}", LOAD_FAILED_TEXT),
            ListView::Ready { header, rows } => {
                writeln!(f, "{}", TITLE)?;
                writeln!(f, "{}", header)?;
                writeln!(f)?;

                if rows.is_empty() {
                    return writeln!(f, "  {}", EMPTY_LIST_TEXT);
                }

                for row in rows {
                    writeln!(f, "  [{}] {} <{}>  [x]", row.id, row.name, row.email)?;
                    writeln!(f, "      Added: {}", row.added)?;
                }
                Ok(())
            }
        }
    }
}
