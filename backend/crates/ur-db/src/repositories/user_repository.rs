//! User repository: the append-only `users` table.
//!
//! Rows come back in insertion order (ascending `id`), which is the order the
//! client renders them in.

use crate::{DbError, Result as DbErrorResult};

use ur_core::{NewUser, User};

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use sqlx::{FromRow, SqlitePool};

#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    name: String,
    email: String,
    created_at: i64,
}

impl TryFrom<UserRow> for User {
    type Error = DbError;

    #[track_caller]
    fn try_from(r: UserRow) -> DbErrorResult<Self> {
        let Some(created_at) = DateTime::from_timestamp_millis(r.created_at) else {
            return Err(DbError::InvalidRow {
                message: format!(
                    "invalid timestamp {} in users.created_at for id {}",
                    r.created_at, r.id
                ),
                location: ErrorLocation::from(Location::caller()),
            });
        };

        Ok(User {
            id: r.id,
            name: r.name,
            email: r.email,
            created_at,
        })
    }
}

#[derive(Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a validated user and return the stored record.
    pub async fn create(&self, new_user: &NewUser) -> DbErrorResult<User> {
        let created_at = Utc::now().timestamp_millis();

        let result = sqlx::query_as::<_, UserRow>(
            r#"
                INSERT INTO users (name, email, created_at)
                VALUES (?, ?, ?)
                RETURNING id, name, email, created_at
            "#,
        )
        .bind(new_user.name())
        .bind(new_user.email())
        .bind(created_at)
        .fetch_one(&self.pool)
        .await;

        let row = match result {
            Ok(row) => row,
            Err(sqlx::Error::Database(ref db_err)) if db_err.is_unique_violation() => {
                return Err(DbError::DuplicateEmail {
                    email: new_user.email().to_string(),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
            Err(e) => return Err(DbError::from(e)),
        };

        User::try_from(row)
    }

    pub async fn find_all(&self) -> DbErrorResult<Vec<User>> {
        let rows = sqlx::query_as::<_, UserRow>(
            r#"
                SELECT id, name, email, created_at
                FROM users
                ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(User::try_from).collect()
    }
}
