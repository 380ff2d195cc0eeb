use crate::UserDto;

use serde::Serialize;

/// Body of `GET /`
#[derive(Debug, Serialize)]
pub struct UserListResponse {
    pub success: bool,
    pub users: Vec<UserDto>,
}
