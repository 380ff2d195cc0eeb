use crate::UserDto;

use serde::Serialize;

/// Body of a successful `POST /`
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub success: bool,
    pub user: UserDto,
}
