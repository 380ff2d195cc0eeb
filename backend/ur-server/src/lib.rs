pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    error::ApiError,
    error::ApiFailureResponse,
    error::Result as ApiResult,
    users::{
        create_user_request::CreateUserRequest,
        user_dto::UserDto,
        user_list_response::UserListResponse,
        user_response::UserResponse,
        users::{create_user, list_users},
    },
};

pub use crate::app_state::AppState;
pub use crate::routes::build_router;
