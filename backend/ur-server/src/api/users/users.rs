//! User REST API handlers

use crate::{ApiResult, AppState, CreateUserRequest, UserDto, UserListResponse, UserResponse};

use ur_core::NewUser;

use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
};

/// GET /
///
/// List every user in insertion order
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Json<UserListResponse>> {
    let users = state.user_repository().find_all().await?;

    Ok(Json(UserListResponse {
        success: true,
        users: users.into_iter().map(UserDto::from).collect(),
    }))
}

/// POST /
///
/// Create a user from `{ name, email }`
pub async fn create_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> ApiResult<(StatusCode, Json<UserResponse>)> {
    let req = CreateUserRequest::from_body(&headers, &body)?;

    let new_user = NewUser::new(req.name.as_deref(), req.email.as_deref())?;
    let user = state.user_repository().create(&new_user).await?;

    log::info!("Created user {} <{}>", user.id, user.email);

    Ok((
        StatusCode::CREATED,
        Json(UserResponse {
            success: true,
            user: user.into(),
        }),
    ))
}
