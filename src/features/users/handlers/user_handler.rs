use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::features::users::dtos::UserListResponse;
use crate::features::users::services::UserService;

/// List all users
#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "List of users", body = UserListResponse),
    ),
    tag = "users"
)]
pub async fn list_users(State(service): State<Arc<UserService>>) -> Result<Json<UserListResponse>> {
    let users = service.list().await?;
    Ok(Json(UserListResponse { users }))
}
