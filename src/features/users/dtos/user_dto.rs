use serde::Serialize;
use utoipa::ToSchema;

use crate::features::users::models::User;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserResponseDto {
    #[schema(example = "mallionaire")]
    pub username: String,
    pub name: String,
    pub avatar_url: String,
}

impl From<User> for UserResponseDto {
    fn from(u: User) -> Self {
        Self {
            username: u.username,
            name: u.name,
            avatar_url: u.avatar_url,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UserListResponse {
    pub users: Vec<UserResponseDto>,
}
