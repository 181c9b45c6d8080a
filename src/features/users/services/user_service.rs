use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::users::dtos::UserResponseDto;
use crate::features::users::models::User;

pub struct UserService {
    pool: PgPool,
}

impl UserService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all users ordered by username
    pub async fn list(&self) -> Result<Vec<UserResponseDto>> {
        let users: Vec<User> =
            sqlx::query_as("SELECT username, name, avatar_url FROM users ORDER BY username")
                .fetch_all(&self.pool)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to list users: {:?}", e);
                    AppError::from(e)
                })?;

        Ok(users.into_iter().map(UserResponseDto::from).collect())
    }
}
