use sqlx::FromRow;

/// Database model for user
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub username: String,
    pub name: String,
    pub avatar_url: String,
}
