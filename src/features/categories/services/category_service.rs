use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::categories::dtos::CategoryResponseDto;
use crate::features::categories::models::Category;

/// Service for category operations
pub struct CategoryService {
    pool: PgPool,
}

impl CategoryService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all categories ordered by slug
    pub async fn list(&self) -> Result<Vec<CategoryResponseDto>> {
        let categories: Vec<Category> =
            sqlx::query_as("SELECT slug, description FROM categories ORDER BY slug")
                .fetch_all(&self.pool)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to list categories: {:?}", e);
                    AppError::from(e)
                })?;

        Ok(categories.into_iter().map(|c| c.into()).collect())
    }
}
