use serde::Serialize;
use utoipa::ToSchema;

use crate::features::categories::models::Category;

/// Response DTO for category
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CategoryResponseDto {
    #[schema(example = "euro game")]
    pub slug: String,
    pub description: String,
}

impl From<Category> for CategoryResponseDto {
    fn from(c: Category) -> Self {
        Self {
            slug: c.slug,
            description: c.description,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CategoryListResponse {
    pub categories: Vec<CategoryResponseDto>,
}
