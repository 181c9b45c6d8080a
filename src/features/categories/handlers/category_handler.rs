use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::features::categories::dtos::CategoryListResponse;
use crate::features::categories::services::CategoryService;

/// List all review categories
#[utoipa::path(
    get,
    path = "/api/categories",
    responses(
        (status = 200, description = "List of categories", body = CategoryListResponse),
    ),
    tag = "categories"
)]
pub async fn list_categories(
    State(service): State<Arc<CategoryService>>,
) -> Result<Json<CategoryListResponse>> {
    let categories = service.list().await?;
    Ok(Json(CategoryListResponse { categories }))
}
