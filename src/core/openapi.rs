use utoipa::{Modify, OpenApi};

use crate::features::categories::{dtos as categories_dtos, handlers as categories_handlers};
use crate::features::comments::{dtos as comments_dtos, handlers as comments_handlers};
use crate::features::endpoints::{dtos as endpoints_dtos, handlers as endpoints_handlers};
use crate::features::reviews::{dtos as reviews_dtos, handlers as reviews_handlers};
use crate::features::users::{dtos as users_dtos, handlers as users_handlers};
use crate::shared::types::ErrorBody;

#[derive(OpenApi)]
#[openapi(
    paths(
        // Catalog
        endpoints_handlers::get_endpoints,
        // Categories
        categories_handlers::list_categories,
        // Reviews
        reviews_handlers::list_reviews,
        reviews_handlers::get_review,
        reviews_handlers::patch_review_votes,
        // Comments
        comments_handlers::list_comments,
        comments_handlers::create_comment,
        comments_handlers::delete_comment,
        // Users
        users_handlers::list_users,
    ),
    components(
        schemas(
            // Shared
            ErrorBody,
            // Catalog
            endpoints_dtos::EndpointsResponse,
            // Categories
            categories_dtos::CategoryResponseDto,
            categories_dtos::CategoryListResponse,
            // Reviews
            reviews_dtos::ReviewResponseDto,
            reviews_dtos::ReviewListResponse,
            reviews_dtos::ReviewResponse,
            reviews_dtos::UpdatedReviewResponse,
            reviews_dtos::PatchReviewVotesDto,
            // Comments
            comments_dtos::CommentResponseDto,
            comments_dtos::CommentListResponse,
            comments_dtos::CommentResponse,
            comments_dtos::CreateCommentDto,
            // Users
            users_dtos::UserResponseDto,
            users_dtos::UserListResponse,
        )
    ),
    tags(
        (name = "api", description = "Endpoint catalog"),
        (name = "categories", description = "Board game categories"),
        (name = "reviews", description = "Board game reviews with comment counts"),
        (name = "comments", description = "Comments on reviews"),
        (name = "users", description = "Registered users"),
    ),
    info(
        title = "Board Game Reviews API",
        version = "0.1.0",
        description = "Reviews, categories, comments and users for board games",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
