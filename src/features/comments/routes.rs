use std::sync::Arc;

use axum::{routing::delete, routing::get, Router};

use crate::features::comments::handlers;
use crate::features::comments::services::CommentService;

/// Create routes for the comments feature
pub fn routes(service: Arc<CommentService>) -> Router {
    Router::new()
        .route(
            "/api/reviews/{review_id}/comments",
            get(handlers::list_comments).post(handlers::create_comment),
        )
        .route("/api/comments/{comment_id}", delete(handlers::delete_comment))
        .with_state(service)
}
