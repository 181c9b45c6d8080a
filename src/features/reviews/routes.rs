use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::reviews::handlers;
use crate::features::reviews::services::ReviewService;

/// Create routes for the reviews feature
pub fn routes(service: Arc<ReviewService>) -> Router {
    Router::new()
        .route("/api/reviews", get(handlers::list_reviews))
        // Existing clients call the listing with a trailing slash
        .route("/api/reviews/", get(handlers::list_reviews))
        .route(
            "/api/reviews/{review_id}",
            get(handlers::get_review).patch(handlers::patch_review_votes),
        )
        .with_state(service)
}
