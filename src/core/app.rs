use std::sync::Arc;

use axum::{extract::DefaultBodyLimit, Router};
use sqlx::PgPool;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::core::config::AppConfig;
use crate::core::error::AppError;
use crate::core::middleware;
use crate::features::categories::{routes as categories_routes, CategoryService};
use crate::features::comments::{routes as comments_routes, CommentService};
use crate::features::endpoints::routes as endpoints_routes;
use crate::features::reviews::{routes as reviews_routes, ReviewService};
use crate::features::users::{routes as users_routes, UserService};

async fn health_check() -> axum::http::StatusCode {
    axum::http::StatusCode::OK
}

async fn route_not_found() -> AppError {
    AppError::RouteNotFound
}

/// Assemble the API router over a shared pool
pub fn build_router(pool: PgPool, config: &AppConfig) -> Router {
    let review_service = Arc::new(ReviewService::new(pool.clone()));
    let comment_service = Arc::new(CommentService::new(pool.clone()));
    let category_service = Arc::new(CategoryService::new(pool.clone()));
    let user_service = Arc::new(UserService::new(pool));

    Router::new()
        .merge(endpoints_routes::routes())
        .merge(categories_routes::routes(category_service))
        .merge(reviews_routes::routes(review_service))
        .merge(comments_routes::routes(comment_service))
        .merge(users_routes::routes(user_service))
        .route("/health", axum::routing::get(health_check))
        .fallback(route_not_found)
        .layer(CatchPanicLayer::custom(middleware::handle_panic))
        .layer(DefaultBodyLimit::max(config.max_request_body_size))
        .layer(middleware::cors_layer(&config.cors_allowed_origins))
        // Propagate X-Request-Id to response headers
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(middleware::MakeSpanWithRequestId)
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Generate X-Request-Id using UUID v7 (or use client-provided one)
        .layer(SetRequestIdLayer::x_request_id(middleware::MakeRequestUuid))
}
