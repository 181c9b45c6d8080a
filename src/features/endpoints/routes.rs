use axum::{routing::get, Router};

use crate::features::endpoints::handlers;

/// Create routes for the endpoint catalog
pub fn routes() -> Router {
    Router::new().route("/api", get(handlers::get_endpoints))
}
