use axum::Json;

use crate::features::endpoints::dtos::{catalog, EndpointsResponse};

/// Describe every available endpoint
#[utoipa::path(
    get,
    path = "/api",
    responses(
        (status = 200, description = "Endpoint catalog", body = EndpointsResponse),
    ),
    tag = "api"
)]
pub async fn get_endpoints() -> Json<EndpointsResponse> {
    Json(EndpointsResponse {
        endpoints: catalog(),
    })
}
