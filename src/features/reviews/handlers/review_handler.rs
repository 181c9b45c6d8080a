use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::core::extractor::{AppJson, AppQuery, PathId};
use crate::features::reviews::dtos::{
    PatchReviewVotesDto, ReviewListFilter, ReviewListResponse, ReviewQueryParams, ReviewResponse,
    UpdatedReviewResponse,
};
use crate::features::reviews::services::ReviewService;
use crate::shared::types::ErrorBody;

/// List reviews
///
/// Optionally filtered by category slug and sorted by any whitelisted column.
/// Defaults to newest first.
#[utoipa::path(
    get,
    path = "/api/reviews",
    params(ReviewQueryParams),
    responses(
        (status = 200, description = "Reviews with comment counts", body = ReviewListResponse),
        (status = 400, description = "order_by is not ASC or DESC", body = ErrorBody),
        (status = 404, description = "Unknown sort_by column or category", body = ErrorBody)
    ),
    tag = "reviews"
)]
pub async fn list_reviews(
    State(service): State<Arc<ReviewService>>,
    AppQuery(params): AppQuery<ReviewQueryParams>,
) -> Result<Json<ReviewListResponse>> {
    let filter = ReviewListFilter::try_from(params)?;
    let reviews = service.list(&filter).await?;
    Ok(Json(ReviewListResponse { reviews }))
}

/// Get a review by id
#[utoipa::path(
    get,
    path = "/api/reviews/{review_id}",
    params(
        ("review_id" = i32, Path, description = "Review id")
    ),
    responses(
        (status = 200, description = "Review found", body = ReviewResponse),
        (status = 400, description = "Malformed review id", body = ErrorBody),
        (status = 404, description = "Review not found", body = ErrorBody)
    ),
    tag = "reviews"
)]
pub async fn get_review(
    State(service): State<Arc<ReviewService>>,
    PathId(review_id): PathId,
) -> Result<Json<ReviewResponse>> {
    let review = service.get_by_id(review_id).await?;
    Ok(Json(ReviewResponse { review }))
}

/// Adjust a review's votes by `inc_votes`
///
/// A body without `inc_votes` leaves the review unchanged.
#[utoipa::path(
    patch,
    path = "/api/reviews/{review_id}",
    params(
        ("review_id" = i32, Path, description = "Review id")
    ),
    request_body = PatchReviewVotesDto,
    responses(
        (status = 200, description = "Updated review", body = UpdatedReviewResponse),
        (status = 400, description = "Malformed review id or vote delta", body = ErrorBody),
        (status = 404, description = "Review id not found", body = ErrorBody)
    ),
    tag = "reviews"
)]
pub async fn patch_review_votes(
    State(service): State<Arc<ReviewService>>,
    PathId(review_id): PathId,
    AppJson(dto): AppJson<PatchReviewVotesDto>,
) -> Result<Json<UpdatedReviewResponse>> {
    let delta = dto.delta()?;
    let updated_review = service.update_votes(review_id, delta).await?;
    Ok(Json(UpdatedReviewResponse { updated_review }))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::{json, Value};
    use sqlx::PgPool;

    use crate::shared::test_helpers::{offline_server, seeded_server};

    #[tokio::test]
    async fn test_unknown_sort_column_is_404_without_storage() {
        let server = offline_server();
        let response = server
            .get("/api/reviews")
            .add_query_param("sort_by", "banana")
            .await;

        response.assert_status(StatusCode::NOT_FOUND);
        response.assert_json(&json!({ "msg": "sort by property not found" }));
    }

    #[tokio::test]
    async fn test_unknown_order_direction_is_400_without_storage() {
        let server = offline_server();
        let response = server
            .get("/api/reviews/")
            .add_query_param("order_by", "banana")
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        response.assert_json(&json!({ "msg": "order by argument invalid" }));
    }

    #[tokio::test]
    async fn test_malformed_review_id_is_400_without_storage() {
        let server = offline_server();

        let response = server.get("/api/reviews/banana").await;
        response.assert_status(StatusCode::BAD_REQUEST);
        response.assert_json(&json!({ "msg": "invalid input" }));

        let response = server
            .patch("/api/reviews/banana")
            .json(&json!({ "inc_votes": 1 }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        response.assert_json(&json!({ "msg": "invalid input" }));
    }

    #[tokio::test]
    async fn test_patch_without_body_is_not_rejected() {
        let server = offline_server();
        let response = server.patch("/api/reviews/1").await;

        // Validation passed; the offline store is what fails
        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        response.assert_json(&json!({ "msg": "Internal Server Error" }));
    }

    #[tokio::test]
    async fn test_non_integer_vote_delta_is_400_without_storage() {
        let server = offline_server();
        let response = server
            .patch("/api/reviews/1")
            .json(&json!({ "inc_votes": "hello" }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        response.assert_json(&json!({ "msg": "invalid type of incriment votes" }));
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires Postgres at DATABASE_URL"]
    async fn test_list_reviews_defaults_to_newest_first(pool: PgPool) {
        let server = seeded_server(pool).await;
        let response = server.get("/api/reviews").await;
        response.assert_status_ok();

        let body: Value = response.json();
        let reviews = body["reviews"].as_array().unwrap();
        assert_eq!(reviews.len(), 13);

        for review in reviews {
            assert!(review["review_id"].is_i64());
            assert!(review["owner"].is_string());
            assert!(review["title"].is_string());
            assert!(review["category"].is_string());
            assert!(review["review_img_url"].is_string());
            assert!(review["created_at"].is_string());
            assert!(review["votes"].is_i64());
            assert!(review["comment_count"].is_string());
        }

        let dates: Vec<&str> = reviews
            .iter()
            .map(|r| r["created_at"].as_str().unwrap())
            .collect();
        let mut sorted = dates.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(dates, sorted);
    }

    /// Review ids in the order the store itself gives for `column`,
    /// computed without the listing query's join and grouping
    async fn store_order(pool: &PgPool, column: &str, order: &str) -> Vec<i64> {
        let key = match column {
            "comment_count" => {
                "(SELECT COUNT(*) FROM comments c WHERE c.review_id = r.review_id)".to_string()
            }
            other => format!("r.{}", other),
        };
        let sql = format!(
            "SELECT r.review_id::BIGINT FROM reviews r ORDER BY {} {}, r.review_id ASC",
            key, order
        );
        sqlx::query_scalar::<_, i64>(&sql)
            .fetch_all(pool)
            .await
            .unwrap()
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires Postgres at DATABASE_URL"]
    async fn test_list_reviews_sorted_by_each_column(pool: PgPool) {
        let server = seeded_server(pool.clone()).await;
        let mut tied_pairs = 0;

        for column in [
            "owner",
            "title",
            "review_id",
            "category",
            "review_img_url",
            "created_at",
            "votes",
            "comment_count",
        ] {
            for order in ["ASC", "DESC"] {
                let body: Value = server
                    .get("/api/reviews")
                    .add_query_param("sort_by", column)
                    .add_query_param("order_by", order.to_lowercase())
                    .await
                    .json();
                let reviews = body["reviews"].as_array().unwrap();

                let ids: Vec<i64> = reviews
                    .iter()
                    .map(|r| r["review_id"].as_i64().unwrap())
                    .collect();
                assert_eq!(
                    ids,
                    store_order(&pool, column, order).await,
                    "sort_by={} order_by={}",
                    column,
                    order
                );

                // Equal keys fall back to ascending review_id
                for pair in reviews.windows(2) {
                    if pair[0][column] == pair[1][column] {
                        tied_pairs += 1;
                        assert!(
                            pair[0]["review_id"].as_i64() < pair[1]["review_id"].as_i64(),
                            "sort_by={} order_by={} tie {} / {}",
                            column,
                            order,
                            pair[0]["review_id"],
                            pair[1]["review_id"]
                        );
                    }
                }
            }
        }

        assert!(tied_pairs > 0);
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires Postgres at DATABASE_URL"]
    async fn test_list_reviews_ascending_by_date(pool: PgPool) {
        let server = seeded_server(pool).await;
        let body: Value = server
            .get("/api/reviews/")
            .add_query_param("order_by", "ASC")
            .await
            .json();

        let dates: Vec<&str> = body["reviews"]
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["created_at"].as_str().unwrap())
            .collect();
        let mut sorted = dates.clone();
        sorted.sort();
        assert_eq!(dates, sorted);
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires Postgres at DATABASE_URL"]
    async fn test_list_reviews_by_category(pool: PgPool) {
        let server = seeded_server(pool).await;

        let body: Value = server
            .get("/api/reviews")
            .add_query_param("category", "euro game")
            .await
            .json();
        let reviews = body["reviews"].as_array().unwrap();
        assert!(!reviews.is_empty());
        assert!(reviews.iter().all(|r| r["category"] == "euro game"));

        let response = server
            .get("/api/reviews")
            .add_query_param("category", "children's games")
            .await;
        response.assert_status_ok();
        response.assert_json(&json!({ "reviews": [] }));

        let response = server
            .get("/api/reviews")
            .add_query_param("category", "banana")
            .await;
        response.assert_status(StatusCode::NOT_FOUND);
        response.assert_json(&json!({ "msg": "category not found" }));
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires Postgres at DATABASE_URL"]
    async fn test_repeated_listing_is_stable(pool: PgPool) {
        let server = seeded_server(pool).await;

        let first: Value = server
            .get("/api/reviews")
            .add_query_param("sort_by", "category")
            .await
            .json();
        let second: Value = server
            .get("/api/reviews")
            .add_query_param("sort_by", "category")
            .await
            .json();
        assert_eq!(first, second);
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires Postgres at DATABASE_URL"]
    async fn test_get_review_with_comment_count(pool: PgPool) {
        let server = seeded_server(pool).await;

        let response = server.get("/api/reviews/2").await;
        response.assert_status_ok();
        response.assert_json_contains(&json!({
            "review": {
                "review_id": 2,
                "title": "Jenga",
                "category": "dexterity",
                "designer": "Leslie Scott",
                "owner": "philippaclaire9",
                "review_body": "Fiddly fun for all the family",
                "review_img_url": "https://images.pexels.com/photos/4473494/pexels-photo-4473494.jpeg?w=700&h=700",
                "created_at": "2021-01-18T10:01:41.251Z",
                "votes": 5,
                "comment_count": "3"
            }
        }));

        let body: Value = server.get("/api/reviews/1").await.json();
        assert_eq!(body["review"]["review_id"], json!(1));
        assert_eq!(body["review"]["comment_count"], json!("0"));

        let response = server.get("/api/reviews/999").await;
        response.assert_status(StatusCode::NOT_FOUND);
        response.assert_json(&json!({ "msg": "review not found" }));
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires Postgres at DATABASE_URL"]
    async fn test_patch_review_votes(pool: PgPool) {
        let server = seeded_server(pool).await;

        let response = server
            .patch("/api/reviews/1")
            .json(&json!({ "inc_votes": 1 }))
            .await;
        response.assert_status_ok();
        response.assert_json_contains(&json!({
            "updatedReview": {
                "title": "Agricola",
                "designer": "Uwe Rosenberg",
                "owner": "mallionaire",
                "review_body": "Farmyard fun!",
                "category": "euro game",
                "votes": 2
            }
        }));
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires Postgres at DATABASE_URL"]
    async fn test_patch_votes_never_drop_below_zero(pool: PgPool) {
        let server = seeded_server(pool).await;

        let response = server
            .patch("/api/reviews/1")
            .json(&json!({ "inc_votes": -100 }))
            .await;
        response.assert_status_ok();
        response.assert_json_contains(&json!({
            "updatedReview": { "review_id": 1, "votes": 0 }
        }));

        let response = server
            .patch("/api/reviews/1")
            .json(&json!({ "inc_votes": 3 }))
            .await;
        response.assert_json_contains(&json!({
            "updatedReview": { "review_id": 1, "votes": 3 }
        }));
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires Postgres at DATABASE_URL"]
    async fn test_patch_without_delta_leaves_votes(pool: PgPool) {
        let server = seeded_server(pool).await;

        for body in [json!({}), json!({ "timeOfYear": "winter" })] {
            let response = server.patch("/api/reviews/1").json(&body).await;
            response.assert_status_ok();
            response.assert_json_contains(&json!({
                "updatedReview": { "review_id": 1, "votes": 1 }
            }));
        }

        let response = server.patch("/api/reviews/1").await;
        response.assert_status_ok();
        response.assert_json_contains(&json!({
            "updatedReview": { "review_id": 1, "votes": 1 }
        }));

        let response = server
            .patch("/api/reviews/999")
            .json(&json!({ "inc_votes": 1 }))
            .await;
        response.assert_status(StatusCode::NOT_FOUND);
        response.assert_json(&json!({ "msg": "review id not found" }));
    }
}
