use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, PathId};
use crate::features::comments::dtos::{CommentListResponse, CommentResponse, CreateCommentDto};
use crate::features::comments::services::CommentService;
use crate::shared::types::ErrorBody;

/// List comments for a review
///
/// Most recent first. A review without comments yields an empty list.
#[utoipa::path(
    get,
    path = "/api/reviews/{review_id}/comments",
    params(
        ("review_id" = i32, Path, description = "Review id")
    ),
    responses(
        (status = 200, description = "Comments for the review", body = CommentListResponse),
        (status = 400, description = "Malformed review id", body = ErrorBody),
        (status = 404, description = "Review id not found", body = ErrorBody)
    ),
    tag = "comments"
)]
pub async fn list_comments(
    State(service): State<Arc<CommentService>>,
    PathId(review_id): PathId,
) -> Result<Json<CommentListResponse>> {
    let comments = service.list_by_review(review_id).await?;
    Ok(Json(CommentListResponse { comments }))
}

/// Post a comment on a review
#[utoipa::path(
    post,
    path = "/api/reviews/{review_id}/comments",
    params(
        ("review_id" = i32, Path, description = "Review id")
    ),
    request_body = CreateCommentDto,
    responses(
        (status = 201, description = "Comment created", body = CommentResponse),
        (status = 400, description = "Malformed review id or missing field", body = ErrorBody),
        (status = 404, description = "Unknown review or username", body = ErrorBody)
    ),
    tag = "comments"
)]
pub async fn create_comment(
    State(service): State<Arc<CommentService>>,
    PathId(review_id): PathId,
    AppJson(dto): AppJson<CreateCommentDto>,
) -> Result<(StatusCode, Json<CommentResponse>)> {
    dto.validate()
        .map_err(|_| AppError::MissingRequiredField)?;

    let comment = service.create(review_id, dto.into()).await?;
    Ok((StatusCode::CREATED, Json(CommentResponse { comment })))
}

/// Delete a comment
#[utoipa::path(
    delete,
    path = "/api/comments/{comment_id}",
    params(
        ("comment_id" = i32, Path, description = "Comment id")
    ),
    responses(
        (status = 204, description = "Comment deleted"),
        (status = 400, description = "Malformed comment id", body = ErrorBody),
        (status = 404, description = "Comment not found", body = ErrorBody)
    ),
    tag = "comments"
)]
pub async fn delete_comment(
    State(service): State<Arc<CommentService>>,
    PathId(comment_id): PathId,
) -> Result<StatusCode> {
    service.delete(comment_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
