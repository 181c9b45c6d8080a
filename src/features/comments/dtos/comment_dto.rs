use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::comments::models::Comment;
use crate::shared::types::timestamp_millis;

/// Response DTO for comment
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CommentResponseDto {
    pub comment_id: i32,
    pub review_id: i32,
    pub author: String,
    pub body: String,
    pub votes: i32,
    #[serde(serialize_with = "timestamp_millis")]
    pub created_at: DateTime<Utc>,
}

impl From<Comment> for CommentResponseDto {
    fn from(c: Comment) -> Self {
        Self {
            comment_id: c.comment_id,
            review_id: c.review_id,
            author: c.author,
            body: c.body,
            votes: c.votes,
            created_at: c.created_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CommentListResponse {
    pub comments: Vec<CommentResponseDto>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CommentResponse {
    pub comment: CommentResponseDto,
}

/// Body of `POST /api/reviews/{review_id}/comments`. Other keys are ignored.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateCommentDto {
    /// Author; must be an existing username
    #[validate(required)]
    #[schema(example = "philippaclaire9")]
    pub username: Option<String>,

    #[validate(required)]
    #[schema(example = "I hate this game, waste of my time")]
    pub body: Option<String>,
}

/// Comment fields once presence has been checked
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub author: String,
    pub body: String,
}

/// Only meaningful once `validate()` has passed; both fields are then present.
impl From<CreateCommentDto> for NewComment {
    fn from(dto: CreateCommentDto) -> Self {
        Self {
            author: dto.username.unwrap_or_default(),
            body: dto.body.unwrap_or_default(),
        }
    }
}
