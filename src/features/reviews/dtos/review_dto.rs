use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::core::error::AppError;
use crate::features::reviews::models::ReviewWithCount;
use crate::shared::types::{count_as_string, timestamp_millis};

/// Review as returned by every review endpoint
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ReviewResponseDto {
    pub review_id: i32,
    pub title: String,
    pub designer: String,
    pub owner: String,
    pub review_body: String,
    pub review_img_url: String,
    pub category: String,
    #[serde(serialize_with = "timestamp_millis")]
    pub created_at: DateTime<Utc>,
    pub votes: i32,
    /// Number of comments on the review, as a decimal string
    #[serde(serialize_with = "count_as_string")]
    #[schema(value_type = String, example = "3")]
    pub comment_count: i64,
}

impl From<ReviewWithCount> for ReviewResponseDto {
    fn from(r: ReviewWithCount) -> Self {
        Self {
            review_id: r.review_id,
            title: r.title,
            designer: r.designer,
            owner: r.owner,
            review_body: r.review_body,
            review_img_url: r.review_img_url,
            category: r.category,
            created_at: r.created_at,
            votes: r.votes,
            comment_count: r.comment_count,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ReviewListResponse {
    pub reviews: Vec<ReviewResponseDto>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ReviewResponse {
    pub review: ReviewResponseDto,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatedReviewResponse {
    pub updated_review: ReviewResponseDto,
}

/// Body of `PATCH /api/reviews/{review_id}`.
///
/// `inc_votes` is kept as raw JSON so a non-integer can be reported as an
/// invalid vote delta rather than a generic body error.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct PatchReviewVotesDto {
    #[schema(value_type = Option<i32>, example = 1)]
    pub inc_votes: Option<serde_json::Value>,
}

impl PatchReviewVotesDto {
    /// Vote delta to apply; absent or null means no change
    pub fn delta(&self) -> Result<i32, AppError> {
        match &self.inc_votes {
            None | Some(serde_json::Value::Null) => Ok(0),
            Some(value) => value
                .as_i64()
                .and_then(|v| i32::try_from(v).ok())
                .ok_or(AppError::InvalidVoteDelta),
        }
    }
}
