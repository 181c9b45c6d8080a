use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Review row joined with its comment aggregate
#[derive(Debug, Clone, FromRow)]
pub struct ReviewWithCount {
    pub review_id: i32,
    pub title: String,
    pub designer: String,
    pub owner: String,
    pub review_body: String,
    pub review_img_url: String,
    pub category: String,
    pub created_at: DateTime<Utc>,
    pub votes: i32,
    pub comment_count: i64,
}
