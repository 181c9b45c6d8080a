use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::reviews::dtos::{ReviewListFilter, ReviewResponseDto};
use crate::features::reviews::models::ReviewWithCount;

/// Review columns plus the comment aggregate. Must be paired with
/// `REVIEW_FROM` and grouped by `reviews.review_id`.
const REVIEW_SELECT: &str = r#"
    SELECT
        reviews.review_id, reviews.title, reviews.designer, reviews.owner,
        reviews.review_body, reviews.review_img_url, reviews.category,
        reviews.created_at, reviews.votes,
        COUNT(comments.comment_id) AS comment_count
"#;

const REVIEW_FROM: &str = r#"
    FROM reviews
    LEFT JOIN comments ON comments.review_id = reviews.review_id
"#;

/// Compose the listing query for an already validated filter.
///
/// `$1` is the optional category slug. The ORDER BY fragment is taken from
/// the closed sort enums; ties fall back to the primary key so repeated
/// calls return the same order.
pub fn build_list_query(filter: &ReviewListFilter) -> String {
    format!(
        r#"{select}{from}
    WHERE ($1::VARCHAR IS NULL OR reviews.category = $1)
    GROUP BY reviews.review_id
    ORDER BY {column} {direction}, reviews.review_id ASC
"#,
        select = REVIEW_SELECT,
        from = REVIEW_FROM,
        column = filter.sort_by.as_sql(),
        direction = filter.order_by.as_sql(),
    )
}

/// Service for review operations
pub struct ReviewService {
    pool: PgPool,
}

impl ReviewService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List reviews matching the filter, each with its comment count
    pub async fn list(&self, filter: &ReviewListFilter) -> Result<Vec<ReviewResponseDto>> {
        let query = build_list_query(filter);

        let reviews: Vec<ReviewWithCount> = sqlx::query_as(&query)
            .bind(filter.category.as_deref())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list reviews: {:?}", e);
                AppError::from(e)
            })?;

        // An empty page is only an error when the category itself is unknown
        if reviews.is_empty() {
            if let Some(slug) = filter.category.as_deref() {
                if !self.category_exists(slug).await? {
                    return Err(AppError::CategoryNotFound);
                }
            }
        }

        Ok(reviews.into_iter().map(ReviewResponseDto::from).collect())
    }

    /// Get a single review with its comment count
    pub async fn get_by_id(&self, review_id: i32) -> Result<ReviewResponseDto> {
        let query = format!(
            "{}{} WHERE reviews.review_id = $1 GROUP BY reviews.review_id",
            REVIEW_SELECT, REVIEW_FROM
        );

        let review: Option<ReviewWithCount> = sqlx::query_as(&query)
            .bind(review_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get review {}: {:?}", review_id, e);
                AppError::from(e)
            })?;

        review
            .map(ReviewResponseDto::from)
            .ok_or(AppError::ReviewNotFound)
    }

    /// Add `delta` to a review's votes and return the updated review.
    ///
    /// The arithmetic happens in one UPDATE so concurrent patches never lose
    /// increments. The result is clamped at zero: a delta larger than the
    /// current votes leaves the review at 0 rather than failing.
    pub async fn update_votes(&self, review_id: i32, delta: i32) -> Result<ReviewResponseDto> {
        let review: Option<ReviewWithCount> = sqlx::query_as(
            r#"
            WITH updated AS (
                UPDATE reviews
                SET votes = GREATEST(votes + $2, 0)
                WHERE review_id = $1
                RETURNING *
            )
            SELECT
                updated.review_id, updated.title, updated.designer, updated.owner,
                updated.review_body, updated.review_img_url, updated.category,
                updated.created_at, updated.votes,
                (SELECT COUNT(*) FROM comments WHERE comments.review_id = updated.review_id)
                    AS comment_count
            FROM updated
            "#,
        )
        .bind(review_id)
        .bind(delta)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            if AppError::is_numeric_out_of_range(&e) {
                return AppError::InvalidVoteDelta;
            }
            tracing::error!("Failed to update votes for review {}: {:?}", review_id, e);
            AppError::from(e)
        })?;

        let review = review.ok_or(AppError::ReviewIdNotFound)?;

        tracing::info!(
            "Review votes updated: review_id={}, delta={}, votes={}",
            review.review_id,
            delta,
            review.votes
        );

        Ok(review.into())
    }

    async fn category_exists(&self, slug: &str) -> Result<bool> {
        sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM categories WHERE slug = $1)")
            .bind(slug)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to look up category '{}': {:?}", slug, e);
                AppError::from(e)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::reviews::dtos::review_query::{SortColumn, SortDirection};

    fn normalized(sql: &str) -> String {
        sql.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    #[test]
    fn test_default_query_orders_newest_first() {
        let sql = normalized(&build_list_query(&ReviewListFilter::default()));
        assert!(sql.ends_with("ORDER BY reviews.created_at DESC, reviews.review_id ASC"));
    }

    #[test]
    fn test_query_joins_comment_counts() {
        let sql = normalized(&build_list_query(&ReviewListFilter::default()));
        assert!(sql.contains("COUNT(comments.comment_id) AS comment_count"));
        assert!(sql.contains("LEFT JOIN comments ON comments.review_id = reviews.review_id"));
        assert!(sql.contains("GROUP BY reviews.review_id"));
    }

    #[test]
    fn test_category_is_bound_not_interpolated() {
        let filter = ReviewListFilter {
            category: Some("euro game'; DROP TABLE reviews; --".to_string()),
            ..ReviewListFilter::default()
        };
        let sql = build_list_query(&filter);
        assert!(!sql.contains("DROP TABLE"));
        assert!(sql.contains("reviews.category = $1"));
    }

    #[test]
    fn test_query_uses_requested_sort() {
        let filter = ReviewListFilter {
            category: None,
            sort_by: SortColumn::CommentCount,
            order_by: SortDirection::Asc,
        };
        let sql = normalized(&build_list_query(&filter));
        assert!(sql.ends_with("ORDER BY comment_count ASC, reviews.review_id ASC"));

        let filter = ReviewListFilter {
            category: None,
            sort_by: SortColumn::Votes,
            order_by: SortDirection::Desc,
        };
        let sql = normalized(&build_list_query(&filter));
        assert!(sql.ends_with("ORDER BY reviews.votes DESC, reviews.review_id ASC"));
    }
}
