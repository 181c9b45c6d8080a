use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::comments::dtos::{CommentResponseDto, NewComment};
use crate::features::comments::models::Comment;

/// Service for comment operations
pub struct CommentService {
    pool: PgPool,
}

impl CommentService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List a review's comments, most recent first
    pub async fn list_by_review(&self, review_id: i32) -> Result<Vec<CommentResponseDto>> {
        if !self.review_exists(review_id).await? {
            return Err(AppError::ReviewIdNotFound);
        }

        let comments: Vec<Comment> = sqlx::query_as(
            r#"
            SELECT comment_id, review_id, author, body, votes, created_at
            FROM comments
            WHERE review_id = $1
            ORDER BY created_at DESC, comment_id DESC
            "#,
        )
        .bind(review_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list comments for review {}: {:?}", review_id, e);
            AppError::from(e)
        })?;

        Ok(comments.into_iter().map(CommentResponseDto::from).collect())
    }

    /// Create a comment on a review.
    ///
    /// Unknown authors and reviews are caught by the foreign keys and come
    /// back as `ReferenceNotFound`.
    pub async fn create(&self, review_id: i32, new: NewComment) -> Result<CommentResponseDto> {
        let comment: Comment = sqlx::query_as(
            r#"
            INSERT INTO comments (review_id, author, body)
            VALUES ($1, $2, $3)
            RETURNING comment_id, review_id, author, body, votes, created_at
            "#,
        )
        .bind(review_id)
        .bind(&new.author)
        .bind(&new.body)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            let err = AppError::from(e);
            if let AppError::Database(ref e) = err {
                tracing::error!("Failed to create comment on review {}: {:?}", review_id, e);
            }
            err
        })?;

        tracing::info!(
            "Comment created: comment_id={}, review_id={}, author={}",
            comment.comment_id,
            comment.review_id,
            comment.author
        );

        Ok(comment.into())
    }

    /// Delete a comment by id
    pub async fn delete(&self, comment_id: i32) -> Result<()> {
        let result = sqlx::query("DELETE FROM comments WHERE comment_id = $1")
            .bind(comment_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete comment {}: {:?}", comment_id, e);
                AppError::from(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::CommentNotFound);
        }

        tracing::info!("Comment deleted: comment_id={}", comment_id);
        Ok(())
    }

    async fn review_exists(&self, review_id: i32) -> Result<bool> {
        sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM reviews WHERE review_id = $1)")
            .bind(review_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to look up review {}: {:?}", review_id, e);
                AppError::from(e)
            })
    }
}
