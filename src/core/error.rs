use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::shared::types::ErrorBody;

/// Postgres SQLSTATE codes the classifier recognises.
const PG_INVALID_TEXT_REPRESENTATION: &str = "22P02";
const PG_NUMERIC_VALUE_OUT_OF_RANGE: &str = "22003";
const PG_NOT_NULL_VIOLATION: &str = "23502";
const PG_FOREIGN_KEY_VIOLATION: &str = "23503";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid input")]
    InvalidInput,

    #[error("missing required input")]
    MissingRequiredField,

    #[error("invalid type of incriment votes")]
    InvalidVoteDelta,

    #[error("order by argument invalid")]
    InvalidOrderDirection,

    #[error("sort by property not found")]
    UnknownSortColumn,

    #[error("category not found")]
    CategoryNotFound,

    #[error("review not found")]
    ReviewNotFound,

    #[error("review id not found")]
    ReviewIdNotFound,

    #[error("comment not found")]
    CommentNotFound,

    #[error("404: could not find matches in database for your input")]
    ReferenceNotFound,

    #[error("path not found")]
    RouteNotFound,

    #[error("Database error: {0}")]
    Database(sqlx::Error),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Classify a raw store failure into a domain error kind.
///
/// Constraint violations the schema enforces on behalf of the API become
/// client errors; everything else stays a `Database` error and surfaces as 500.
impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        let code = match &e {
            sqlx::Error::Database(db_err) => db_err.code().map(|c| c.into_owned()),
            _ => None,
        };

        match code.as_deref() {
            Some(PG_INVALID_TEXT_REPRESENTATION) => AppError::InvalidInput,
            Some(PG_NOT_NULL_VIOLATION) => AppError::MissingRequiredField,
            Some(PG_FOREIGN_KEY_VIOLATION) => AppError::ReferenceNotFound,
            _ => AppError::Database(e),
        }
    }
}

impl AppError {
    /// True when the store rejected an arithmetic result as out of range.
    pub fn is_numeric_out_of_range(e: &sqlx::Error) -> bool {
        matches!(
            e,
            sqlx::Error::Database(db_err)
                if db_err.code().as_deref() == Some(PG_NUMERIC_VALUE_OUT_OF_RANGE)
        )
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidInput
            | AppError::MissingRequiredField
            | AppError::InvalidVoteDelta
            | AppError::InvalidOrderDirection => StatusCode::BAD_REQUEST,
            AppError::UnknownSortColumn
            | AppError::CategoryNotFound
            | AppError::ReviewNotFound
            | AppError::ReviewIdNotFound
            | AppError::CommentNotFound
            | AppError::ReferenceNotFound
            | AppError::RouteNotFound => StatusCode::NOT_FOUND,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message sent to the client. Server-side failures never leak detail.
    pub fn client_message(&self) -> String {
        match self {
            AppError::Database(_) | AppError::Internal(_) => "Internal Server Error".to_string(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Database(ref e) => tracing::error!("Database error: {:?}", e),
            AppError::Internal(ref msg) => tracing::error!("Internal error: {}", msg),
            ref other => tracing::debug!("Request rejected: {}", other),
        }

        let body = Json(ErrorBody {
            msg: self.client_message(),
        });

        (self.status(), body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
