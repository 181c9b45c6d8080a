use axum::{
    body::{Body, Bytes},
    extract::{rejection::JsonRejection, FromRequest, FromRequestParts, Path, Query, Request},
    http::{header::CONTENT_TYPE, request::Parts, HeaderMap},
    Json,
};
use serde::de::DeserializeOwned;

use crate::core::error::AppError;

/// JSON body extractor that reports malformed bodies as `invalid input`.
///
/// An empty body is read as `{}` whatever its content type, so optional
/// fields fall back to their defaults and required ones fail validation.
pub struct AppJson<T>(pub T);

impl<T, S> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request<Body>, state: &S) -> Result<Self, Self::Rejection> {
        let json_content_type = has_json_content_type(req.headers());

        let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
            tracing::debug!("Rejected request body: {}", rejection.body_text());
            AppError::InvalidInput
        })?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return serde_json::from_slice(b"{}").map(Self).map_err(|err| {
                tracing::debug!("Rejected empty request body: {}", err);
                AppError::InvalidInput
            });
        }

        if !json_content_type {
            tracing::debug!("Rejected request body: missing JSON content type");
            return Err(AppError::InvalidInput);
        }

        match Json::<T>::from_bytes(&bytes) {
            Ok(value) => Ok(Self(value.0)),
            Err(rejection) => {
                let detail = match rejection {
                    JsonRejection::JsonDataError(err) => format!("Invalid JSON data: {}", err),
                    JsonRejection::JsonSyntaxError(err) => format!("Invalid JSON syntax: {}", err),
                    _ => "Failed to parse JSON body".to_string(),
                };
                tracing::debug!("Rejected request body: {}", detail);
                Err(AppError::InvalidInput)
            }
        }
    }
}

/// `application/json` or any `application/*+json` media type
fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return false;
    };

    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}

/// Query string extractor; undecodable query strings are `invalid input`
pub struct AppQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for AppQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Query::<T>::from_request_parts(parts, state).await {
            Ok(value) => Ok(Self(value.0)),
            Err(rejection) => {
                tracing::debug!("Rejected query string: {}", rejection.body_text());
                Err(AppError::InvalidInput)
            }
        }
    }
}

/// Numeric identifier taken from the single path parameter of a route
/// (`:review_id`, `:comment_id`).
///
/// Anything that is not a positive 32-bit integer is rejected before the
/// handler runs, so no query is ever issued for a malformed id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathId(pub i32);

impl<S> FromRequestParts<S> for PathId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::InvalidInput)?;

        parse_id(&raw).map(PathId)
    }
}

pub fn parse_id(raw: &str) -> Result<i32, AppError> {
    raw.parse::<i32>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or(AppError::InvalidInput)
}
