//! Path identifier extractor.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::errors::AppError;

/// Extracts a numeric id from the `:id` path segment.
///
/// A non-numeric segment is reported as 404 rather than a parse error:
/// whatever was asked for does not name an existing resource.
pub struct IdPath(pub i32);

#[async_trait]
impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::not_found("Resource"))?;

        raw.parse::<i32>()
            .map(IdPath)
            .map_err(|_| AppError::not_found("Resource"))
    }
}
