use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

use crate::error::{AppError, NOT_FOUND_MESSAGE};

/// A `Path<T>` wrapper where an unparseable segment means the resource does
/// not exist: `/ads/abc` is a 404, never a 400.
pub struct AppPath<T>(pub T);

impl<S, T> FromRequestParts<S> for AppPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| {
                tracing::debug!("Rejected path: {}", e.body_text());
                AppError::NotFound(NOT_FOUND_MESSAGE.into())
            })?;
        Ok(AppPath(value))
    }
}
