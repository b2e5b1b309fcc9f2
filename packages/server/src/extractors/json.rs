use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
};
use serde::de::DeserializeOwned;

use crate::error::{AppError, FieldError};
use crate::models::shared::ROOT_LOC;

/// A `Json<T>` wrapper that turns body rejections into a field-level
/// `AppError::Validation`, so clients always receive the issue-list shape.
pub struct AppJson<T>(pub T);

impl<S, T> FromRequest<S> for AppJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| {
                let kind = match &e {
                    JsonRejection::MissingJsonContentType(_) => "type_error.content_type",
                    _ => "value_error.jsondecode",
                };
                AppError::Validation(vec![FieldError::new(ROOT_LOC, e.body_text(), kind)])
            })?;
        Ok(AppJson(value))
    }
}
