use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::DbErr;
use serde::Serialize;

use crate::store::StoreError;

/// Message returned for every unknown advertisement id.
pub const NOT_FOUND_MESSAGE: &str = "Resource not found";

/// A single field-level validation issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, utoipa::ToSchema)]
pub struct FieldError {
    /// Location of the offending value, e.g. `["title"]` or `["__root__"]`.
    #[schema(example = json!(["title"]))]
    pub loc: Vec<String>,
    /// Human-readable description.
    #[schema(example = "field required")]
    pub msg: String,
    /// Machine-readable issue code.
    #[serde(rename = "type")]
    #[schema(example = "value_error.missing")]
    pub kind: String,
}

impl FieldError {
    pub fn new(field: &str, msg: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            loc: vec![field.to_string()],
            msg: msg.into(),
            kind: kind.into(),
        }
    }
}

/// Request body rejected by schema checks. Carries every issue found.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("request body failed validation with {} issue(s)", .0.len())]
pub struct ValidationError(pub Vec<FieldError>);

impl ValidationError {
    pub fn single(field: &str, msg: impl Into<String>, kind: impl Into<String>) -> Self {
        Self(vec![FieldError::new(field, msg, kind)])
    }
}

/// Payload of the `error` key: a fixed message, or the list of field issues.
#[derive(Serialize, utoipa::ToSchema)]
#[serde(untagged)]
pub enum ErrorDetail {
    Message(String),
    Fields(Vec<FieldError>),
}

/// Structured error response returned by all endpoints on failure.
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorBody {
    #[schema(example = "Resource not found")]
    pub error: ErrorDetail,
}

/// Application-level error type.
#[derive(Debug)]
pub enum AppError {
    Validation(Vec<FieldError>),
    NotFound(String),
    Internal(String),
}

impl AppError {
    fn status_and_body(self) -> (StatusCode, ErrorBody) {
        match self {
            AppError::Validation(issues) => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    error: ErrorDetail::Fields(issues),
                },
            ),
            AppError::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                ErrorBody {
                    error: ErrorDetail::Message(msg),
                },
            ),
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody {
                        error: ErrorDetail::Message("Internal server error".into()),
                    },
                )
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = self.status_and_body();
        (status, Json(body)).into_response()
    }
}

impl From<DbErr> for AppError {
    fn from(err: DbErr) -> Self {
        AppError::Internal(err.to_string())
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        tracing::debug!("Rejected request body: {err}");
        AppError::Validation(err.0)
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => {
                tracing::debug!("Advertisement {id} not found");
                AppError::NotFound(NOT_FOUND_MESSAGE.into())
            }
            StoreError::Database(e) => e.into(),
        }
    }
}
