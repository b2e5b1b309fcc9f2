use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ValidationError;

use super::shared::{as_object, check_char_len, optional_str, required_str};

pub const TITLE_MAX_CHARS: usize = 150;
pub const OWNER_MAX_CHARS: usize = 100;

/// Body of `POST /ads/`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, utoipa::ToSchema)]
pub struct CreateAdRequest {
    /// 1-150 characters.
    #[schema(example = "Bike")]
    pub title: String,
    #[schema(example = "Red bike")]
    pub description: String,
    /// 1-100 characters. Cannot be changed later.
    #[schema(example = "alice")]
    pub owner: String,
}

/// Body of `PATCH /ads/{id}`. Absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, utoipa::ToSchema)]
pub struct UpdateAdRequest {
    #[schema(example = "Bike")]
    pub title: Option<String>,
    #[schema(example = "Blue bike")]
    pub description: Option<String>,
}

impl UpdateAdRequest {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none()
    }
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct AdResponse {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub owner: String,
    pub published_at: DateTime<Utc>,
}

/// Minimal acknowledgement of a created advertisement.
#[derive(Serialize, utoipa::ToSchema)]
pub struct CreatedAdResponse {
    #[schema(example = 1)]
    pub id: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct StatusResponse {
    #[schema(example = "success")]
    pub status: &'static str,
}

impl StatusResponse {
    pub fn success() -> Self {
        Self { status: "success" }
    }
}

impl From<crate::entity::advertisement::Model> for AdResponse {
    fn from(m: crate::entity::advertisement::Model) -> Self {
        Self {
            id: m.id,
            title: m.title,
            description: m.description,
            owner: m.owner,
            published_at: m.published_at,
        }
    }
}

impl From<crate::entity::advertisement::Model> for CreatedAdResponse {
    fn from(m: crate::entity::advertisement::Model) -> Self {
        Self {
            id: m.id,
            created_at: m.published_at,
        }
    }
}

/// Check a create body. Every issue in the body is reported, not just the first.
pub fn validate_create_ad(body: &Value) -> Result<CreateAdRequest, ValidationError> {
    let fields = as_object(body)?;
    let mut issues = Vec::new();

    let title = required_str(fields, "title", &mut issues);
    let title = check_char_len("title", title, 1, TITLE_MAX_CHARS, &mut issues);
    let description = required_str(fields, "description", &mut issues);
    let owner = required_str(fields, "owner", &mut issues);
    let owner = check_char_len("owner", owner, 1, OWNER_MAX_CHARS, &mut issues);

    match (title, description, owner) {
        (Some(title), Some(description), Some(owner)) if issues.is_empty() => Ok(CreateAdRequest {
            title,
            description,
            owner,
        }),
        _ => Err(ValidationError(issues)),
    }
}

/// Check a partial update body. Fields not present stay `None`; an empty
/// string is kept as a value and checked like any other.
pub fn validate_update_ad(body: &Value) -> Result<UpdateAdRequest, ValidationError> {
    let fields = as_object(body)?;
    let mut issues = Vec::new();

    let title = optional_str(fields, "title", &mut issues);
    let title = check_char_len("title", title, 1, TITLE_MAX_CHARS, &mut issues);
    let description = optional_str(fields, "description", &mut issues);

    if !issues.is_empty() {
        return Err(ValidationError(issues));
    }
    Ok(UpdateAdRequest { title, description })
}
