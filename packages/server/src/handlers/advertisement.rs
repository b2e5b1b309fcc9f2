use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use serde_json::Value;
use tracing::{info, instrument};

use crate::error::{AppError, ErrorBody};
use crate::extractors::json::AppJson;
use crate::extractors::path::AppPath;
use crate::models::advertisement::*;
use crate::state::AppState;
use crate::store::AdStore;

#[utoipa::path(
    get,
    path = "/ads/{id}",
    tag = "Advertisements",
    operation_id = "getAd",
    summary = "Get an advertisement by ID",
    params(("id" = i32, Path, description = "Advertisement ID")),
    responses(
        (status = 200, description = "Advertisement details", body = AdResponse),
        (status = 404, description = "Advertisement not found", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn get_ad(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<AdResponse>, AppError> {
    let model = AdStore::new(&state.db).get_by_id(id).await?;
    Ok(Json(model.into()))
}

#[utoipa::path(
    post,
    path = "/ads/",
    tag = "Advertisements",
    operation_id = "createAd",
    summary = "Create a new advertisement",
    description = "Creates an advertisement. `id` and `published_at` are assigned by the server; only those two values are returned.",
    request_body = CreateAdRequest,
    responses(
        (status = 200, description = "Advertisement created", body = CreatedAdResponse),
        (status = 400, description = "Validation error", body = ErrorBody),
    ),
)]
#[instrument(skip(state, body))]
pub async fn create_ad(
    State(state): State<AppState>,
    AppJson(body): AppJson<Value>,
) -> Result<Json<CreatedAdResponse>, AppError> {
    let payload = validate_create_ad(&body)?;
    let model = AdStore::new(&state.db).create(payload).await?;
    info!(id = model.id, owner = %model.owner, "Advertisement created");
    Ok(Json(model.into()))
}

#[utoipa::path(
    patch,
    path = "/ads/{id}",
    tag = "Advertisements",
    operation_id = "updateAd",
    summary = "Update an existing advertisement",
    description = "Partially updates `title` and/or `description`. Absent fields are left unchanged; an empty payload changes nothing.",
    params(("id" = i32, Path, description = "Advertisement ID")),
    request_body = UpdateAdRequest,
    responses(
        (status = 200, description = "Advertisement updated", body = StatusResponse),
        (status = 400, description = "Validation error", body = ErrorBody),
        (status = 404, description = "Advertisement not found", body = ErrorBody),
    ),
)]
#[instrument(skip(state, body))]
pub async fn update_ad(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
    AppJson(body): AppJson<Value>,
) -> Result<Json<StatusResponse>, AppError> {
    let patch = validate_update_ad(&body)?;
    AdStore::new(&state.db).patch_fields(id, patch).await?;
    Ok(Json(StatusResponse::success()))
}

#[utoipa::path(
    delete,
    path = "/ads/{id}",
    tag = "Advertisements",
    operation_id = "deleteAd",
    summary = "Delete an advertisement by ID",
    params(("id" = i32, Path, description = "Advertisement ID")),
    responses(
        (status = 204, description = "Advertisement deleted"),
        (status = 404, description = "Advertisement not found", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn delete_ad(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<StatusCode, AppError> {
    AdStore::new(&state.db).delete(id).await?;
    info!(id, "Advertisement deleted");
    Ok(StatusCode::NO_CONTENT)
}
