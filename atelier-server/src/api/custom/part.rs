//! Custom part API handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::models::custom::{CustomPartCreate, CustomPartUpdate};
use shared::response::OpResult;

use crate::db::custom as db;
use crate::state::AppState;

use crate::api::{ApiResult, internal};

pub async fn create_part(
    State(state): State<AppState>,
    Json(data): Json<CustomPartCreate>,
) -> ApiResult<OpResult> {
    let id = db::create_part(&state.pool, &data).await.map_err(internal)?;
    Ok(Json(OpResult::created(id)))
}

pub async fn update_part(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(data): Json<CustomPartUpdate>,
) -> ApiResult<OpResult> {
    db::update_part(&state.pool, id, &data)
        .await
        .map_err(internal)?;
    Ok(Json(OpResult::ok()))
}

/// Deleting a part takes its options with it (FK cascade).
pub async fn delete_part(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult<OpResult> {
    db::delete_part(&state.pool, id).await.map_err(internal)?;
    Ok(Json(OpResult::ok()))
}
