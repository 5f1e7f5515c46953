//! Custom option API handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::models::custom::{CustomOptionCreate, CustomOptionUpdate};
use shared::response::OpResult;

use crate::db::custom as db;
use crate::state::AppState;

use crate::api::{ApiResult, internal};

pub async fn create_option(
    State(state): State<AppState>,
    Json(data): Json<CustomOptionCreate>,
) -> ApiResult<OpResult> {
    let id = db::create_option(&state.pool, &data)
        .await
        .map_err(internal)?;
    Ok(Json(OpResult::created(id)))
}

pub async fn update_option(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(data): Json<CustomOptionUpdate>,
) -> ApiResult<OpResult> {
    db::update_option(&state.pool, id, &data)
        .await
        .map_err(internal)?;
    Ok(Json(OpResult::ok()))
}

pub async fn delete_option(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<OpResult> {
    db::delete_option(&state.pool, id).await.map_err(internal)?;
    Ok(Json(OpResult::ok()))
}
