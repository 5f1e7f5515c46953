//! Custom SKU API handlers

use std::collections::HashMap;

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Deserialize;
use shared::error::{AppError, ErrorCode};
use shared::models::custom::{CustomSku, CustomSkuInput};
use shared::response::OpResult;

use crate::configurator::{self, Preview};
use crate::db::custom as db;
use crate::state::AppState;

use crate::api::{ApiResult, internal};

pub async fn list_skus(State(state): State<AppState>) -> ApiResult<Vec<CustomSku>> {
    let skus = db::list_skus(&state.pool).await.map_err(internal)?;
    Ok(Json(skus))
}

/// The storefront configurator fetches only active SKUs; inactive ones
/// never reach the caller-facing flow.
pub async fn list_active_skus(State(state): State<AppState>) -> ApiResult<Vec<CustomSku>> {
    let skus = db::list_active_skus(&state.pool).await.map_err(internal)?;
    Ok(Json(skus))
}

/// GET /api/custom/skus/{id} — the full part → option subtree
pub async fn get_sku(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult<CustomSku> {
    let sku = db::get_sku_detail(&state.pool, id)
        .await
        .map_err(internal)?
        .ok_or_else(|| AppError::new(ErrorCode::SkuNotFound))?;
    Ok(Json(sku))
}

pub async fn create_sku(
    State(state): State<AppState>,
    Json(data): Json<CustomSkuInput>,
) -> ApiResult<OpResult> {
    let id = db::create_sku(&state.pool, &data).await.map_err(internal)?;
    Ok(Json(OpResult::created(id)))
}

pub async fn update_sku(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(data): Json<CustomSkuInput>,
) -> ApiResult<OpResult> {
    db::update_sku(&state.pool, id, &data)
        .await
        .map_err(internal)?;
    Ok(Json(OpResult::ok()))
}

pub async fn delete_sku(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult<OpResult> {
    db::delete_sku(&state.pool, id).await.map_err(internal)?;
    Ok(Json(OpResult::ok()))
}

#[derive(Deserialize)]
pub struct PreviewRequest {
    /// part_id → chosen option_id; parts absent from the map fall back to
    /// their default option
    #[serde(default)]
    pub selections: HashMap<i64, i64>,
}

/// POST /api/custom/skus/{id}/preview — price and composite for the
/// current selections. Ephemeral: never writes; persisting is the
/// separate quote submit flow.
pub async fn preview_sku(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<PreviewRequest>,
) -> ApiResult<Preview> {
    let sku = db::get_sku_detail(&state.pool, id)
        .await
        .map_err(internal)?
        .ok_or_else(|| AppError::new(ErrorCode::SkuNotFound))?;
    Ok(Json(configurator::preview(&sku, &req.selections)))
}
