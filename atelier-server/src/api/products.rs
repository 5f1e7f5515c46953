//! Product CRUD API handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::models::product::{Product, ProductInput};
use shared::response::OpResult;

use crate::db::product as db;
use crate::state::AppState;

use super::{ApiResult, internal};

pub async fn list_products(State(state): State<AppState>) -> ApiResult<Vec<Product>> {
    let products = db::list_products(&state.pool).await.map_err(internal)?;
    Ok(Json(products))
}

pub async fn create_product(
    State(state): State<AppState>,
    Json(data): Json<ProductInput>,
) -> ApiResult<OpResult> {
    let id = db::create_product(&state.pool, &data)
        .await
        .map_err(internal)?;
    Ok(Json(OpResult::created(id)))
}

pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(data): Json<ProductInput>,
) -> ApiResult<OpResult> {
    db::update_product(&state.pool, id, &data)
        .await
        .map_err(internal)?;
    Ok(Json(OpResult::ok()))
}

pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<OpResult> {
    db::delete_product(&state.pool, id).await.map_err(internal)?;
    Ok(Json(OpResult::ok()))
}
