//! Hero slide CRUD API handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::models::hero_slide::{HeroSlide, HeroSlideInput};
use shared::response::OpResult;

use crate::db::hero_slide as db;
use crate::state::AppState;

use super::{ApiResult, internal};

pub async fn list_hero_slides(State(state): State<AppState>) -> ApiResult<Vec<HeroSlide>> {
    let slides = db::list_hero_slides(&state.pool).await.map_err(internal)?;
    Ok(Json(slides))
}

pub async fn create_hero_slide(
    State(state): State<AppState>,
    Json(data): Json<HeroSlideInput>,
) -> ApiResult<OpResult> {
    let id = db::create_hero_slide(&state.pool, &data)
        .await
        .map_err(internal)?;
    Ok(Json(OpResult::created(id)))
}

pub async fn update_hero_slide(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(data): Json<HeroSlideInput>,
) -> ApiResult<OpResult> {
    db::update_hero_slide(&state.pool, id, &data)
        .await
        .map_err(internal)?;
    Ok(Json(OpResult::ok()))
}

pub async fn delete_hero_slide(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<OpResult> {
    db::delete_hero_slide(&state.pool, id)
        .await
        .map_err(internal)?;
    Ok(Json(OpResult::ok()))
}
