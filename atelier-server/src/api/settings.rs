//! Site settings API handlers
//!
//! GET returns the settings as one id → value map (the shape the
//! storefront reads its feature flags from); PUT upserts a single key.

use std::collections::BTreeMap;

use axum::{
    Json,
    extract::{Path, State},
};
use shared::models::setting::SettingUpdate;
use shared::response::OpResult;

use crate::db::setting as db;
use crate::state::AppState;

use super::{ApiResult, internal};

pub async fn list_settings(State(state): State<AppState>) -> ApiResult<BTreeMap<String, String>> {
    let settings = db::list_settings(&state.pool).await.map_err(internal)?;
    let map: BTreeMap<String, String> =
        settings.into_iter().map(|s| (s.id, s.value)).collect();
    Ok(Json(map))
}

pub async fn update_setting(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(data): Json<SettingUpdate>,
) -> ApiResult<OpResult> {
    db::upsert_setting(&state.pool, &id, &data.value)
        .await
        .map_err(internal)?;
    Ok(Json(OpResult::ok()))
}
