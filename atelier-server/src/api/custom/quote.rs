//! Custom quote API handlers
//!
//! Create is the one unauthenticated customer-facing write (the
//! configurator submit flow); the stored snapshot is trusted verbatim and
//! never recomputed. Admin updates touch status only.

use axum::{
    Json,
    extract::{Path, State},
};
use shared::error::{AppError, ErrorCode};
use shared::models::quote::{CustomQuote, CustomQuoteCreate, CustomQuoteStatusUpdate, QuoteStatus};
use shared::response::OpResult;

use crate::db::custom as db;
use crate::state::AppState;

use crate::api::{ApiResult, internal};

pub async fn list_quotes(State(state): State<AppState>) -> ApiResult<Vec<CustomQuote>> {
    let quotes = db::list_quotes(&state.pool).await.map_err(internal)?;
    Ok(Json(quotes))
}

pub async fn get_quote(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult<CustomQuote> {
    let quote = db::get_quote(&state.pool, id)
        .await
        .map_err(internal)?
        .ok_or_else(|| AppError::new(ErrorCode::QuoteNotFound))?;
    Ok(Json(quote))
}

pub async fn create_quote(
    State(state): State<AppState>,
    Json(data): Json<CustomQuoteCreate>,
) -> ApiResult<OpResult> {
    let id = db::create_quote(&state.pool, &data)
        .await
        .map_err(internal)?;
    Ok(Json(OpResult::created(id)))
}

/// PUT /api/custom/quotes/{id} — status only
pub async fn update_quote_status(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(data): Json<CustomQuoteStatusUpdate>,
) -> ApiResult<OpResult> {
    let status = QuoteStatus::parse(&data.status).ok_or_else(|| {
        AppError::with_message(
            ErrorCode::QuoteInvalidStatus,
            format!("Unknown quote status: {}", data.status),
        )
    })?;
    db::update_quote_status(&state.pool, id, status)
        .await
        .map_err(internal)?;
    Ok(Json(OpResult::ok()))
}

pub async fn delete_quote(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<OpResult> {
    db::delete_quote(&state.pool, id).await.map_err(internal)?;
    Ok(Json(OpResult::ok()))
}
