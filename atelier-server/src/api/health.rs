//! Health check endpoint

use axum::{Json, extract::State};

use crate::state::AppState;

/// GET /api/health — `database` is a live probe, not an env check
pub async fn health_check(State(state): State<AppState>) -> Json<serde_json::Value> {
    let database = sqlx::query("SELECT 1").execute(&state.pool).await.is_ok();
    Json(serde_json::json!({
        "status": "ok",
        "service": "atelier-server",
        "version": env!("CARGO_PKG_VERSION"),
        "database": database,
    }))
}
