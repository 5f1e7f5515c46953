//! Custom part database operations

use shared::models::custom::{CustomPartCreate, CustomPartUpdate};
use shared::util;
use sqlx::PgPool;

use crate::db::BoxError;

pub async fn create_part(pool: &PgPool, data: &CustomPartCreate) -> Result<i64, BoxError> {
    let id = util::next_id();
    sqlx::query(
        "INSERT INTO custom_parts (id, sku_id, name, layer_order, created_at) VALUES ($1, $2, $3, $4, $5)",
    )
    .bind(id)
    .bind(data.sku_id)
    .bind(&data.name)
    .bind(data.layer_order)
    .bind(util::now_millis())
    .execute(pool)
    .await?;
    Ok(id)
}

/// Full-record replace. Matching zero rows is not an error.
pub async fn update_part(pool: &PgPool, id: i64, data: &CustomPartUpdate) -> Result<(), BoxError> {
    sqlx::query("UPDATE custom_parts SET name = $1, layer_order = $2 WHERE id = $3")
        .bind(&data.name)
        .bind(data.layer_order)
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}

/// Deleting a part cascades to its options (FK ON DELETE CASCADE).
pub async fn delete_part(pool: &PgPool, id: i64) -> Result<(), BoxError> {
    sqlx::query("DELETE FROM custom_parts WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}
