//! Custom SKU database operations

use std::collections::HashMap;

use shared::models::custom::{CustomOption, CustomPart, CustomSku, CustomSkuInput};
use shared::util;
use sqlx::PgPool;

use crate::db::BoxError;

pub async fn list_skus(pool: &PgPool) -> Result<Vec<CustomSku>, BoxError> {
    let skus: Vec<CustomSku> = sqlx::query_as(
        r#"
        SELECT id, name, base_price, is_active, created_at
        FROM custom_skus
        ORDER BY created_at DESC, id DESC
        "#,
    )
    .fetch_all(pool)
    .await?;
    Ok(skus)
}

pub async fn list_active_skus(pool: &PgPool) -> Result<Vec<CustomSku>, BoxError> {
    let skus: Vec<CustomSku> = sqlx::query_as(
        r#"
        SELECT id, name, base_price, is_active, created_at
        FROM custom_skus
        WHERE is_active = TRUE
        ORDER BY created_at DESC, id DESC
        "#,
    )
    .fetch_all(pool)
    .await?;
    Ok(skus)
}

/// Fetch one SKU with its full part → option subtree.
///
/// Parts come back in paint order (layer_order, id ascending); options in
/// (sort_order, id ascending). This aggregate is also what admin clients
/// re-fetch after any part/option mutation.
pub async fn get_sku_detail(pool: &PgPool, id: i64) -> Result<Option<CustomSku>, BoxError> {
    let sku: Option<CustomSku> = sqlx::query_as(
        "SELECT id, name, base_price, is_active, created_at FROM custom_skus WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    let Some(mut sku) = sku else {
        return Ok(None);
    };

    let mut parts: Vec<CustomPart> = sqlx::query_as(
        r#"
        SELECT id, sku_id, name, layer_order, created_at
        FROM custom_parts
        WHERE sku_id = $1
        ORDER BY layer_order, id
        "#,
    )
    .bind(id)
    .fetch_all(pool)
    .await?;

    if !parts.is_empty() {
        let part_ids: Vec<i64> = parts.iter().map(|p| p.id).collect();
        let options: Vec<CustomOption> = sqlx::query_as(
            r#"
            SELECT id, part_id, name, image, product_code, price, sort_order, created_at
            FROM custom_options
            WHERE part_id = ANY($1)
            ORDER BY sort_order, id
            "#,
        )
        .bind(&part_ids)
        .fetch_all(pool)
        .await?;

        let mut option_map: HashMap<i64, Vec<CustomOption>> = HashMap::new();
        for o in options {
            option_map.entry(o.part_id).or_default().push(o);
        }
        for part in &mut parts {
            part.options = option_map.remove(&part.id).unwrap_or_default();
        }
    }

    sku.parts = parts;
    Ok(Some(sku))
}

pub async fn create_sku(pool: &PgPool, data: &CustomSkuInput) -> Result<i64, BoxError> {
    let id = util::next_id();
    sqlx::query(
        "INSERT INTO custom_skus (id, name, base_price, is_active, created_at) VALUES ($1, $2, $3, $4, $5)",
    )
    .bind(id)
    .bind(&data.name)
    .bind(data.base_price)
    .bind(data.is_active)
    .bind(util::now_millis())
    .execute(pool)
    .await?;
    Ok(id)
}

/// Full-record replace. Matching zero rows is not an error.
pub async fn update_sku(pool: &PgPool, id: i64, data: &CustomSkuInput) -> Result<(), BoxError> {
    sqlx::query("UPDATE custom_skus SET name = $1, base_price = $2, is_active = $3 WHERE id = $4")
        .bind(&data.name)
        .bind(data.base_price)
        .bind(data.is_active)
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}

/// Deleting a SKU cascades to its parts and their options (FK ON DELETE
/// CASCADE). Quotes are untouched.
pub async fn delete_sku(pool: &PgPool, id: i64) -> Result<(), BoxError> {
    sqlx::query("DELETE FROM custom_skus WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}
