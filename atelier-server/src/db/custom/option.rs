//! Custom option database operations

use shared::models::custom::{CustomOptionCreate, CustomOptionUpdate};
use shared::util;
use sqlx::PgPool;

use crate::db::BoxError;

pub async fn create_option(pool: &PgPool, data: &CustomOptionCreate) -> Result<i64, BoxError> {
    let id = util::next_id();
    sqlx::query(
        r#"
        INSERT INTO custom_options (id, part_id, name, image, product_code, price, sort_order, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        "#,
    )
    .bind(id)
    .bind(data.part_id)
    .bind(&data.name)
    .bind(&data.image)
    .bind(&data.product_code)
    .bind(data.price)
    .bind(data.sort_order)
    .bind(util::now_millis())
    .execute(pool)
    .await?;
    Ok(id)
}

/// Full-record replace. Matching zero rows is not an error.
pub async fn update_option(
    pool: &PgPool,
    id: i64,
    data: &CustomOptionUpdate,
) -> Result<(), BoxError> {
    sqlx::query(
        r#"
        UPDATE custom_options SET
            name = $1, image = $2, product_code = $3, price = $4, sort_order = $5
        WHERE id = $6
        "#,
    )
    .bind(&data.name)
    .bind(&data.image)
    .bind(&data.product_code)
    .bind(data.price)
    .bind(data.sort_order)
    .bind(id)
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn delete_option(pool: &PgPool, id: i64) -> Result<(), BoxError> {
    sqlx::query("DELETE FROM custom_options WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}
