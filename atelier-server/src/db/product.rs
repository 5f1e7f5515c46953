//! Product database operations

use shared::models::product::{Product, ProductInput};
use shared::util;
use sqlx::PgPool;

use super::BoxError;

pub async fn list_products(pool: &PgPool) -> Result<Vec<Product>, BoxError> {
    let products: Vec<Product> = sqlx::query_as(
        r#"
        SELECT id, name, price, category, image, is_new, is_best_seller
        FROM products
        ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await?;
    Ok(products)
}

pub async fn create_product(pool: &PgPool, data: &ProductInput) -> Result<i64, BoxError> {
    let id = util::next_id();
    sqlx::query(
        r#"
        INSERT INTO products (id, name, price, category, image, is_new, is_best_seller)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        "#,
    )
    .bind(id)
    .bind(&data.name)
    .bind(data.price)
    .bind(&data.category)
    .bind(&data.image)
    .bind(data.is_new)
    .bind(data.is_best_seller)
    .execute(pool)
    .await?;
    Ok(id)
}

/// Full-record replace. Matching zero rows is not an error.
pub async fn update_product(pool: &PgPool, id: i64, data: &ProductInput) -> Result<(), BoxError> {
    sqlx::query(
        r#"
        UPDATE products SET
            name = $1, price = $2, category = $3, image = $4,
            is_new = $5, is_best_seller = $6
        WHERE id = $7
        "#,
    )
    .bind(&data.name)
    .bind(data.price)
    .bind(&data.category)
    .bind(&data.image)
    .bind(data.is_new)
    .bind(data.is_best_seller)
    .bind(id)
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn delete_product(pool: &PgPool, id: i64) -> Result<(), BoxError> {
    sqlx::query("DELETE FROM products WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}
