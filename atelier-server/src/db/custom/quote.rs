//! Custom quote database operations
//!
//! Quotes are frozen snapshots: written once from the submitted payload,
//! never recomputed against live SKU data. Only `status` is mutable.

use shared::models::quote::{CustomQuote, CustomQuoteCreate, QuoteStatus, SelectionSnapshot};
use shared::util;
use sqlx::PgPool;
use sqlx::types::Json;

use crate::db::BoxError;

#[derive(sqlx::FromRow)]
struct QuoteRow {
    id: i64,
    sku_id: i64,
    sku_name: String,
    selections: Json<Vec<SelectionSnapshot>>,
    total_price: f64,
    customer_name: String,
    customer_phone: String,
    customer_email: String,
    customer_note: String,
    preview_image: String,
    status: String,
    created_at: i64,
}

impl From<QuoteRow> for CustomQuote {
    fn from(row: QuoteRow) -> Self {
        let status = QuoteStatus::parse(&row.status).unwrap_or_else(|| {
            tracing::warn!(quote_id = row.id, status = %row.status, "Unknown quote status in storage");
            QuoteStatus::Pending
        });
        Self {
            id: row.id,
            sku_id: row.sku_id,
            sku_name: row.sku_name,
            selections: row.selections.0,
            total_price: row.total_price,
            customer_name: row.customer_name,
            customer_phone: row.customer_phone,
            customer_email: row.customer_email,
            customer_note: row.customer_note,
            preview_image: row.preview_image,
            status,
            created_at: row.created_at,
        }
    }
}

const QUOTE_COLUMNS: &str = "id, sku_id, sku_name, selections, total_price, customer_name, \
     customer_phone, customer_email, customer_note, preview_image, status, created_at";

pub async fn list_quotes(pool: &PgPool) -> Result<Vec<CustomQuote>, BoxError> {
    let sql = format!(
        "SELECT {QUOTE_COLUMNS} FROM custom_quotes ORDER BY created_at DESC, id DESC"
    );
    let rows: Vec<QuoteRow> = sqlx::query_as(&sql).fetch_all(pool).await?;
    Ok(rows.into_iter().map(CustomQuote::from).collect())
}

pub async fn get_quote(pool: &PgPool, id: i64) -> Result<Option<CustomQuote>, BoxError> {
    let sql = format!("SELECT {QUOTE_COLUMNS} FROM custom_quotes WHERE id = $1");
    let row: Option<QuoteRow> = sqlx::query_as(&sql).bind(id).fetch_optional(pool).await?;
    Ok(row.map(CustomQuote::from))
}

pub async fn create_quote(pool: &PgPool, data: &CustomQuoteCreate) -> Result<i64, BoxError> {
    let id = util::next_id();
    sqlx::query(
        r#"
        INSERT INTO custom_quotes (
            id, sku_id, sku_name, selections, total_price,
            customer_name, customer_phone, customer_email, customer_note,
            preview_image, status, created_at
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
        "#,
    )
    .bind(id)
    .bind(data.sku_id)
    .bind(&data.sku_name)
    .bind(Json(&data.selections))
    .bind(data.total_price)
    .bind(&data.customer_name)
    .bind(&data.customer_phone)
    .bind(&data.customer_email)
    .bind(&data.customer_note)
    .bind(&data.preview_image)
    .bind(QuoteStatus::Pending.as_str())
    .bind(util::now_millis())
    .execute(pool)
    .await?;
    Ok(id)
}

pub async fn update_quote_status(
    pool: &PgPool,
    id: i64,
    status: QuoteStatus,
) -> Result<(), BoxError> {
    sqlx::query("UPDATE custom_quotes SET status = $1 WHERE id = $2")
        .bind(status.as_str())
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}

pub async fn delete_quote(pool: &PgPool, id: i64) -> Result<(), BoxError> {
    sqlx::query("DELETE FROM custom_quotes WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}
