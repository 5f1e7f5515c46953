//! Content table database operations
//!
//! `about_content` and `home_content` share one shape; the table is chosen
//! by [`ContentTable`], so the SQL text stays static.

use shared::models::content::{ContentEntry, ContentTable};
use sqlx::PgPool;

use super::BoxError;

pub async fn list_entries(
    pool: &PgPool,
    table: ContentTable,
) -> Result<Vec<ContentEntry>, BoxError> {
    let sql = format!(
        "SELECT id, section, content FROM {} ORDER BY id",
        table.table()
    );
    let entries: Vec<ContentEntry> = sqlx::query_as(&sql).fetch_all(pool).await?;
    Ok(entries)
}

/// Upsert a single content key. A multi-field page save is N independent
/// calls with no cross-call atomicity; a partial failure leaves the other
/// keys written.
pub async fn upsert_entry(
    pool: &PgPool,
    table: ContentTable,
    id: &str,
    section: &str,
    content: &str,
) -> Result<(), BoxError> {
    let sql = format!(
        r#"
        INSERT INTO {} (id, section, content)
        VALUES ($1, $2, $3)
        ON CONFLICT (id) DO UPDATE SET content = EXCLUDED.content
        "#,
        table.table()
    );
    sqlx::query(&sql)
        .bind(id)
        .bind(section)
        .bind(content)
        .execute(pool)
        .await?;
    Ok(())
}
