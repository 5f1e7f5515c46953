//! Site setting database operations

use shared::models::setting::SiteSetting;
use sqlx::PgPool;

use super::BoxError;

pub async fn list_settings(pool: &PgPool) -> Result<Vec<SiteSetting>, BoxError> {
    let settings: Vec<SiteSetting> =
        sqlx::query_as("SELECT id, value FROM site_settings ORDER BY id")
            .fetch_all(pool)
            .await?;
    Ok(settings)
}

pub async fn upsert_setting(pool: &PgPool, id: &str, value: &str) -> Result<(), BoxError> {
    sqlx::query(
        r#"
        INSERT INTO site_settings (id, value)
        VALUES ($1, $2)
        ON CONFLICT (id) DO UPDATE SET value = EXCLUDED.value
        "#,
    )
    .bind(id)
    .bind(value)
    .execute(pool)
    .await?;
    Ok(())
}
