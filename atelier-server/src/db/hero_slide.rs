//! Hero slide database operations

use shared::models::hero_slide::{HeroSlide, HeroSlideInput};
use shared::util;
use sqlx::PgPool;

use super::BoxError;

pub async fn list_hero_slides(pool: &PgPool) -> Result<Vec<HeroSlide>, BoxError> {
    let slides: Vec<HeroSlide> =
        sqlx::query_as("SELECT id, image, title, subtitle, cta FROM hero_slides ORDER BY id")
            .fetch_all(pool)
            .await?;
    Ok(slides)
}

pub async fn create_hero_slide(pool: &PgPool, data: &HeroSlideInput) -> Result<i64, BoxError> {
    let id = util::next_id();
    sqlx::query("INSERT INTO hero_slides (id, image, title, subtitle, cta) VALUES ($1, $2, $3, $4, $5)")
        .bind(id)
        .bind(&data.image)
        .bind(&data.title)
        .bind(&data.subtitle)
        .bind(&data.cta)
        .execute(pool)
        .await?;
    Ok(id)
}

/// Full-record replace. Matching zero rows is not an error.
pub async fn update_hero_slide(
    pool: &PgPool,
    id: i64,
    data: &HeroSlideInput,
) -> Result<(), BoxError> {
    sqlx::query("UPDATE hero_slides SET image = $1, title = $2, subtitle = $3, cta = $4 WHERE id = $5")
        .bind(&data.image)
        .bind(&data.title)
        .bind(&data.subtitle)
        .bind(&data.cta)
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}

pub async fn delete_hero_slide(pool: &PgPool, id: i64) -> Result<(), BoxError> {
    sqlx::query("DELETE FROM hero_slides WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}
