//! Hero Slide Model

use serde::{Deserialize, Serialize};

/// Home page hero slide, listed in id order
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct HeroSlide {
    pub id: i64,
    pub image: String,
    pub title: String,
    pub subtitle: String,
    /// Call-to-action label
    pub cta: String,
}

/// Create/update hero slide payload (full-record replace semantics)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeroSlideInput {
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub cta: String,
}
