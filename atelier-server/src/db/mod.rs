//! Database access layer
//!
//! One query module per entity family. All writes go straight to Postgres;
//! consistency (FK cascades included) is delegated to the database.

pub mod content;
pub mod custom;
pub mod hero_slide;
pub mod product;
pub mod setting;

pub(crate) type BoxError = Box<dyn std::error::Error + Send + Sync>;
