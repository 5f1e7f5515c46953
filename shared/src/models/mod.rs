//! Data models
//!
//! Shared between the server and the admin console (via API).
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All generated IDs are snowflake-style `i64` (see [`crate::util::next_id`]);
//! content entries and site settings keep their semantic TEXT keys.

pub mod content;
pub mod custom;
pub mod hero_slide;
pub mod product;
pub mod quote;
pub mod setting;

// Re-exports
pub use content::*;
pub use custom::*;
pub use hero_slide::*;
pub use product::*;
pub use quote::*;
pub use setting::*;
