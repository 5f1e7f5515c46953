//! Shared types for the Atelier content service
//!
//! Domain models, the unified error system, mutation-result wire types,
//! and small utilities used by the server crate.

pub mod error;
pub mod models;
pub mod response;
pub mod util;

// Re-exports
pub use http;
pub use serde::{Deserialize, Serialize};
