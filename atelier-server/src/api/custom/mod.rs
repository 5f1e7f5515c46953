//! Configurator API handlers (SKUs, parts, options, quotes)
//!
//! The invalidation unit after any part/option mutation is the owning
//! SKU's subtree; clients re-fetch it via `GET /api/custom/skus/{id}`,
//! so part/option mutations return only the operation result.

pub mod option;
pub mod part;
pub mod quote;
pub mod sku;
