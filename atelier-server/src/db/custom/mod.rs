//! Configurator database operations (SKU → Part → Option, plus quotes)

pub mod option;
pub mod part;
pub mod quote;
pub mod sku;

pub use option::*;
pub use part::*;
pub use quote::*;
pub use sku::*;
