//! Custom Configurator Models (SKU → Part → Option)

use serde::{Deserialize, Serialize};

/// A configurable product template, composed of ordered parts
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct CustomSku {
    pub id: i64,
    pub name: String,
    pub base_price: f64,
    pub is_active: bool,
    /// Epoch millis
    pub created_at: i64,

    // -- Relations (populated by application code, skipped by FromRow) --

    #[cfg_attr(feature = "db", sqlx(skip))]
    #[serde(default)]
    pub parts: Vec<CustomPart>,
}

/// A customizable component slot of a SKU (e.g. "Case")
///
/// `layer_order` drives both compositing z-order (ascending, low paints
/// first) and tab prominence (descending). Values need not be contiguous;
/// equal values are broken by ascending id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct CustomPart {
    pub id: i64,
    pub sku_id: i64,
    pub name: String,
    pub layer_order: i32,
    pub created_at: i64,

    #[cfg_attr(feature = "db", sqlx(skip))]
    #[serde(default)]
    pub options: Vec<CustomOption>,
}

/// One selectable variant of a part, carrying an additive price and the
/// image used in compositing. `sort_order` is UI ordering only, not
/// layering.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct CustomOption {
    pub id: i64,
    pub part_id: i64,
    pub name: String,
    pub image: String,
    /// Free-text SKU/part-number string
    pub product_code: String,
    /// Additive price modifier
    pub price: f64,
    pub sort_order: i32,
    pub created_at: i64,
}

/// Create/update SKU payload (full-record replace semantics)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomSkuInput {
    pub name: String,
    #[serde(default)]
    pub base_price: f64,
    #[serde(default)]
    pub is_active: bool,
}

/// Create part payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomPartCreate {
    pub sku_id: i64,
    pub name: String,
    #[serde(default)]
    pub layer_order: i32,
}

/// Update part payload (full-record replace; the owning SKU never changes)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomPartUpdate {
    pub name: String,
    #[serde(default)]
    pub layer_order: i32,
}

/// Create option payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomOptionCreate {
    pub part_id: i64,
    pub name: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub product_code: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub sort_order: i32,
}

/// Update option payload (full-record replace; the owning part never changes)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomOptionUpdate {
    pub name: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub product_code: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub sort_order: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sku_input_coerces_missing_fields() {
        let input: CustomSkuInput = serde_json::from_str(r#"{"name":"Watch"}"#).unwrap();
        assert_eq!(input.base_price, 0.0);
        assert!(!input.is_active);
    }

    #[test]
    fn test_nested_sku_deserializes_without_parts() {
        let json = r#"{"id":1,"name":"Watch","base_price":500.0,"is_active":true,"created_at":0}"#;
        let sku: CustomSku = serde_json::from_str(json).unwrap();
        assert!(sku.parts.is_empty());
    }
}
