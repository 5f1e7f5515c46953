//! Product Model

use serde::{Deserialize, Serialize};

/// Catalog product entity
///
/// `isNew` / `isBestSeller` keep their historical wire names; the columns
/// are snake_case.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub category: String,
    pub image: String,
    #[serde(rename = "isNew")]
    pub is_new: bool,
    #[serde(rename = "isBestSeller")]
    pub is_best_seller: bool,
}

/// Create/update product payload (full-record replace semantics)
///
/// Missing numerics coerce to 0, missing booleans to false, missing
/// strings to "" — the write path trusts client shapes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductInput {
    pub name: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub image: String,
    #[serde(default, rename = "isNew")]
    pub is_new: bool,
    #[serde(default, rename = "isBestSeller")]
    pub is_best_seller: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names() {
        let p = Product {
            id: 1,
            name: "Structured Wool Coat".into(),
            price: 1250.0,
            category: "Outerwear".into(),
            image: "https://example.com/coat.webp".into(),
            is_new: true,
            is_best_seller: false,
        };
        let json = serde_json::to_string(&p).unwrap();
        assert!(json.contains("\"isNew\":true"));
        assert!(json.contains("\"isBestSeller\":false"));
        assert!(!json.contains("is_new"));
    }

    #[test]
    fn test_input_coerces_missing_fields() {
        let input: ProductInput = serde_json::from_str(r#"{"name":"Tunic"}"#).unwrap();
        assert_eq!(input.price, 0.0);
        assert_eq!(input.category, "");
        assert_eq!(input.image, "");
        assert!(!input.is_new);
        assert!(!input.is_best_seller);
    }
}
