//! Custom Quote Model
//!
//! A quote is a frozen snapshot of one customer's selections, price, and
//! contact info. Selections and total_price are captured at creation and
//! never recomputed against live SKU data; deleting the SKU tree leaves
//! quotes untouched (no foreign keys, orphaned references tolerated).

use serde::{Deserialize, Serialize};

/// Quote lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuoteStatus {
    Pending,
    Contacted,
    Completed,
    Cancelled,
}

impl QuoteStatus {
    /// The stored TEXT value
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Contacted => "contacted",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    /// Parse a stored/submitted value; None for anything unknown
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(Self::Pending),
            "contacted" => Some(Self::Contacted),
            "completed" => Some(Self::Completed),
            "cancelled" => Some(Self::Cancelled),
            _ => None,
        }
    }
}

/// One frozen selection line inside a quote
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionSnapshot {
    pub part_id: i64,
    pub part_name: String,
    pub option_id: i64,
    pub option_name: String,
    pub product_code: String,
    pub price: f64,
    pub image: String,
}

/// A persisted quote
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomQuote {
    pub id: i64,
    /// SKU reference, denormalized at creation time; never re-joined
    pub sku_id: i64,
    pub sku_name: String,
    pub selections: Vec<SelectionSnapshot>,
    pub total_price: f64,
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_email: String,
    pub customer_note: String,
    /// Composite preview captured at submit time
    pub preview_image: String,
    pub status: QuoteStatus,
    /// Epoch millis
    pub created_at: i64,
}

/// Create quote payload — the configurator submit flow. Trusted client
/// snapshot; the server stores it verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomQuoteCreate {
    pub sku_id: i64,
    #[serde(default)]
    pub sku_name: String,
    #[serde(default)]
    pub selections: Vec<SelectionSnapshot>,
    #[serde(default)]
    pub total_price: f64,
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub customer_phone: String,
    #[serde(default)]
    pub customer_email: String,
    #[serde(default)]
    pub customer_note: String,
    #[serde(default)]
    pub preview_image: String,
}

/// Update quote payload — status only. The status arrives as a raw string
/// so the handler can reject unknown values with a validation error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomQuoteStatusUpdate {
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip() {
        for status in [
            QuoteStatus::Pending,
            QuoteStatus::Contacted,
            QuoteStatus::Completed,
            QuoteStatus::Cancelled,
        ] {
            assert_eq!(QuoteStatus::parse(status.as_str()), Some(status));
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
        }
    }

    #[test]
    fn test_status_rejects_unknown() {
        assert_eq!(QuoteStatus::parse("shipped"), None);
        assert_eq!(QuoteStatus::parse(""), None);
        assert_eq!(QuoteStatus::parse("Pending"), None);
    }

    #[test]
    fn test_quote_create_coerces_missing_fields() {
        let input: CustomQuoteCreate = serde_json::from_str(r#"{"sku_id":7}"#).unwrap();
        assert_eq!(input.total_price, 0.0);
        assert!(input.selections.is_empty());
        assert_eq!(input.customer_note, "");
        assert_eq!(input.preview_image, "");
    }
}
