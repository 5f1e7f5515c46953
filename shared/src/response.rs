//! Mutation result wire type
//!
//! Every mutating endpoint answers with this shape: `{"success": true}`,
//! creates additionally carry the new `id`.

use serde::{Deserialize, Serialize};

/// Result of a mutating operation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpResult {
    pub success: bool,
    /// Create operations return the generated ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Error message when the operation failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl OpResult {
    pub fn ok() -> Self {
        Self {
            success: true,
            id: None,
            error: None,
        }
    }

    pub fn created(id: i64) -> Self {
        Self {
            success: true,
            id: Some(id),
            error: None,
        }
    }

    pub fn err(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            id: None,
            error: Some(msg.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_serializes_minimal() {
        let json = serde_json::to_string(&OpResult::ok()).unwrap();
        assert_eq!(json, r#"{"success":true}"#);
    }

    #[test]
    fn test_created_carries_id() {
        let json = serde_json::to_string(&OpResult::created(42)).unwrap();
        assert_eq!(json, r#"{"success":true,"id":42}"#);
    }

    #[test]
    fn test_err_carries_message() {
        let res = OpResult::err("boom");
        assert!(!res.success);
        assert_eq!(res.error.as_deref(), Some("boom"));
    }
}
