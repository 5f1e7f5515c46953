//! Site Setting Model
//!
//! A tiny key-value table. The one known key is the `custom_page_enabled`
//! feature flag (boolean stored as the strings "true"/"false"); its typed
//! accessor and default live here.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One row of `site_settings`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct SiteSetting {
    pub id: String,
    pub value: String,
}

/// Update setting payload — body of `PUT /api/settings/{id}` (upsert)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingUpdate {
    pub value: String,
}

/// Feature flag: whether the storefront shows the Custom configurator page
pub const CUSTOM_PAGE_ENABLED: &str = "custom_page_enabled";

/// Typed accessor for [`CUSTOM_PAGE_ENABLED`]. Missing key defaults to true;
/// anything other than the string "false" counts as enabled.
pub fn custom_page_enabled(settings: &HashMap<String, String>) -> bool {
    settings
        .get(CUSTOM_PAGE_ENABLED)
        .map(|v| v != "false")
        .unwrap_or(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(value: &str) -> HashMap<String, String> {
        HashMap::from([(CUSTOM_PAGE_ENABLED.to_string(), value.to_string())])
    }

    #[test]
    fn test_flag_true() {
        assert!(custom_page_enabled(&settings("true")));
    }

    #[test]
    fn test_flag_false() {
        assert!(!custom_page_enabled(&settings("false")));
    }

    #[test]
    fn test_flag_defaults_to_enabled() {
        assert!(custom_page_enabled(&HashMap::new()));
    }

    #[test]
    fn test_flag_unrecognized_value_counts_as_enabled() {
        assert!(custom_page_enabled(&settings("yes")));
    }
}
