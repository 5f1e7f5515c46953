//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
///
/// Categories are determined by the leading digit of the error code:
/// - 0xxx: General errors
/// - 1xxx: Catalog errors
/// - 2xxx: Content errors
/// - 3xxx: Configurator errors
/// - 4xxx: Quote errors
/// - 5xxx: Upload errors
/// - 9xxx: System errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// Catalog errors (1xxx)
    Catalog,
    /// Content errors (2xxx)
    Content,
    /// Configurator errors (3xxx)
    Configurator,
    /// Quote errors (4xxx)
    Quote,
    /// Upload errors (5xxx)
    Upload,
    /// System errors (9xxx)
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            0..1000 => Self::General,
            1000..2000 => Self::Catalog,
            2000..3000 => Self::Content,
            3000..4000 => Self::Configurator,
            4000..5000 => Self::Quote,
            5000..6000 => Self::Upload,
            _ => Self::System,
        }
    }

    /// Get the string name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Catalog => "catalog",
            Self::Content => "content",
            Self::Configurator => "configurator",
            Self::Quote => "quote",
            Self::Upload => "upload",
            Self::System => "system",
        }
    }
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_code() {
        assert_eq!(ErrorCode::NotFound.category(), ErrorCategory::General);
        assert_eq!(ErrorCode::ProductNotFound.category(), ErrorCategory::Catalog);
        assert_eq!(ErrorCode::SettingNotFound.category(), ErrorCategory::Content);
        assert_eq!(
            ErrorCode::SkuNotFound.category(),
            ErrorCategory::Configurator
        );
        assert_eq!(ErrorCode::QuoteNotFound.category(), ErrorCategory::Quote);
        assert_eq!(ErrorCode::FileTooLarge.category(), ErrorCategory::Upload);
        assert_eq!(ErrorCode::DatabaseError.category(), ErrorCategory::System);
    }

    #[test]
    fn test_category_names() {
        assert_eq!(ErrorCategory::General.name(), "general");
        assert_eq!(ErrorCategory::System.name(), "system");
    }
}
