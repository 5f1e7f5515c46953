//! Unified error codes for the Atelier content service
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Catalog errors
//! - 2xxx: Content errors
//! - 3xxx: Configurator errors
//! - 4xxx: Quote errors
//! - 5xxx: Upload errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,

    // ==================== 1xxx: Catalog ====================
    /// Product not found
    ProductNotFound = 1001,
    /// Hero slide not found
    HeroSlideNotFound = 1101,

    // ==================== 2xxx: Content ====================
    /// Content key not found
    ContentKeyNotFound = 2001,
    /// Site setting not found
    SettingNotFound = 2101,

    // ==================== 3xxx: Configurator ====================
    /// Custom SKU not found
    SkuNotFound = 3001,
    /// Custom SKU is not active
    SkuInactive = 3002,
    /// Custom part not found
    PartNotFound = 3101,
    /// Custom option not found
    OptionNotFound = 3201,

    // ==================== 4xxx: Quote ====================
    /// Quote not found
    QuoteNotFound = 4001,
    /// Invalid quote status value
    QuoteInvalidStatus = 4002,

    // ==================== 5xxx: Upload ====================
    /// File too large
    FileTooLarge = 5001,
    /// Invalid/undecodable image payload
    InvalidImageData = 5002,
    /// Empty file provided
    EmptyFile = 5003,
    /// Upload to the media service failed
    UploadFailed = 5004,
    /// Media service is not configured
    MediaNotConfigured = 5005,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
    /// Network error
    NetworkError = 9003,
    /// Operation timeout
    TimeoutError = 9004,
    /// Configuration error
    ConfigError = 9005,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Required field is missing",

            // Catalog
            ErrorCode::ProductNotFound => "Product not found",
            ErrorCode::HeroSlideNotFound => "Hero slide not found",

            // Content
            ErrorCode::ContentKeyNotFound => "Content key not found",
            ErrorCode::SettingNotFound => "Site setting not found",

            // Configurator
            ErrorCode::SkuNotFound => "Custom SKU not found",
            ErrorCode::SkuInactive => "Custom SKU is not active",
            ErrorCode::PartNotFound => "Custom part not found",
            ErrorCode::OptionNotFound => "Custom option not found",

            // Quote
            ErrorCode::QuoteNotFound => "Quote not found",
            ErrorCode::QuoteInvalidStatus => "Invalid quote status value",

            // Upload
            ErrorCode::FileTooLarge => "File too large",
            ErrorCode::InvalidImageData => "Invalid image payload",
            ErrorCode::EmptyFile => "Empty file provided",
            ErrorCode::UploadFailed => "Image upload failed",
            ErrorCode::MediaNotConfigured => "Media service is not configured",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::DatabaseError => "Database error",
            ErrorCode::NetworkError => "Network error",
            ErrorCode::TimeoutError => "Operation timed out",
            ErrorCode::ConfigError => "Configuration error",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({})", self, self.code())
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> u16 {
        code.code()
    }
}

/// Error returned when converting an unknown u16 into an [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        let code = match value {
            0 => Self::Success,
            1 => Self::Unknown,
            2 => Self::ValidationFailed,
            3 => Self::NotFound,
            4 => Self::AlreadyExists,
            5 => Self::InvalidRequest,
            6 => Self::InvalidFormat,
            7 => Self::RequiredField,
            1001 => Self::ProductNotFound,
            1101 => Self::HeroSlideNotFound,
            2001 => Self::ContentKeyNotFound,
            2101 => Self::SettingNotFound,
            3001 => Self::SkuNotFound,
            3002 => Self::SkuInactive,
            3101 => Self::PartNotFound,
            3201 => Self::OptionNotFound,
            4001 => Self::QuoteNotFound,
            4002 => Self::QuoteInvalidStatus,
            5001 => Self::FileTooLarge,
            5002 => Self::InvalidImageData,
            5003 => Self::EmptyFile,
            5004 => Self::UploadFailed,
            5005 => Self::MediaNotConfigured,
            9001 => Self::InternalError,
            9002 => Self::DatabaseError,
            9003 => Self::NetworkError,
            9004 => Self::TimeoutError,
            9005 => Self::ConfigError,
            other => return Err(InvalidErrorCode(other)),
        };
        Ok(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_values() {
        assert_eq!(ErrorCode::Success.code(), 0);
        assert_eq!(ErrorCode::NotFound.code(), 3);
        assert_eq!(ErrorCode::SkuNotFound.code(), 3001);
        assert_eq!(ErrorCode::InternalError.code(), 9001);
    }

    #[test]
    fn test_try_from_round_trip() {
        for code in [
            ErrorCode::Success,
            ErrorCode::ValidationFailed,
            ErrorCode::ProductNotFound,
            ErrorCode::QuoteInvalidStatus,
            ErrorCode::MediaNotConfigured,
            ErrorCode::ConfigError,
        ] {
            assert_eq!(ErrorCode::try_from(code.code()), Ok(code));
        }
    }

    #[test]
    fn test_try_from_invalid() {
        assert_eq!(ErrorCode::try_from(777), Err(InvalidErrorCode(777)));
    }

    #[test]
    fn test_serde_as_u16() {
        let json = serde_json::to_string(&ErrorCode::QuoteNotFound).unwrap();
        assert_eq!(json, "4001");
        let code: ErrorCode = serde_json::from_str("4001").unwrap();
        assert_eq!(code, ErrorCode::QuoteNotFound);
    }
}
