//! Unified error system for the Atelier content service
//!
//! - [`ErrorCode`]: standardized error codes for all error types
//! - [`ErrorCategory`]: classification of errors by domain
//! - [`AppError`]: rich error type with codes, messages, and details
//! - [`ErrorBody`]: the JSON error body sent over the wire
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 1xxx: Catalog errors (products, hero slides)
//! - 2xxx: Content errors (content entries, settings)
//! - 3xxx: Configurator errors (SKUs, parts, options)
//! - 4xxx: Quote errors
//! - 5xxx: Upload errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//!
//! // Create a simple error
//! let err = AppError::new(ErrorCode::NotFound);
//!
//! // Create an error with a custom message
//! let err = AppError::with_message(ErrorCode::ValidationFailed, "Invalid status value");
//!
//! // Create an error with details
//! let err = AppError::validation("Missing required field")
//!     .with_detail("field", "name");
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult, ErrorBody};
