//! Unified error system for the contract portal
//!
//! This module provides:
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`ErrorCategory`]: Client input vs. system failure
//! - [`AppError`]: Rich error type with codes, messages, and details
//! - [`ErrorResponse`]: Error body returned to clients
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors (validation, malformed input)
//! - 9xxx: System errors (database)
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorResponse};
//!
//! let err = AppError::validation("Missing required field")
//!     .with_detail("field", "nomeAmigavel");
//!
//! let body = ErrorResponse::from(&err);
//! assert_eq!(body.code.code(), 2);
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::ErrorCode;
pub use types::{AppError, AppResult, ErrorResponse};
