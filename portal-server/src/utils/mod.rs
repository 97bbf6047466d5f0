//! Utilities
//!
//! - [`AppError`] - application error type (from shared::error)
//! - logging setup
//! - payload validation

pub mod error;
pub mod logger;
pub mod validation;

pub use error::{AppError, AppResult, ErrorCode};
