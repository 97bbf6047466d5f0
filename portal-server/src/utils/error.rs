//! Error conversions into the shared [`AppError`]
//!
//! | Source | Code | HTTP |
//! |--------|------|------|
//! | payload validation | ValidationFailed (2) | 400 |
//! | malformed id | InvalidFormat (6) | 400 |
//! | repository failure | DatabaseError (9002) | 500 |

pub use shared::error::{AppError, AppResult, ErrorCode};

use crate::db::models::InvalidContratoId;
use crate::db::repository::RepoError;

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Database(msg) => {
                tracing::error!(error = %msg, "Repository error");
                AppError::database("Database operation failed")
            }
            RepoError::Decode(msg) => {
                tracing::error!(error = %msg, "Stored contrato could not be decoded");
                AppError::database("Stored data is corrupt")
            }
        }
    }
}

impl From<InvalidContratoId> for AppError {
    fn from(err: InvalidContratoId) -> Self {
        AppError::invalid_format(format!("Invalid contract id: {}", err.0)).with_detail("id", err.0)
    }
}
