//! Shared types for the contract portal
//!
//! Wire models and the unified error system used by the server crate
//! and its integration tests.

pub mod error;
pub mod models;

pub use error::{AppError, AppResult, ErrorCode};
pub use models::{Contrato, ContratoCreated, ContratoPayload, StatusAck};
