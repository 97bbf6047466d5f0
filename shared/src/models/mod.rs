//! Wire models

pub mod contrato;
pub mod serde_helpers;

pub use contrato::{Contrato, ContratoCreated, ContratoPayload, DEFAULT_STATUS, StatusAck};
