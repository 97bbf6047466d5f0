//! Database-side types

pub mod contrato_id;

pub use contrato_id::{ContratoId, InvalidContratoId};
