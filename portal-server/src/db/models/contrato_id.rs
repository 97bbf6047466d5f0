//! Contract identifier
//!
//! Clients only ever see the record key as an opaque string. It is checked
//! against the shape SurrealDB generates before a `RecordId` is built.

use std::fmt;

use surrealdb::RecordId;
use thiserror::Error;

use crate::db::CONTRATO_TABLE;

/// Length of the keys SurrealDB generates for `CREATE <table>`
pub const KEY_LEN: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid contract id: {0:?}")]
pub struct InvalidContratoId(pub String);

/// Validated key of a `contrato` record
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContratoId(String);

impl ContratoId {
    /// Parse a client-supplied id
    ///
    /// Accepts the bare key or the `contrato:<key>` form.
    pub fn parse(raw: &str) -> Result<Self, InvalidContratoId> {
        let prefix = format!("{CONTRATO_TABLE}:");
        let key = raw.strip_prefix(prefix.as_str()).unwrap_or(raw);

        let well_formed = key.len() == KEY_LEN
            && key
                .bytes()
                .all(|b| b.is_ascii_digit() || b.is_ascii_lowercase());

        if well_formed {
            Ok(Self(key.to_string()))
        } else {
            Err(InvalidContratoId(raw.to_string()))
        }
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Native record id for queries
    pub fn record_id(&self) -> RecordId {
        RecordId::from_table_key(CONTRATO_TABLE, self.0.clone())
    }
}

impl fmt::Display for ContratoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
