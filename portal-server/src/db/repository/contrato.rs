//! Contrato Repository

use serde_json::Value;
use shared::models::{Contrato, ContratoPayload};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::CONTRATO_TABLE;
use crate::db::models::ContratoId;

/// Projection used by `find_all`; the record key is exposed as `key`
const SELECT_FIELDS: &str = "record::id(id) AS key, nomeAmigavel, filial, tipo, centroCusto, \
     valorTotal, duracao, valorMensal, fornecedor1, cnpj1, status, dataInicio, diaVencimento, \
     circ1, tags, info, fornecedor2, isRateado";

#[derive(Clone)]
pub struct ContratoRepository {
    base: BaseRepository,
}

impl ContratoRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// All contracts in store iteration order
    pub async fn find_all(&self) -> RepoResult<Vec<Contrato>> {
        let rows: Vec<Value> = self
            .base
            .db()
            .query(format!("SELECT {SELECT_FIELDS} FROM {CONTRATO_TABLE}"))
            .await?
            .take(0)?;

        rows.into_iter().map(decode_row).collect()
    }

    /// Insert one document and return the store-assigned id
    pub async fn create(&self, data: ContratoPayload) -> RepoResult<ContratoId> {
        let mut result = self
            .base
            .db()
            .query(format!(
                "LET $created = CREATE ONLY {CONTRATO_TABLE} CONTENT $data; \
                 RETURN record::id($created.id);"
            ))
            .bind(("data", data))
            .await?
            .check()?;

        let key: Option<String> = result.take(1)?;
        let key = key.ok_or_else(|| RepoError::Database("Failed to create contrato".to_string()))?;

        ContratoId::parse(&key).map_err(|e| RepoError::Decode(e.to_string()))
    }

    /// Replace every field of the record, keeping its id
    ///
    /// Returns whether a record matched. A missing record is left missing.
    pub async fn replace(&self, id: &ContratoId, data: ContratoPayload) -> RepoResult<bool> {
        let mut result = self
            .base
            .db()
            .query("LET $updated = UPDATE $rid CONTENT $data; RETURN array::len($updated);")
            .bind(("rid", id.record_id()))
            .bind(("data", data))
            .await?
            .check()?;

        let matched: Option<i64> = result.take(1)?;
        Ok(matched.unwrap_or(0) > 0)
    }

    /// Hard delete; returns whether a record existed
    pub async fn delete(&self, id: &ContratoId) -> RepoResult<bool> {
        let mut result = self
            .base
            .db()
            .query("LET $deleted = DELETE $rid RETURN BEFORE; RETURN array::len($deleted);")
            .bind(("rid", id.record_id()))
            .await?
            .check()?;

        let matched: Option<i64> = result.take(1)?;
        Ok(matched.unwrap_or(0) > 0)
    }
}

/// Turn a projected row into the wire model, moving `key` to `id`
fn decode_row(row: Value) -> RepoResult<Contrato> {
    let mut fields = match row {
        Value::Object(fields) => fields,
        other => {
            return Err(RepoError::Decode(format!("expected an object, got {other}")));
        }
    };

    let key = fields
        .remove("key")
        .ok_or_else(|| RepoError::Decode("row without record key".to_string()))?;
    fields.insert("id".to_string(), key);

    serde_json::from_value(Value::Object(fields)).map_err(|e| RepoError::Decode(e.to_string()))
}
