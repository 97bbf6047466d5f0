//! Database Module
//!
//! Opens the embedded SurrealDB document store (RocksDB engine)

pub mod models;
pub mod repository;

use repository::RepoError;
use surrealdb::Surreal;
use surrealdb::engine::local::{Db, RocksDb};

/// Table holding contract documents
pub const CONTRATO_TABLE: &str = "contrato";

/// Database service - owns the SurrealDB handle
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open (or create) the store at `path` and select namespace/database
    pub async fn open(path: &str, namespace: &str, database: &str) -> Result<Self, RepoError> {
        let db: Surreal<Db> = Surreal::new::<RocksDb>(path)
            .await
            .map_err(|e| RepoError::Database(format!("Failed to open database at {path}: {e}")))?;

        db.use_ns(namespace).use_db(database).await?;

        // Schemaless: `fornecedor2` is a free-form object
        db.query(format!(
            "DEFINE TABLE IF NOT EXISTS {CONTRATO_TABLE} SCHEMALESS"
        ))
        .await?
        .check()?;

        tracing::info!(
            path = %path,
            namespace = %namespace,
            database = %database,
            "Database connection established (SurrealDB RocksDB)"
        );

        Ok(Self { db })
    }
}
