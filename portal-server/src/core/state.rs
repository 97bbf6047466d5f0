use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::core::{Config, Result, ServerError};
use crate::db::DbService;
use crate::db::repository::ContratoRepository;

/// State shared with every request handler
///
/// Holds no per-request data. The SurrealDB handle is internally shared,
/// so cloning the state is cheap and every clone talks to the same store.
#[derive(Clone, Debug)]
pub struct ServerState {
    pub db: Surreal<Db>,
}

impl ServerState {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    /// Open the document store described by `config`
    pub async fn initialize(config: &Config) -> Result<Self> {
        if config.database_path.trim().is_empty() {
            return Err(ServerError::Config("DATABASE_PATH must not be empty".into()));
        }

        let db_service = DbService::open(
            &config.database_path,
            &config.database_namespace,
            &config.database_name,
        )
        .await?;

        Ok(Self::new(db_service.db))
    }

    /// Repository over the `contrato` table
    pub fn contratos(&self) -> ContratoRepository {
        ContratoRepository::new(self.db.clone())
    }
}
