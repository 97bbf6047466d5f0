//! Portal Server - contract management backend
//!
//! # Architecture
//!
//! - **HTTP API** (`api`): CRUD handlers over the `contrato` collection
//! - **Routes** (`routes`): router assembly and tower-http middleware
//! - **Database** (`db`): embedded SurrealDB store and repository
//! - **Core** (`core`): configuration, state, server lifecycle
//! - **Utils** (`utils`): logging, validation, error re-exports
//!
//! ```text
//! portal-server/src/
//! ├── core/          # config, state, server, errors
//! ├── api/           # handlers and extractors
//! ├── routes/        # router + middleware
//! ├── db/            # SurrealDB handle and repository
//! └── utils/         # logger, validation
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod routes;
pub mod utils;

// Re-export public types
pub use core::{Config, Server, ServerError, ServerState};
pub use utils::{AppError, AppResult, ErrorCode};

// Re-export logger functions
pub use utils::logger::init_logger_with_file;

/// Load `.env`, read [`Config`] and initialize logging from it
pub fn setup_environment() -> Config {
    let _ = dotenv::dotenv();

    let config = Config::from_env();
    init_logger_with_file(&config.log_level, config.log_dir.as_deref());
    config
}
