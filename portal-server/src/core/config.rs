/// Server configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | HTTP_HOST | 0.0.0.0 | bind address |
/// | HTTP_PORT | 8000 | HTTP port |
/// | DATABASE_PATH | data/portal.db | embedded SurrealDB directory |
/// | DATABASE_NAMESPACE | portal | SurrealDB namespace |
/// | DATABASE_NAME | portal_refricril | SurrealDB database |
/// | LOG_LEVEL | info | log level |
/// | LOG_DIR | - | daily log files directory |
/// | ENVIRONMENT | development | runtime environment |
///
/// # Example
///
/// ```ignore
/// DATABASE_PATH=/var/lib/portal/db HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Bind address
    pub http_host: String,
    /// HTTP API port
    pub http_port: u16,
    /// Directory of the embedded RocksDB-backed store
    pub database_path: String,
    pub database_namespace: String,
    pub database_name: String,
    pub log_level: String,
    pub log_dir: Option<String>,
    /// Runtime environment: development | staging | production
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset or unparsable variables fall back to defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            http_host: get("HTTP_HOST").unwrap_or_else(|| "0.0.0.0".into()),
            http_port: get("HTTP_PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(8000),
            database_path: get("DATABASE_PATH").unwrap_or_else(|| "data/portal.db".into()),
            database_namespace: get("DATABASE_NAMESPACE").unwrap_or_else(|| "portal".into()),
            database_name: get("DATABASE_NAME").unwrap_or_else(|| "portal_refricril".into()),
            log_level: get("LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_dir: get("LOG_DIR").filter(|s| !s.is_empty()),
            environment: get("ENVIRONMENT").unwrap_or_else(|| "development".into()),
        }
    }

    /// Override the database location
    ///
    /// Mostly used by tests
    pub fn with_database_path(mut self, path: impl Into<String>) -> Self {
        self.database_path = path.into();
        self
    }

    /// Socket address string to bind
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.http_host, self.http_port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
