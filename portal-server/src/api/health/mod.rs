//! Health check route
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | /health | GET | service liveness plus a store round-trip |
//!
//! ```json
//! { "status": "ok", "service": "portal-server", "version": "0.1.0" }
//! ```

use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use serde::Serialize;

use crate::core::ServerState;

const SERVICE_NAME: &str = "portal-server";

pub fn router() -> Router<ServerState> {
    Router::new().route("/health", get(health))
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// ok | error
    status: &'static str,
    service: &'static str,
    version: &'static str,
}

/// GET /health
async fn health(State(state): State<ServerState>) -> (StatusCode, Json<HealthResponse>) {
    let (code, status) = match ping(&state).await {
        Ok(()) => (StatusCode::OK, "ok"),
        Err(e) => {
            tracing::error!(error = %e, "Database health check failed");
            (StatusCode::SERVICE_UNAVAILABLE, "error")
        }
    };

    (
        code,
        Json(HealthResponse {
            status,
            service: SERVICE_NAME,
            version: env!("CARGO_PKG_VERSION"),
        }),
    )
}

/// Store round-trip
async fn ping(state: &ServerState) -> Result<(), surrealdb::Error> {
    state.db.query("RETURN true").await?.check()?;
    Ok(())
}
