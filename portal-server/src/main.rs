use portal_server::{Server, ServerState, setup_environment};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Environment (.env, configuration, logging)
    let config = setup_environment();
    tracing::info!(
        "Portal server starting (env: {}, version: {})",
        config.environment,
        env!("CARGO_PKG_VERSION")
    );

    // 2. Open the document store once for the whole process
    let state = ServerState::initialize(&config).await.map_err(|e| {
        tracing::error!("Failed to initialize server state: {}", e);
        e
    })?;

    // 3. Serve until Ctrl+C / SIGTERM
    let server = Server::new(config, state);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
