use hotel_server::{Server, ServerState, print_banner, setup_environment};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. .env, configuration, logging
    let config = setup_environment()?;

    print_banner();

    tracing::info!(
        environment = %config.environment,
        "🏨 Hotel server starting..."
    );

    // 2. Open the database and apply migrations
    let state = ServerState::initialize(&config).await?;

    // 3. Serve until Ctrl-C
    let server = Server::new(config, state);

    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
