use std::net::SocketAddr;
use tracing::info;
use tracing_subscriber::EnvFilter;

use fast_market::{router, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.log_level)?)
        .init();

    info!(env = ?config.app_env, "Configuration loaded");

    // Build our application with routes
    let app = router::create_router(&config);

    // Run our application
    let ip = config.host.parse::<std::net::IpAddr>()?;
    let addr = SocketAddr::new(ip, config.port);
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
