//! Sortvis server binary
//!
//! Serves the sorting visualizer on `SORTVIS_ADDR` (default `0.0.0.0:3000`).

use sortvis_server::{ServerConfig, SortvisServer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sortvis=info,sortvis_engine=info,sortvis_server=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env()?;
    tracing::info!(
        algorithm = %config.engine.algorithm,
        size = config.engine.default_size,
        "starting sortvis"
    );

    SortvisServer::new(config).serve().await?;

    Ok(())
}
