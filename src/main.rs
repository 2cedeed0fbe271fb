use anyhow::Result;
use moonshot_monitor::{config::Config, services::AnalysisService};
use std::time::Duration;
use tracing::{info, Level};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    // Load configuration
    let config = Config::from_env()?;
    info!("Configuration loaded successfully");

    let service = AnalysisService::from_config(&config)?;
    info!(
        "🚀 Moonshot monitor starting, scraping every {}s",
        config.monitor.poll_interval_secs
    );

    service
        .start(Duration::from_secs(config.monitor.poll_interval_secs))
        .await;

    Ok(())
}
