//! One-shot analysis run, for on-demand invocation and smoke testing.

use anyhow::Result;
use moonshot_monitor::{config::Config, services::AnalysisService};
use tracing::{info, Level};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    let config = Config::from_env()?;
    let service = AnalysisService::from_config(&config)?;

    let outcome = service.run_cycle().await?;
    info!("Cycle outcome: {:?}", outcome);

    Ok(())
}
