use anyhow::Context;
use chrono::Utc;
use league_exporter::{export_league, ExporterConfig};
use nba_fetcher::NbaLeagueSource;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    info!("Starting NBA league data export");

    let config = ExporterConfig::default();
    info!("Loaded configuration: {:?}", config);

    let source =
        NbaLeagueSource::new(config.fetcher.clone()).context("Failed to create HTTP clients")?;

    match export_league(source, &config, Utc::now()).await {
        Ok(summary) => {
            info!(
                "Wrote {} teams and {} players to {}",
                summary.teams,
                summary.players,
                summary.output_dir.display()
            );
            Ok(())
        }
        Err(e) => {
            error!("Export failed: {}", e);
            Err(e.into())
        }
    }
}
