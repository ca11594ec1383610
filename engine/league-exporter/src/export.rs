use crate::assembler::Assembler;
use crate::config::ExporterConfig;
use crate::error::Result;
use crate::models::ExportMeta;
use crate::teams::TEAMS;
use crate::writer::LeagueWriter;
use chrono::{DateTime, Utc};
use nba_fetcher::LeagueSource;
use rating_engine::RatingCalculator;
use std::path::PathBuf;
use tracing::info;

/// What a finished export wrote
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub teams: usize,
    pub players: usize,
    pub output_dir: PathBuf,
}

/// Run one full export: teams, then players, then metadata.
///
/// The output directory is created before any network traffic so an unwritable
/// destination fails fast. `now` stamps the metadata and anchors player ages.
pub async fn export_league<S: LeagueSource>(
    source: S,
    config: &ExporterConfig,
    now: DateTime<Utc>,
) -> Result<ExportSummary> {
    let writer = LeagueWriter::new(&config.output_dir);
    writer.prepare().await?;

    writer.write_teams(&TEAMS).await?;

    let assembler = Assembler::new(source, RatingCalculator::default(), now.date_naive());
    let players = assembler.build_players().await;
    writer.write_players(&players).await?;

    let meta = ExportMeta {
        generated: now,
        season: config.season().to_string(),
        total_players: players.len(),
        total_teams: TEAMS.len(),
    };
    writer.write_meta(&meta).await?;

    info!("Export complete: {} teams, {} players", meta.total_teams, meta.total_players);

    Ok(ExportSummary {
        teams: meta.total_teams,
        players: meta.total_players,
        output_dir: writer.output_dir().to_path_buf(),
    })
}
