use crate::error::{ExportError, Result};
use crate::models::{ExportMeta, PlayerRecord};
use crate::teams::TeamRecord;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

pub const TEAMS_FILE: &str = "teams.json";
pub const PLAYERS_FILE: &str = "players.json";
pub const META_FILE: &str = "meta.json";

/// Writes the export files into one directory, replacing whatever is there
pub struct LeagueWriter {
    output_dir: PathBuf,
}

impl LeagueWriter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self { output_dir: output_dir.into() }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Create the output directory (and parents) if it does not exist
    pub async fn prepare(&self) -> Result<()> {
        tokio::fs::create_dir_all(&self.output_dir)
            .await
            .map_err(|e| ExportError::io(&self.output_dir, e))
    }

    pub async fn write_teams(&self, teams: &[TeamRecord]) -> Result<PathBuf> {
        let path = self.write_json(TEAMS_FILE, teams).await?;
        info!("Saved {} teams to {}", teams.len(), path.display());
        Ok(path)
    }

    pub async fn write_players(&self, players: &[PlayerRecord]) -> Result<PathBuf> {
        let path = self.write_json(PLAYERS_FILE, players).await?;
        info!("Saved {} players to {}", players.len(), path.display());
        Ok(path)
    }

    pub async fn write_meta(&self, meta: &ExportMeta) -> Result<PathBuf> {
        self.write_json(META_FILE, meta).await
    }

    async fn write_json<T: Serialize + ?Sized>(
        &self,
        file_name: &str,
        value: &T,
    ) -> Result<PathBuf> {
        let path = self.output_dir.join(file_name);
        let json = serde_json::to_string_pretty(value)?;
        tokio::fs::write(&path, json).await.map_err(|e| ExportError::io(&path, e))?;
        Ok(path)
    }
}
