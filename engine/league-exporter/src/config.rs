use nba_fetcher::FetcherConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for a league export run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExporterConfig {
    /// Directory the JSON files are written to
    pub output_dir: PathBuf,

    /// Source adapter configuration
    pub fetcher: FetcherConfig,
}

impl Default for ExporterConfig {
    fn default() -> Self {
        Self { output_dir: PathBuf::from("src/data/real"), fetcher: FetcherConfig::default() }
    }
}

impl ExporterConfig {
    /// Season string written to the metadata file
    pub fn season(&self) -> &str {
        &self.fetcher.stats_api.season
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ExporterConfig::default();
        assert_eq!(config.output_dir, PathBuf::from("src/data/real"));
        assert_eq!(config.season(), "2024-25");
        assert_eq!(config.fetcher.stats_api.season_type, "Regular Season");
    }
}
