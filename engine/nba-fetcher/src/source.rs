//! The adapter seam the exporter pulls league data through

use crate::config::FetcherConfig;
use crate::error::Result;
use crate::fetcher::NbaStatsFetcher;
use crate::models::{PlayerDetail, RosterEntry, SalaryRecord, SeasonAverages};
use crate::normalize::{ProviderTeam, NBA_TEAMS};
use crate::salary::SalaryScraper;
use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::HashMap;

/// Source of everything the export needs from the outside world.
///
/// Every call is a single best-effort attempt. Implementations report failure
/// through the `Result`; choosing a fallback is the caller's job.
#[async_trait]
pub trait LeagueSource: Send + Sync {
    /// Teams whose rosters should be fetched, in fetch order
    fn teams(&self) -> Vec<ProviderTeam>;

    /// Per-game season averages keyed by player id
    async fn season_averages(&self) -> Result<HashMap<String, SeasonAverages>>;

    /// Salaries keyed by lower-cased player name
    async fn salaries(&self) -> Result<HashMap<String, SalaryRecord>>;

    /// One team's roster
    async fn team_roster(&self, team: &ProviderTeam) -> Result<Vec<RosterEntry>>;

    /// Biographical detail for one player, with age computed as of `today`
    async fn player_detail(&self, player_id: &str, today: NaiveDate) -> Result<PlayerDetail>;
}

/// Live source backed by the NBA stats API and the HoopsHype salary page
pub struct NbaLeagueSource {
    stats: NbaStatsFetcher,
    salaries: SalaryScraper,
}

impl NbaLeagueSource {
    pub fn new(config: FetcherConfig) -> Result<Self> {
        let salaries = SalaryScraper::new(&config.salaries)?;
        let stats = NbaStatsFetcher::new(config)?;
        Ok(Self { stats, salaries })
    }
}

#[async_trait]
impl LeagueSource for NbaLeagueSource {
    fn teams(&self) -> Vec<ProviderTeam> {
        NBA_TEAMS.to_vec()
    }

    async fn season_averages(&self) -> Result<HashMap<String, SeasonAverages>> {
        self.stats.fetch_season_averages().await
    }

    async fn salaries(&self) -> Result<HashMap<String, SalaryRecord>> {
        self.salaries.fetch_salaries().await
    }

    async fn team_roster(&self, team: &ProviderTeam) -> Result<Vec<RosterEntry>> {
        self.stats.fetch_team_roster(team).await
    }

    async fn player_detail(&self, player_id: &str, today: NaiveDate) -> Result<PlayerDetail> {
        self.stats.fetch_player_detail(player_id, today).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_live_source_lists_all_teams() {
        let source = NbaLeagueSource::new(FetcherConfig::default()).unwrap();
        let teams = source.teams();

        assert_eq!(teams.len(), 30);
        assert_eq!(teams[0].abbreviation, "ATL");
    }
}
