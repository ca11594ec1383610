use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the source adapters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetcherConfig {
    /// NBA stats API configuration
    pub stats_api: StatsApiConfig,

    /// Salary page configuration
    pub salaries: SalaryConfig,

    /// Fixed delays inserted after provider calls
    pub throttle: ThrottleConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsApiConfig {
    /// Base URL of the stats API (e.g., "https://stats.nba.com/stats")
    pub base_url: String,

    /// Season string (e.g., "2024-25")
    pub season: String,

    /// Season type (e.g., "Regular Season")
    pub season_type: String,

    /// League id ("00" is the NBA)
    pub league_id: String,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryConfig {
    /// Salary ranking page URL
    pub url: String,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThrottleConfig {
    /// Delay after the league-wide stats call
    pub after_league_stats_ms: u64,

    /// Delay after each team roster call
    pub after_roster_ms: u64,

    /// Delay after each player detail call
    pub after_player_detail_ms: u64,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            stats_api: StatsApiConfig {
                base_url: "https://stats.nba.com/stats".to_string(),
                season: "2024-25".to_string(),
                season_type: "Regular Season".to_string(),
                league_id: "00".to_string(),
                timeout_secs: 30,
            },
            salaries: SalaryConfig {
                url: "https://hoopshype.com/salaries/players/".to_string(),
                timeout_secs: 30,
            },
            throttle: ThrottleConfig {
                after_league_stats_ms: 1000,
                after_roster_ms: 600,
                after_player_detail_ms: 600,
            },
        }
    }
}

impl StatsApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl SalaryConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl ThrottleConfig {
    pub fn after_league_stats(&self) -> Duration {
        Duration::from_millis(self.after_league_stats_ms)
    }

    pub fn after_roster(&self) -> Duration {
        Duration::from_millis(self.after_roster_ms)
    }

    pub fn after_player_detail(&self) -> Duration {
        Duration::from_millis(self.after_player_detail_ms)
    }
}
