use chrono::{DateTime, Utc};
use rating_engine::RatingSet;
use serde::{Deserialize, Serialize};

/// Salary above which a contract is marked as carrying a no-trade clause
pub const NO_TRADE_SALARY_THRESHOLD: u64 = 35_000_000;

/// One player as written to `players.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRecord {
    /// Game id, "player-<nbaId>"
    pub id: String,
    pub nba_id: String,
    pub first_name: String,
    pub last_name: String,
    pub position: String,
    /// Height in inches
    pub height: u32,
    /// Weight in pounds
    pub weight: u32,
    pub age: u32,
    pub birth_year: i32,
    pub years_experience: u32,
    pub college: String,
    pub country: String,
    pub jersey: String,
    /// Id of the owning team in `teams.json`
    pub team_id: String,
    pub draft_year: Option<String>,
    pub draft_round: Option<String>,
    pub draft_pick: Option<String>,
    pub stats: RatingSet,
    pub potential: u8,
    pub contract: Contract,
    pub current_season_stats: CurrentSeasonStats,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contract {
    pub salary: u64,
    pub years: u32,
    #[serde(rename = "type")]
    pub contract_type: String,
    pub no_trade_clause: bool,
}

impl Contract {
    /// Standard contract for a first-year salary and length
    pub fn standard(salary: u64, years: u32) -> Self {
        Self {
            salary,
            years,
            contract_type: "standard".to_string(),
            no_trade_clause: salary > NO_TRADE_SALARY_THRESHOLD,
        }
    }
}

/// Real per-game averages passed through for display
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentSeasonStats {
    pub games_played: f64,
    pub minutes_per_game: f64,
    pub points: f64,
    pub rebounds: f64,
    pub assists: f64,
    pub steals: f64,
    pub blocks: f64,
    pub turnovers: f64,
    pub fg_pct: f64,
    pub fg3_pct: f64,
    pub ft_pct: f64,
}

/// Contents of `meta.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportMeta {
    pub generated: DateTime<Utc>,
    pub season: String,
    pub total_players: usize,
    pub total_teams: usize,
}
