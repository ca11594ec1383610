use crate::config::FetcherConfig;
use crate::error::{FetchError, Result};
use crate::models::*;
use crate::normalize::ProviderTeam;
use chrono::NaiveDate;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ORIGIN, REFERER};
use reqwest::Client;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, info};

const BROWSER_USER_AGENT: &str = concat!(
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 ",
    "(KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36"
);

/// Client for the NBA stats API
pub struct NbaStatsFetcher {
    config: FetcherConfig,
    client: Client,
}

impl NbaStatsFetcher {
    /// Create a new fetcher instance
    pub fn new(config: FetcherConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.stats_api.timeout())
            .user_agent(BROWSER_USER_AGENT)
            .default_headers(stats_headers())
            .build()?;

        Ok(Self { config, client })
    }

    /// Fetch per-game averages for every player in the configured season
    pub async fn fetch_season_averages(&self) -> Result<HashMap<String, SeasonAverages>> {
        info!("Fetching player stats for season {}", self.config.stats_api.season);

        let params = season_stats_params(&self.config);
        let response = self.get_stats("leaguedashplayerstats", &params).await;
        throttle(self.config.throttle.after_league_stats()).await;

        let response = response?;
        let averages = parse_season_averages(response.result_set("LeagueDashPlayerStats")?);

        info!("Fetched stats for {} players", averages.len());
        Ok(averages)
    }

    /// Fetch one team's roster for the configured season
    pub async fn fetch_team_roster(&self, team: &ProviderTeam) -> Result<Vec<RosterEntry>> {
        let team_id = team.id.to_string();
        let params = [
            ("TeamID", team_id.as_str()),
            ("Season", self.config.stats_api.season.as_str()),
            ("LeagueID", self.config.stats_api.league_id.as_str()),
        ];
        let response = self.get_stats("commonteamroster", &params).await;
        throttle(self.config.throttle.after_roster()).await;

        let response = response?;
        let roster = parse_roster(response.result_set("CommonTeamRoster")?, team.abbreviation);

        info!("  {}: {} players", team.abbreviation, roster.len());
        Ok(roster)
    }

    /// Fetch biographical detail for one player
    pub async fn fetch_player_detail(
        &self,
        player_id: &str,
        today: NaiveDate,
    ) -> Result<PlayerDetail> {
        let params = [
            ("PlayerID", player_id),
            ("LeagueID", self.config.stats_api.league_id.as_str()),
        ];
        let response = self.get_stats("commonplayerinfo", &params).await;
        throttle(self.config.throttle.after_player_detail()).await;

        let response = response?;
        parse_player_detail(response.result_set("CommonPlayerInfo")?, today)
    }

    async fn get_stats(&self, endpoint: &str, params: &[(&str, &str)]) -> Result<StatsResponse> {
        let url = format!("{}/{}", self.config.stats_api.base_url, endpoint);
        debug!("GET {} {:?}", url, params);

        let response = self.client.get(&url).query(params).send().await?;

        if !response.status().is_success() {
            return Err(FetchError::Status { status: response.status().as_u16(), url });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

/// Query for the league-wide per-game stats table.
///
/// The endpoint rejects requests that omit any of its filters, so blank ones
/// are sent explicitly.
fn season_stats_params(config: &FetcherConfig) -> Vec<(&'static str, &str)> {
    let mut params = vec![
        ("Season", config.stats_api.season.as_str()),
        ("SeasonType", config.stats_api.season_type.as_str()),
        ("LeagueID", config.stats_api.league_id.as_str()),
        ("PerMode", "PerGame"),
        ("MeasureType", "Base"),
        ("PaceAdjust", "N"),
        ("PlusMinus", "N"),
        ("Rank", "N"),
        ("LastNGames", "0"),
        ("Month", "0"),
        ("OpponentTeamID", "0"),
        ("Period", "0"),
        ("PORound", "0"),
        ("TeamID", "0"),
        ("TwoWay", "0"),
    ];

    for blank in [
        "College", "Conference", "Country", "DateFrom", "DateTo", "Division", "DraftPick",
        "DraftYear", "GameScope", "GameSegment", "Height", "Location", "Outcome",
        "PlayerExperience", "PlayerPosition", "SeasonSegment", "ShotClockRange", "StarterBench",
        "VsConference", "VsDivision", "Weight",
    ] {
        params.push((blank, ""));
    }

    params
}

fn stats_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json, text/plain, */*"));
    headers.insert(REFERER, HeaderValue::from_static("https://www.nba.com/"));
    headers.insert(ORIGIN, HeaderValue::from_static("https://www.nba.com"));
    headers.insert("x-nba-stats-origin", HeaderValue::from_static("stats"));
    headers.insert("x-nba-stats-token", HeaderValue::from_static("true"));
    headers
}

/// Fixed post-call delay to stay under the provider's informal rate limit
async fn throttle(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}
