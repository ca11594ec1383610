use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

use crate::error::{FetchError, Result};
use crate::normalize::{normalize_position, normalize_team_abbrev};

/// Height substituted when the bio is missing or unparsable (6'6")
pub const DEFAULT_HEIGHT_IN: u32 = 78;
/// Weight substituted when the bio is missing or unparsable
pub const DEFAULT_WEIGHT_LB: u32 = 200;
/// Age substituted when the birthdate is missing or unparsable
pub const DEFAULT_AGE: u32 = 25;

/// Envelope every stats API endpoint answers with
#[derive(Debug, Clone, Deserialize)]
pub struct StatsResponse {
    #[serde(rename = "resultSets")]
    pub result_sets: Vec<ResultSet>,
}

/// One tabular result: column headers plus positional rows
#[derive(Debug, Clone, Deserialize)]
pub struct ResultSet {
    pub name: String,
    pub headers: Vec<String>,
    #[serde(rename = "rowSet")]
    pub row_set: Vec<Vec<Value>>,
}

/// A single row of a [`ResultSet`], addressed by column header
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    headers: &'a [String],
    values: &'a [Value],
}

impl StatsResponse {
    /// Find a result set by name
    pub fn result_set(&self, name: &str) -> Result<&ResultSet> {
        self.result_sets
            .iter()
            .find(|set| set.name == name)
            .ok_or_else(|| FetchError::missing_result_set(name))
    }
}

impl ResultSet {
    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> {
        self.row_set.iter().map(move |values| Row { headers: &self.headers, values })
    }
}

impl<'a> Row<'a> {
    pub fn value(&self, column: &str) -> Option<&'a Value> {
        let index = self.headers.iter().position(|header| header == column)?;
        self.values.get(index)
    }

    /// Numeric cell; numbers sent as strings are accepted, null reads as absent
    pub fn number(&self, column: &str) -> Option<f64> {
        match self.value(column)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Text cell; numbers are rendered as text, null and blank read as absent
    pub fn text(&self, column: &str) -> Option<String> {
        let text = match self.value(column)? {
            Value::String(s) => s.trim().to_string(),
            Value::Number(n) => n.to_string(),
            _ => return None,
        };
        (!text.is_empty()).then_some(text)
    }
}

/// Per-game season averages for one player
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SeasonAverages {
    pub games_played: f64,
    pub minutes: f64,
    pub points: f64,
    pub rebounds: f64,
    pub assists: f64,
    pub steals: f64,
    pub blocks: f64,
    pub turnovers: f64,
    pub fg_pct: f64,
    pub fg3_pct: f64,
    pub ft_pct: f64,
    pub fga: f64,
    pub fg3a: f64,
    pub fta: f64,
}

impl SeasonAverages {
    pub fn from_row(row: &Row<'_>) -> Self {
        let stat = |column: &str| row.number(column).unwrap_or(0.0);
        Self {
            games_played: stat("GP"),
            minutes: stat("MIN"),
            points: stat("PTS"),
            rebounds: stat("REB"),
            assists: stat("AST"),
            steals: stat("STL"),
            blocks: stat("BLK"),
            turnovers: stat("TOV"),
            fg_pct: stat("FG_PCT"),
            fg3_pct: stat("FG3_PCT"),
            ft_pct: stat("FT_PCT"),
            fga: stat("FGA"),
            fg3a: stat("FG3A"),
            fta: stat("FTA"),
        }
    }
}

/// Index league-wide averages by player id; rows without an id are skipped
pub fn parse_season_averages(set: &ResultSet) -> HashMap<String, SeasonAverages> {
    set.rows()
        .filter_map(|row| row.text("PLAYER_ID").map(|id| (id, SeasonAverages::from_row(&row))))
        .collect()
}

/// Contract figures scraped for one player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryRecord {
    /// Salary for the first listed season, in dollars
    pub salary: u64,
    /// Number of seasons with a listed salary
    pub years_remaining: u32,
}

impl SalaryRecord {
    /// Minimum-style deal assumed for players missing from the salary page
    pub const FALLBACK: SalaryRecord = SalaryRecord { salary: 2_000_000, years_remaining: 1 };
}

impl Default for SalaryRecord {
    fn default() -> Self {
        Self::FALLBACK
    }
}

/// One player on one team's roster
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    /// Canonical team abbreviation
    pub team: String,
    pub player_id: String,
    /// Display name (e.g., "LeBron James")
    pub name: String,
    pub jersey: Option<String>,
    /// Canonical position (PG/SG/SF/PF/C)
    pub position: String,
}

/// Parse a team roster result set; rows without a player id are skipped
pub fn parse_roster(set: &ResultSet, team_abbrev: &str) -> Vec<RosterEntry> {
    let team = normalize_team_abbrev(team_abbrev);
    set.rows()
        .filter_map(|row| {
            let player_id = row.text("PLAYER_ID")?;
            Some(RosterEntry {
                team: team.clone(),
                player_id,
                name: row.text("PLAYER").unwrap_or_default(),
                jersey: row.text("NUM"),
                position: normalize_position(&row.text("POSITION").unwrap_or_default())
                    .to_string(),
            })
        })
        .collect()
}

/// Biographical attributes from the player profile endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerDetail {
    /// Height in inches
    pub height: u32,
    /// Weight in pounds
    pub weight: u32,
    pub age: u32,
    pub birth_year: i32,
    /// Canonical position (PG/SG/SF/PF/C)
    pub position: String,
    pub jersey: Option<String>,
    pub years_experience: u32,
    pub college: String,
    pub country: String,
    pub draft_year: Option<String>,
    pub draft_round: Option<String>,
    pub draft_pick: Option<String>,
}

impl PlayerDetail {
    /// Build a detail record from a profile row, substituting defaults for
    /// missing or malformed fields. `today` anchors the age calculation.
    pub fn from_row(row: &Row<'_>, today: NaiveDate) -> Self {
        let height = row.text("HEIGHT").and_then(|h| parse_height(&h)).unwrap_or(DEFAULT_HEIGHT_IN);
        let weight = row
            .number("WEIGHT")
            .filter(|w| *w > 0.0)
            .map(|w| w as u32)
            .unwrap_or(DEFAULT_WEIGHT_LB);
        let age = row.text("BIRTHDATE").and_then(|b| parse_age(&b, today)).unwrap_or(DEFAULT_AGE);

        Self {
            height,
            weight,
            age,
            birth_year: today.year() - age as i32,
            position: normalize_position(&row.text("POSITION").unwrap_or_default()).to_string(),
            jersey: row.text("JERSEY"),
            years_experience: row.number("SEASON_EXP").map(|e| e.max(0.0) as u32).unwrap_or(0),
            college: row.text("SCHOOL").unwrap_or_default(),
            country: row.text("COUNTRY").unwrap_or_else(|| "USA".to_string()),
            draft_year: row.text("DRAFT_YEAR"),
            draft_round: row.text("DRAFT_ROUND"),
            draft_pick: row.text("DRAFT_NUMBER"),
        }
    }
}

/// Parse the player profile result set; an empty set means no such player
pub fn parse_player_detail(set: &ResultSet, today: NaiveDate) -> Result<PlayerDetail> {
    set.rows()
        .next()
        .map(|row| PlayerDetail::from_row(&row, today))
        .ok_or_else(|| FetchError::empty_result(format!("{} has no rows", set.name)))
}

/// Parse a "feet-inches" height such as "6-9" into inches
pub fn parse_height(height: &str) -> Option<u32> {
    let (feet, inches) = height.trim().split_once('-')?;
    let feet: u32 = feet.trim().parse().ok()?;
    let inches: u32 = inches.trim().parse().ok()?;
    feet.checked_mul(12)?.checked_add(inches)
}

/// Whole years between a birthdate (first 10 chars, `YYYY-MM-DD`) and `today`,
/// counted as elapsed days / 365. Birthdates after `today` are rejected.
pub fn parse_age(birthdate: &str, today: NaiveDate) -> Option<u32> {
    let date = birthdate.get(..10)?;
    let born = NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()?;
    let days = (today - born).num_days();
    if days < 0 {
        return None;
    }
    u32::try_from(days / 365).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
    }

    fn profile_set(row: Value) -> ResultSet {
        serde_json::from_value(json!({
            "name": "CommonPlayerInfo",
            "headers": [
                "PERSON_ID", "BIRTHDATE", "SCHOOL", "COUNTRY", "HEIGHT", "WEIGHT", "SEASON_EXP",
                "JERSEY", "POSITION", "DRAFT_YEAR", "DRAFT_ROUND", "DRAFT_NUMBER"
            ],
            "rowSet": [row],
        }))
        .unwrap()
    }

    #[test]
    fn test_parse_height() {
        assert_eq!(parse_height("6-9"), Some(81));
        assert_eq!(parse_height("7-0"), Some(84));
        assert_eq!(parse_height("6'9\""), None);
        assert_eq!(parse_height(""), None);
        assert_eq!(parse_height("six-nine"), None);
    }

    #[test]
    fn test_parse_height_rejects_overflow() {
        assert_eq!(parse_height("400000000-0"), None);
        assert_eq!(parse_height("0-4294967295"), Some(u32::MAX));
        assert_eq!(parse_height("1-4294967295"), None);
    }

    #[test]
    fn test_parse_age() {
        assert_eq!(parse_age("1984-12-30T00:00:00", today()), Some(40));
        assert_eq!(parse_age("2005-01-16", today()), Some(20));
        assert_eq!(parse_age("not a date", today()), None);
        assert_eq!(parse_age("1999", today()), None);
        assert_eq!(parse_age("2030-01-01", today()), None);
    }

    #[test]
    fn test_parse_age_rejects_near_future_birthdate() {
        assert_eq!(parse_age("2025-01-16", today()), None);
        assert_eq!(parse_age("2025-12-31T00:00:00", today()), None);
        assert_eq!(parse_age("2025-01-15", today()), Some(0));
    }

    #[test]
    fn test_player_detail_from_profile() {
        let set = profile_set(json!([
            2544, "1984-12-30T00:00:00", "St. Vincent-St. Mary HS (OH)", "USA", "6-9", "250",
            21, "23", "Forward", "2003", "1", "1"
        ]));

        let detail = parse_player_detail(&set, today()).unwrap();
        assert_eq!(detail.height, 81);
        assert_eq!(detail.weight, 250);
        assert_eq!(detail.age, 40);
        assert_eq!(detail.birth_year, 1985);
        assert_eq!(detail.position, "SF");
        assert_eq!(detail.jersey.as_deref(), Some("23"));
        assert_eq!(detail.years_experience, 21);
        assert_eq!(detail.draft_year.as_deref(), Some("2003"));
        assert_eq!(detail.draft_pick.as_deref(), Some("1"));
    }

    #[test]
    fn test_player_detail_defaults() {
        let set = profile_set(json!([
            1, "", null, null, "tall", "", null, null, "", "Undrafted", "Undrafted", "Undrafted"
        ]));

        let detail = parse_player_detail(&set, today()).unwrap();
        assert_eq!(detail.height, DEFAULT_HEIGHT_IN);
        assert_eq!(detail.weight, DEFAULT_WEIGHT_LB);
        assert_eq!(detail.age, DEFAULT_AGE);
        assert_eq!(detail.birth_year, 2000);
        assert_eq!(detail.position, "SF");
        assert_eq!(detail.college, "");
        assert_eq!(detail.country, "USA");
        assert_eq!(detail.years_experience, 0);
        assert_eq!(detail.draft_round.as_deref(), Some("Undrafted"));
    }

    #[test]
    fn test_player_detail_out_of_range_bio_uses_defaults() {
        let set = profile_set(json!([
            1, "2025-06-01T00:00:00", "", "Canada", "400000000-0", "215", 0, "5", "G",
            "2024", "2", "45"
        ]));

        let detail = parse_player_detail(&set, today()).unwrap();
        assert_eq!(detail.height, DEFAULT_HEIGHT_IN);
        assert_eq!(detail.age, DEFAULT_AGE);
        assert_eq!(detail.weight, 215);
        assert_eq!(detail.position, "PG");
    }

    #[test]
    fn test_empty_profile_is_an_error() {
        let set: ResultSet = serde_json::from_value(json!({
            "name": "CommonPlayerInfo",
            "headers": ["PERSON_ID"],
            "rowSet": [],
        }))
        .unwrap();

        assert!(matches!(parse_player_detail(&set, today()), Err(FetchError::EmptyResult(_))));
    }

    #[test]
    fn test_parse_season_averages() {
        let set: ResultSet = serde_json::from_value(json!({
            "name": "LeagueDashPlayerStats",
            "headers": ["PLAYER_ID", "PLAYER_NAME", "GP", "MIN", "PTS", "FG_PCT", "FG3_PCT"],
            "rowSet": [
                [1629029, "Luka Doncic", 50, 35.4, 28.2, 0.45, null],
                [null, "Nobody", 1, 1.0, 0.0, 0.0, 0.0],
            ],
        }))
        .unwrap();

        let averages = parse_season_averages(&set);
        assert_eq!(averages.len(), 1);

        let luka = averages["1629029"];
        assert_eq!(luka.games_played, 50.0);
        assert_eq!(luka.points, 28.2);
        assert_eq!(luka.fg3_pct, 0.0);
        assert_eq!(luka.rebounds, 0.0);
    }

    #[test]
    fn test_parse_roster_normalizes() {
        let set: ResultSet = serde_json::from_value(json!({
            "name": "CommonTeamRoster",
            "headers": ["TeamID", "PLAYER", "NUM", "POSITION", "PLAYER_ID"],
            "rowSet": [
                [1610612756, "Devin Booker", "1", "G", 1626164],
                [1610612756, "Kevin Durant", "35", "F", 201142],
                [1610612756, "Two Way", null, null, 1641000],
            ],
        }))
        .unwrap();

        let roster = parse_roster(&set, "PHO");
        assert_eq!(roster.len(), 3);
        assert!(roster.iter().all(|entry| entry.team == "PHX"));
        assert_eq!(roster[0].player_id, "1626164");
        assert_eq!(roster[0].position, "PG");
        assert_eq!(roster[1].jersey.as_deref(), Some("35"));
        assert_eq!(roster[2].jersey, None);
        assert_eq!(roster[2].position, "SF");
    }

    #[test]
    fn test_missing_result_set() {
        let response: StatsResponse = serde_json::from_value(json!({ "resultSets": [] })).unwrap();
        assert!(matches!(
            response.result_set("CommonTeamRoster"),
            Err(FetchError::MissingResultSet(name)) if name == "CommonTeamRoster"
        ));
    }
}
