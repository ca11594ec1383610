use crate::models::*;
use crate::teams::team_by_id;
use chrono::NaiveDate;
use nba_fetcher::{LeagueSource, PlayerDetail, RosterEntry, SalaryRecord, SeasonAverages};
use rating_engine::{PlayerBio, RatingCalculator, StatLine};
use std::collections::{HashMap, HashSet};
use tracing::{debug, info, warn};

/// Log a progress line every this many assembled players
const PROGRESS_EVERY: usize = 50;

/// Joins the source adapters' output into one record per player
pub struct Assembler<S> {
    source: S,
    calculator: RatingCalculator,
    today: NaiveDate,
}

impl<S: LeagueSource> Assembler<S> {
    /// Create a new assembler; `today` anchors every age calculation
    pub fn new(source: S, calculator: RatingCalculator, today: NaiveDate) -> Self {
        Self { source, calculator, today }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fetch everything and build the player list.
    ///
    /// League-wide stats, salaries and individual rosters fall back to empty
    /// results when their fetch fails. A player whose bio cannot be fetched is
    /// left out. The first team a player id appears on owns that player.
    pub async fn build_players(&self) -> Vec<PlayerRecord> {
        let averages = self.source.season_averages().await.unwrap_or_else(|e| {
            warn!("Error fetching player stats, continuing without: {}", e);
            HashMap::new()
        });

        let salaries = self.source.salaries().await.unwrap_or_else(|e| {
            warn!("Error fetching salaries, continuing with defaults: {}", e);
            HashMap::new()
        });

        let rosters = self.fetch_rosters().await;

        info!("Building player data...");
        let mut seen = HashSet::new();
        let mut players = Vec::new();

        for entry in rosters.iter().flatten() {
            if !seen.insert(entry.player_id.as_str()) {
                debug!(
                    "Skipping {} ({}) already assigned to an earlier team",
                    entry.name, entry.team
                );
                continue;
            }

            if team_by_id(&entry.team).is_none() {
                warn!("Skipping {}: unknown team {}", entry.name, entry.team);
                continue;
            }

            let detail = match self.source.player_detail(&entry.player_id, self.today).await {
                Ok(detail) => detail,
                Err(e) => {
                    warn!("Error fetching player {} ({}): {}", entry.player_id, entry.name, e);
                    continue;
                }
            };

            let season = averages.get(&entry.player_id).copied().unwrap_or_default();
            let salary = salaries.get(&entry.name.to_lowercase()).copied().unwrap_or_default();

            players.push(assemble_record(&self.calculator, entry, &detail, &season, salary));

            if players.len() % PROGRESS_EVERY == 0 {
                info!("  Processed {} players...", players.len());
            }
        }

        info!("Total players processed: {}", players.len());
        players
    }

    async fn fetch_rosters(&self) -> Vec<Vec<RosterEntry>> {
        info!("Fetching team rosters...");

        let mut rosters = Vec::new();
        for team in self.source.teams() {
            let roster = self.source.team_roster(&team).await.unwrap_or_else(|e| {
                warn!("Error fetching roster for {}: {}", team.abbreviation, e);
                Vec::new()
            });
            rosters.push(roster);
        }
        rosters
    }
}

/// Build one output record from already-fetched pieces
pub fn assemble_record(
    calculator: &RatingCalculator,
    entry: &RosterEntry,
    detail: &PlayerDetail,
    season: &SeasonAverages,
    salary: SalaryRecord,
) -> PlayerRecord {
    let bio = PlayerBio { age: detail.age, height: detail.height, weight: detail.weight };
    let ratings = calculator.calculate(&stat_line(season), &bio);
    let potential = calculator.potential(ratings.overall, detail.age);

    let (first_name, last_name) = split_name(&entry.name);
    let jersey = entry
        .jersey
        .clone()
        .or_else(|| detail.jersey.clone())
        .unwrap_or_else(|| "0".to_string());

    PlayerRecord {
        id: format!("player-{}", entry.player_id),
        nba_id: entry.player_id.clone(),
        first_name,
        last_name,
        position: detail.position.clone(),
        height: detail.height,
        weight: detail.weight,
        age: detail.age,
        birth_year: detail.birth_year,
        years_experience: detail.years_experience,
        college: detail.college.clone(),
        country: detail.country.clone(),
        jersey,
        team_id: entry.team.clone(),
        draft_year: detail.draft_year.clone(),
        draft_round: detail.draft_round.clone(),
        draft_pick: detail.draft_pick.clone(),
        stats: ratings,
        potential,
        contract: Contract::standard(salary.salary, salary.years_remaining),
        current_season_stats: CurrentSeasonStats {
            games_played: season.games_played,
            minutes_per_game: season.minutes,
            points: season.points,
            rebounds: season.rebounds,
            assists: season.assists,
            steals: season.steals,
            blocks: season.blocks,
            turnovers: season.turnovers,
            fg_pct: season.fg_pct,
            fg3_pct: season.fg3_pct,
            ft_pct: season.ft_pct,
        },
    }
}

fn stat_line(season: &SeasonAverages) -> StatLine {
    StatLine {
        minutes: season.minutes,
        points: season.points,
        rebounds: season.rebounds,
        assists: season.assists,
        steals: season.steals,
        blocks: season.blocks,
        turnovers: season.turnovers,
        fg_pct: season.fg_pct,
        fg3_pct: season.fg3_pct,
        ft_pct: season.ft_pct,
        fga: season.fga,
        fg3a: season.fg3a,
        fta: season.fta,
    }
}

/// "Shai Gilgeous-Alexander" -> ("Shai", "Gilgeous-Alexander"); "Nene" -> ("Nene", "")
fn split_name(name: &str) -> (String, String) {
    match name.split_once(' ') {
        Some((first, last)) => (first.to_string(), last.to_string()),
        None => (name.to_string(), String::new()),
    }
}
