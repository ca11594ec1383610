use serde::{Deserialize, Serialize};

/// Per-game season averages fed into the rating formulas.
///
/// Every field defaults to zero, which is what a player without any recorded
/// minutes looks like.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StatLine {
    pub minutes: f64,
    pub points: f64,
    pub rebounds: f64,
    pub assists: f64,
    pub steals: f64,
    pub blocks: f64,
    pub turnovers: f64,
    /// Field-goal percentage as a fraction (0.0 - 1.0)
    pub fg_pct: f64,
    /// Three-point percentage as a fraction (0.0 - 1.0)
    pub fg3_pct: f64,
    /// Free-throw percentage as a fraction (0.0 - 1.0)
    pub ft_pct: f64,
    pub fga: f64,
    pub fg3a: f64,
    pub fta: f64,
}

/// Body measurements and age of a player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerBio {
    pub age: u32,
    /// Height in inches
    pub height: u32,
    /// Weight in pounds
    pub weight: u32,
}

impl Default for PlayerBio {
    fn default() -> Self {
        Self { age: 25, height: 78, weight: 200 }
    }
}

/// Game ratings derived for one player.
///
/// Serialized with the camelCase keys the game reads from `players.json`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingSet {
    pub speed: u8,
    pub strength: u8,
    pub jumping: u8,
    pub endurance: u8,
    pub inside_scoring: u8,
    pub mid_range: u8,
    pub three_point: u8,
    pub free_throw: u8,
    pub ball_handling: u8,
    pub passing: u8,
    pub perimeter_defense: u8,
    pub interior_defense: u8,
    pub stealing: u8,
    pub blocking: u8,
    pub offensive_rebounding: u8,
    pub defensive_rebounding: u8,
    #[serde(rename = "basketballIQ")]
    pub basketball_iq: u8,
    pub work_ethic: u8,
    pub durability: u8,
    pub clutch: u8,
    pub overall: u8,
}

impl RatingSet {
    /// The twenty sub-ratings, in declaration order, without `overall`
    pub fn sub_ratings(&self) -> [(&'static str, u8); 20] {
        [
            ("speed", self.speed),
            ("strength", self.strength),
            ("jumping", self.jumping),
            ("endurance", self.endurance),
            ("insideScoring", self.inside_scoring),
            ("midRange", self.mid_range),
            ("threePoint", self.three_point),
            ("freeThrow", self.free_throw),
            ("ballHandling", self.ball_handling),
            ("passing", self.passing),
            ("perimeterDefense", self.perimeter_defense),
            ("interiorDefense", self.interior_defense),
            ("stealing", self.stealing),
            ("blocking", self.blocking),
            ("offensiveRebounding", self.offensive_rebounding),
            ("defensiveRebounding", self.defensive_rebounding),
            ("basketballIQ", self.basketball_iq),
            ("workEthic", self.work_ethic),
            ("durability", self.durability),
            ("clutch", self.clutch),
        ]
    }
}

/// Counting stats scaled to the per-minute basis (36 by default)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PerMinuteRates {
    pub points: f64,
    pub rebounds: f64,
    pub assists: f64,
    pub steals: f64,
    pub blocks: f64,
    pub fta: f64,
}
