//! The 30 NBA franchises, as the game presents them.

use serde::Serialize;

/// Conference a team plays in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Conference {
    Eastern,
    Western,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TeamColors {
    /// Hex color, e.g. "#E03A3E"
    pub primary: &'static str,
    pub secondary: &'static str,
}

/// One franchise as written to `teams.json`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TeamRecord {
    /// Canonical abbreviation, also used as the id players reference
    pub id: &'static str,
    pub abbreviation: &'static str,
    pub city: &'static str,
    pub name: &'static str,
    pub conference: Conference,
    pub division: &'static str,
    pub arena: &'static str,
    pub colors: TeamColors,
}

#[allow(clippy::too_many_arguments)]
const fn team(
    id: &'static str,
    city: &'static str,
    name: &'static str,
    conference: Conference,
    division: &'static str,
    arena: &'static str,
    primary: &'static str,
    secondary: &'static str,
) -> TeamRecord {
    TeamRecord {
        id,
        abbreviation: id,
        city,
        name,
        conference,
        division,
        arena,
        colors: TeamColors { primary, secondary },
    }
}

#[rustfmt::skip]
pub static TEAMS: [TeamRecord; 30] = [
    team("ATL", "Atlanta", "Hawks", Conference::Eastern, "Southeast",
         "State Farm Arena", "#E03A3E", "#C1D32F"),
    team("BOS", "Boston", "Celtics", Conference::Eastern, "Atlantic",
         "TD Garden", "#007A33", "#FFFFFF"),
    team("BKN", "Brooklyn", "Nets", Conference::Eastern, "Atlantic",
         "Barclays Center", "#000000", "#FFFFFF"),
    team("CHA", "Charlotte", "Hornets", Conference::Eastern, "Southeast",
         "Spectrum Center", "#1D1160", "#00788C"),
    team("CHI", "Chicago", "Bulls", Conference::Eastern, "Central",
         "United Center", "#CE1141", "#000000"),
    team("CLE", "Cleveland", "Cavaliers", Conference::Eastern, "Central",
         "Rocket Mortgage FieldHouse", "#860038", "#041E42"),
    team("DAL", "Dallas", "Mavericks", Conference::Western, "Southwest",
         "American Airlines Center", "#00538C", "#002B5E"),
    team("DEN", "Denver", "Nuggets", Conference::Western, "Northwest",
         "Ball Arena", "#0E2240", "#FEC524"),
    team("DET", "Detroit", "Pistons", Conference::Eastern, "Central",
         "Little Caesars Arena", "#C8102E", "#1D42BA"),
    team("GSW", "Golden State", "Warriors", Conference::Western, "Pacific",
         "Chase Center", "#1D428A", "#FFC72C"),
    team("HOU", "Houston", "Rockets", Conference::Western, "Southwest",
         "Toyota Center", "#CE1141", "#000000"),
    team("IND", "Indiana", "Pacers", Conference::Eastern, "Central",
         "Gainbridge Fieldhouse", "#002D62", "#FDBB30"),
    team("LAC", "Los Angeles", "Clippers", Conference::Western, "Pacific",
         "Intuit Dome", "#C8102E", "#1D428A"),
    team("LAL", "Los Angeles", "Lakers", Conference::Western, "Pacific",
         "Crypto.com Arena", "#552583", "#FDB927"),
    team("MEM", "Memphis", "Grizzlies", Conference::Western, "Southwest",
         "FedExForum", "#5D76A9", "#12173F"),
    team("MIA", "Miami", "Heat", Conference::Eastern, "Southeast",
         "Kaseya Center", "#98002E", "#000000"),
    team("MIL", "Milwaukee", "Bucks", Conference::Eastern, "Central",
         "Fiserv Forum", "#00471B", "#EEE1C6"),
    team("MIN", "Minnesota", "Timberwolves", Conference::Western, "Northwest",
         "Target Center", "#0C2340", "#236192"),
    team("NOP", "New Orleans", "Pelicans", Conference::Western, "Southwest",
         "Smoothie King Center", "#0C2340", "#C8102E"),
    team("NYK", "New York", "Knicks", Conference::Eastern, "Atlantic",
         "Madison Square Garden", "#006BB6", "#F58426"),
    team("OKC", "Oklahoma City", "Thunder", Conference::Western, "Northwest",
         "Paycom Center", "#007AC1", "#EF3B24"),
    team("ORL", "Orlando", "Magic", Conference::Eastern, "Southeast",
         "Kia Center", "#0077C0", "#C4CED4"),
    team("PHI", "Philadelphia", "76ers", Conference::Eastern, "Atlantic",
         "Wells Fargo Center", "#006BB6", "#ED174C"),
    team("PHX", "Phoenix", "Suns", Conference::Western, "Pacific",
         "Footprint Center", "#1D1160", "#E56020"),
    team("POR", "Portland", "Trail Blazers", Conference::Western, "Northwest",
         "Moda Center", "#E03A3E", "#000000"),
    team("SAC", "Sacramento", "Kings", Conference::Western, "Pacific",
         "Golden 1 Center", "#5A2D81", "#63727A"),
    team("SAS", "San Antonio", "Spurs", Conference::Western, "Southwest",
         "Frost Bank Center", "#C4CED4", "#000000"),
    team("TOR", "Toronto", "Raptors", Conference::Eastern, "Atlantic",
         "Scotiabank Arena", "#CE1141", "#000000"),
    team("UTA", "Utah", "Jazz", Conference::Western, "Northwest",
         "Delta Center", "#002B5C", "#F9A01B"),
    team("WAS", "Washington", "Wizards", Conference::Eastern, "Southeast",
         "Capital One Arena", "#002B5C", "#E31837"),
];

/// Look up a team by its id (canonical abbreviation)
pub fn team_by_id(id: &str) -> Option<&'static TeamRecord> {
    TEAMS.iter().find(|team| team.id == id)
}
