//! Canonicalization of provider team abbreviations and position strings.

/// Provider abbreviations that differ from the canonical ones the game uses
const TEAM_ABBREV_ALIASES: &[(&str, &str)] = &[
    ("PHO", "PHX"),
    ("GS", "GSW"),
    ("SA", "SAS"),
    ("NY", "NYK"),
    ("NO", "NOP"),
    ("BRO", "BKN"),
    ("BK", "BKN"),
    ("UTAH", "UTA"),
    ("NJ", "BKN"),
    ("CHA", "CHA"),
    ("CHO", "CHA"),
];

/// Position strings as reported by rosters and bios, mapped to game positions
const POSITION_ALIASES: &[(&str, &str)] = &[
    ("Guard", "PG"),
    ("G", "PG"),
    ("Point Guard", "PG"),
    ("Guard-Forward", "SG"),
    ("G-F", "SG"),
    ("Shooting Guard", "SG"),
    ("Forward-Guard", "SF"),
    ("F-G", "SF"),
    ("Small Forward", "SF"),
    ("Forward", "SF"),
    ("F", "SF"),
    ("Forward-Center", "PF"),
    ("F-C", "PF"),
    ("Power Forward", "PF"),
    ("Center-Forward", "C"),
    ("C-F", "C"),
    ("Center", "C"),
    ("C", "C"),
];

/// Position used when nothing in the reported string is recognized
pub const DEFAULT_POSITION: &str = "SF";

/// A team as the stats provider identifies it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProviderTeam {
    /// Stats API team id
    pub id: u32,
    /// Provider abbreviation (may need normalizing)
    pub abbreviation: &'static str,
}

/// Every NBA franchise, in the order rosters are fetched
pub const NBA_TEAMS: [ProviderTeam; 30] = [
    ProviderTeam { id: 1610612737, abbreviation: "ATL" },
    ProviderTeam { id: 1610612738, abbreviation: "BOS" },
    ProviderTeam { id: 1610612739, abbreviation: "CLE" },
    ProviderTeam { id: 1610612740, abbreviation: "NOP" },
    ProviderTeam { id: 1610612741, abbreviation: "CHI" },
    ProviderTeam { id: 1610612742, abbreviation: "DAL" },
    ProviderTeam { id: 1610612743, abbreviation: "DEN" },
    ProviderTeam { id: 1610612744, abbreviation: "GSW" },
    ProviderTeam { id: 1610612745, abbreviation: "HOU" },
    ProviderTeam { id: 1610612746, abbreviation: "LAC" },
    ProviderTeam { id: 1610612747, abbreviation: "LAL" },
    ProviderTeam { id: 1610612748, abbreviation: "MIA" },
    ProviderTeam { id: 1610612749, abbreviation: "MIL" },
    ProviderTeam { id: 1610612750, abbreviation: "MIN" },
    ProviderTeam { id: 1610612751, abbreviation: "BKN" },
    ProviderTeam { id: 1610612752, abbreviation: "NYK" },
    ProviderTeam { id: 1610612753, abbreviation: "ORL" },
    ProviderTeam { id: 1610612754, abbreviation: "IND" },
    ProviderTeam { id: 1610612755, abbreviation: "PHI" },
    ProviderTeam { id: 1610612756, abbreviation: "PHX" },
    ProviderTeam { id: 1610612757, abbreviation: "POR" },
    ProviderTeam { id: 1610612758, abbreviation: "SAC" },
    ProviderTeam { id: 1610612759, abbreviation: "SAS" },
    ProviderTeam { id: 1610612760, abbreviation: "OKC" },
    ProviderTeam { id: 1610612761, abbreviation: "TOR" },
    ProviderTeam { id: 1610612762, abbreviation: "UTA" },
    ProviderTeam { id: 1610612763, abbreviation: "MEM" },
    ProviderTeam { id: 1610612764, abbreviation: "WAS" },
    ProviderTeam { id: 1610612765, abbreviation: "DET" },
    ProviderTeam { id: 1610612766, abbreviation: "CHA" },
];

/// Map a provider team abbreviation to the canonical one.
///
/// Unknown abbreviations pass through unchanged.
pub fn normalize_team_abbrev(abbrev: &str) -> String {
    TEAM_ABBREV_ALIASES
        .iter()
        .find(|(alias, _)| *alias == abbrev)
        .map(|(_, canonical)| canonical.to_string())
        .unwrap_or_else(|| abbrev.to_string())
}

/// Map a reported position string to one of PG/SG/SF/PF/C.
///
/// Tries the whole (trimmed) string first, then the part before the first
/// hyphen, and falls back to [`DEFAULT_POSITION`].
pub fn normalize_position(position: &str) -> &'static str {
    let position = position.trim();
    if position.is_empty() {
        return DEFAULT_POSITION;
    }

    if let Some(mapped) = lookup_position(position) {
        return mapped;
    }

    position
        .split('-')
        .next()
        .and_then(lookup_position)
        .unwrap_or(DEFAULT_POSITION)
}

fn lookup_position(position: &str) -> Option<&'static str> {
    POSITION_ALIASES.iter().find(|(alias, _)| *alias == position).map(|(_, mapped)| *mapped)
}
