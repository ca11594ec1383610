//! NBA Fetcher
//!
//! Source adapters for the league data export:
//!
//! - **NbaStatsFetcher**: season averages, team rosters and player bios from the
//!   NBA stats API
//! - **SalaryScraper**: contract figures scraped from the HoopsHype salary page
//! - **LeagueSource**: the seam the exporter pulls all of the above through
//!
//! Adapters never retry. A failed call surfaces as a `FetchError` and the caller
//! decides which default to fall back to.

pub mod config;
pub mod error;
pub mod fetcher;
pub mod models;
pub mod normalize;
pub mod salary;
pub mod source;

pub use config::FetcherConfig;
pub use error::{FetchError, Result};
pub use fetcher::NbaStatsFetcher;
pub use models::*;
pub use normalize::{normalize_position, normalize_team_abbrev, ProviderTeam, NBA_TEAMS};
pub use salary::{parse_salary_table, SalaryScraper};
pub use source::{LeagueSource, NbaLeagueSource};
