//! # League Exporter
//!
//! Builds the static league data the basketball GM game ships with.
//!
//! ## Architecture
//!
//! - **Assembler**: joins rosters, bios, season averages and salaries into one
//!   record per player and runs the rating engine on each
//! - **Teams**: the compiled-in table of all 30 franchises
//! - **LeagueWriter**: overwrites `teams.json`, `players.json` and `meta.json`
//!
//! A run is a single sequential batch. Provider failures degrade to defaults or
//! drop the affected player; only filesystem failures abort the run.

pub mod assembler;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod teams;
pub mod writer;


pub use assembler::Assembler;
pub use config::ExporterConfig;
pub use error::{ExportError, Result};
pub use export::{export_league, ExportSummary};
pub use models::*;
pub use teams::{team_by_id, TeamRecord, TEAMS};
pub use writer::LeagueWriter;
