//! Rating Engine
//!
//! Turns a player's real per-game season averages and body measurements into
//! the fixed set of 0-99 ability ratings used by the game simulation, plus the
//! aggregate overall rating and the age-adjusted potential.
//!
//! The transform is pure: the same inputs always produce the same ratings.

pub mod calculator;
pub mod config;
pub mod models;

pub use calculator::{clamp_rating, RatingCalculator};
pub use config::RatingConfig;
pub use models::*;
