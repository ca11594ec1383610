use serde::{Deserialize, Serialize};

/// Configuration for the rating calculator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatingConfig {
    /// Minutes basis that counting stats are normalized to
    pub per_minutes_basis: f64,

    /// Lowest value any sub-rating can take
    pub rating_floor: f64,

    /// Highest value any rating can take
    pub rating_ceiling: f64,

    /// Lowest value the overall rating can take
    pub overall_floor: f64,

    /// Age after which players stop gaining potential and start losing athleticism
    pub peak_age: u32,

    /// Potential points added per year below `peak_age`
    pub potential_per_year: u32,
}

impl Default for RatingConfig {
    fn default() -> Self {
        Self {
            per_minutes_basis: 36.0,
            rating_floor: 25.0,
            rating_ceiling: 99.0,
            overall_floor: 40.0,
            peak_age: 28,
            potential_per_year: 2,
        }
    }
}
