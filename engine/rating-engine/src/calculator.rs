use crate::config::RatingConfig;
use crate::models::*;
use tracing::debug;

/// Height (inches) that maps to a height factor of zero
const HEIGHT_BASELINE_IN: f64 = 69.0;

/// Height span (inches) covered by a height factor of one
const HEIGHT_SPAN_IN: f64 = 22.0;

/// Rating calculator for turning real stats into game ratings
pub struct RatingCalculator {
    config: RatingConfig,
}

impl RatingCalculator {
    /// Create a new rating calculator
    pub fn new(config: RatingConfig) -> Self {
        Self { config }
    }

    /// Scale counting stats to the per-minute basis.
    ///
    /// A player with no minutes gets all-zero rates.
    pub fn per_minute_rates(&self, stats: &StatLine) -> PerMinuteRates {
        if stats.minutes <= 0.0 {
            return PerMinuteRates::default();
        }

        let scale = self.config.per_minutes_basis / stats.minutes;
        PerMinuteRates {
            points: stats.points * scale,
            rebounds: stats.rebounds * scale,
            assists: stats.assists * scale,
            steals: stats.steals * scale,
            blocks: stats.blocks * scale,
            fta: stats.fta * scale,
        }
    }

    /// Calculate the full rating set for one player
    pub fn calculate(&self, stats: &StatLine, bio: &PlayerBio) -> RatingSet {
        let p36 = self.per_minute_rates(stats);

        let age = bio.age as f64;
        let peak_age = self.config.peak_age as f64;
        let weight = bio.weight as f64;
        let height_factor = (bio.height as f64 - HEIGHT_BASELINE_IN) / HEIGHT_SPAN_IN;

        let fg3_rate = if stats.fga > 0.0 { stats.fg3a / stats.fga } else { 0.0 };

        // Two-point percentage backed out of the combined percentage
        let fg2_pct = if stats.fga > stats.fg3a {
            (stats.fg_pct * stats.fga - stats.fg3_pct * stats.fg3a)
                / (stats.fga - stats.fg3a).max(1.0)
        } else {
            stats.fg_pct
        };

        let young_bonus = (peak_age - age).max(0.0);
        let decline = (age - peak_age).max(0.0);
        let veteran_iq = (age - 22.0).min(8.0) * 2.0;

        // Athleticism
        let speed = self.rating(
            70.0 - height_factor * 25.0 - (weight - 180.0) / 10.0 + young_bonus * 0.8,
        );
        let strength = self.rating(35.0 + (weight - 160.0) / 3.0 + (age - 20.0).min(8.0) * 1.5);
        let jumping = self.rating(60.0 + height_factor * 10.0 - decline * 2.0 + p36.blocks * 5.0);
        let endurance = self.rating(40.0 + stats.minutes * 1.5);

        // Shooting
        let inside_scoring =
            self.rating(30.0 + fg2_pct * 50.0 + p36.fta * 3.0 + height_factor * 10.0);
        let mid_range = self.rating(30.0 + stats.fg_pct * 60.0 - fg3_rate * 10.0);
        let three_point = self.rating(25.0 + stats.fg3_pct * 100.0 + stats.fg3a.min(8.0) * 2.0);
        let free_throw = self.rating(30.0 + stats.ft_pct * 65.0);

        // Playmaking
        let ball_handling = self.rating(
            30.0 + p36.assists * 5.0 - stats.turnovers * 2.0 - height_factor * 20.0,
        );
        let passing = self.rating(30.0 + p36.assists * 8.0);

        // Defense
        let perimeter_defense =
            self.rating(35.0 + p36.steals * 10.0 + (1.0 - height_factor) * 15.0);
        let interior_defense = self.rating(30.0 + p36.blocks * 12.0 + height_factor * 20.0);
        let stealing = self.rating(30.0 + p36.steals * 20.0);
        let blocking = self.rating(25.0 + p36.blocks * 20.0 + height_factor * 15.0);

        // Rebounding, split 30/70 between offensive and defensive boards
        let offensive_rebounding =
            self.rating(30.0 + p36.rebounds * 0.3 * 8.0 + height_factor * 15.0);
        let defensive_rebounding =
            self.rating(30.0 + p36.rebounds * 0.7 * 6.0 + height_factor * 15.0);

        // Mental
        let basketball_iq = self.rating(
            40.0 + stats.fg_pct * 30.0 + p36.assists * 3.0 - stats.turnovers * 3.0 + veteran_iq,
        );
        let work_ethic = self.rating(50.0 + (1.0 - height_factor) * 10.0);
        let durability = self.rating(80.0 - decline * 3.0);
        let clutch = self.rating(40.0 + p36.points * 1.5 + veteran_iq);

        let weighted = [
            (inside_scoring, 0.12),
            (mid_range, 0.08),
            (three_point, 0.12),
            (ball_handling, 0.08),
            (passing, 0.08),
            (perimeter_defense, 0.08),
            (interior_defense, 0.08),
            (offensive_rebounding, 0.05),
            (defensive_rebounding, 0.07),
            (speed, 0.08),
            (strength, 0.04),
            (basketball_iq, 0.08),
            (endurance, 0.04),
        ]
        .iter()
        .map(|(rating, weight)| *rating as f64 * weight)
        .sum::<f64>();

        let overall =
            clamp_rating(weighted, self.config.overall_floor, self.config.rating_ceiling);

        debug!(
            "Calculated ratings: overall {} (weighted {:.2}, p36 pts {:.1}, height factor {:.2})",
            overall, weighted, p36.points, height_factor
        );

        RatingSet {
            speed,
            strength,
            jumping,
            endurance,
            inside_scoring,
            mid_range,
            three_point,
            free_throw,
            ball_handling,
            passing,
            perimeter_defense,
            interior_defense,
            stealing,
            blocking,
            offensive_rebounding,
            defensive_rebounding,
            basketball_iq,
            work_ethic,
            durability,
            clutch,
            overall,
        }
    }

    /// Projected ceiling: overall plus a bonus for every year under the peak age
    pub fn potential(&self, overall: u8, age: u32) -> u8 {
        let bonus = self.config.peak_age.saturating_sub(age) * self.config.potential_per_year;
        let ceiling = self.config.rating_ceiling as u32;
        (overall as u32 + bonus).min(ceiling) as u8
    }

    fn rating(&self, value: f64) -> u8 {
        clamp_rating(value, self.config.rating_floor, self.config.rating_ceiling)
    }
}

impl Default for RatingCalculator {
    fn default() -> Self {
        Self::new(RatingConfig::default())
    }
}

/// Round to the nearest integer and restrict to `[lo, hi]`.
///
/// A non-finite value collapses to `lo`.
pub fn clamp_rating(value: f64, lo: f64, hi: f64) -> u8 {
    if value.is_nan() {
        return lo as u8;
    }
    value.round().clamp(lo, hi) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn baseline_bio() -> PlayerBio {
        PlayerBio { age: 25, height: 78, weight: 200 }
    }

    fn star_guard() -> StatLine {
        StatLine {
            minutes: 34.5,
            points: 27.1,
            rebounds: 5.4,
            assists: 8.6,
            steals: 1.5,
            blocks: 0.4,
            turnovers: 3.2,
            fg_pct: 0.492,
            fg3_pct: 0.381,
            ft_pct: 0.901,
            fga: 19.8,
            fg3a: 9.1,
            fta: 7.2,
        }
    }

    fn assert_in_range(ratings: &RatingSet) {
        for (name, value) in ratings.sub_ratings() {
            assert!((25..=99).contains(&value), "{name} out of range: {value}");
        }
        assert!((40..=99).contains(&ratings.overall), "overall out of range: {}", ratings.overall);
    }

    #[test]
    fn test_zero_stats_baseline() {
        let calculator = RatingCalculator::default();
        let ratings = calculator.calculate(&StatLine::default(), &baseline_bio());

        let expected = RatingSet {
            speed: 60,
            strength: 56,
            jumping: 64,
            endurance: 40,
            inside_scoring: 34,
            mid_range: 30,
            three_point: 25,
            free_throw: 30,
            ball_handling: 25,
            passing: 30,
            perimeter_defense: 44,
            interior_defense: 38,
            stealing: 30,
            blocking: 31,
            offensive_rebounding: 36,
            defensive_rebounding: 36,
            basketball_iq: 46,
            work_ethic: 56,
            durability: 80,
            clutch: 46,
            overall: 40,
        };
        assert_eq!(ratings, expected);
    }

    #[test]
    fn test_ratings_stay_in_range() {
        let calculator = RatingCalculator::default();
        let extreme = StatLine {
            minutes: 48.0,
            points: 60.0,
            rebounds: 25.0,
            assists: 20.0,
            steals: 6.0,
            blocks: 8.0,
            turnovers: 0.0,
            fg_pct: 1.0,
            fg3_pct: 1.0,
            ft_pct: 1.0,
            fga: 30.0,
            fg3a: 15.0,
            fta: 20.0,
        };
        let sloppy =
            StatLine { minutes: 2.0, turnovers: 9.0, fga: 4.0, fg3a: 4.0, ..StatLine::default() };

        for stats in [StatLine::default(), star_guard(), extreme, sloppy] {
            for age in [18, 22, 28, 35, 44] {
                for height in [66, 72, 78, 84, 91] {
                    for weight in [160, 200, 260, 310] {
                        let bio = PlayerBio { age, height, weight };
                        assert_in_range(&calculator.calculate(&stats, &bio));
                    }
                }
            }
        }
    }

    #[test]
    fn test_zero_minutes_gives_zero_rates() {
        let calculator = RatingCalculator::default();
        let stats = StatLine { points: 10.0, rebounds: 4.0, blocks: 2.0, ..StatLine::default() };

        assert_eq!(calculator.per_minute_rates(&stats), PerMinuteRates::default());
    }

    #[test]
    fn test_per_36_normalization() {
        let calculator = RatingCalculator::default();
        let stats = StatLine { minutes: 18.0, points: 10.0, assists: 3.0, ..StatLine::default() };

        let rates = calculator.per_minute_rates(&stats);
        assert!((rates.points - 20.0).abs() < 1e-9);
        assert!((rates.assists - 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_all_threes_uses_combined_percentage() {
        // fga == fg3a takes the combined percentage instead of dividing by zero
        let calculator = RatingCalculator::default();
        let stats = StatLine {
            minutes: 20.0,
            fg_pct: 0.4,
            fg3_pct: 0.4,
            fga: 5.0,
            fg3a: 5.0,
            ..StatLine::default()
        };

        let ratings = calculator.calculate(&stats, &baseline_bio());
        // 30 + 0.4 * 50 + 0 + 4.09
        assert_eq!(ratings.inside_scoring, 54);
        // 30 + 0.4 * 60 - 1.0 * 10
        assert_eq!(ratings.mid_range, 44);
    }

    #[test]
    fn test_star_outrates_bench_player() {
        let calculator = RatingCalculator::default();
        let bench = StatLine {
            minutes: 9.0,
            points: 2.5,
            rebounds: 1.4,
            assists: 0.6,
            fga: 2.4,
            fg_pct: 0.38,
            ..StatLine::default()
        };
        let bio = PlayerBio { age: 26, height: 75, weight: 190 };

        let star = calculator.calculate(&star_guard(), &bio);
        let scrub = calculator.calculate(&bench, &bio);

        assert!(star.overall > scrub.overall);
        assert!(star.passing > scrub.passing);
        assert!(star.three_point > scrub.three_point);
    }

    #[test]
    fn test_potential() {
        let calculator = RatingCalculator::default();

        assert_eq!(calculator.potential(70, 30), 70);
        assert_eq!(calculator.potential(70, 28), 70);
        assert_eq!(calculator.potential(70, 20), 86);
        assert_eq!(calculator.potential(95, 19), 99);
        assert_eq!(calculator.potential(99, 0), 99);
    }

    #[test]
    fn test_clamp_rating_rounds_to_nearest() {
        assert_eq!(clamp_rating(60.49, 25.0, 99.0), 60);
        assert_eq!(clamp_rating(60.5, 25.0, 99.0), 61);
        assert_eq!(clamp_rating(-12.0, 25.0, 99.0), 25);
        assert_eq!(clamp_rating(140.0, 25.0, 99.0), 99);
        assert_eq!(clamp_rating(37.08, 40.0, 99.0), 40);
        assert_eq!(clamp_rating(f64::NAN, 25.0, 99.0), 25);
    }

    #[test]
    fn test_rating_set_serializes_game_keys() {
        let ratings = RatingCalculator::default().calculate(&StatLine::default(), &baseline_bio());
        let json = serde_json::to_value(ratings).unwrap();

        assert_eq!(json["basketballIQ"], 46);
        assert_eq!(json["insideScoring"], 34);
        assert_eq!(json["overall"], 40);
        assert!(json.get("basketball_iq").is_none());
    }
}
