//! Emotional volatility
//!
//! Mood instability is measured two ways: dispersion around the weekly mean
//! (population standard deviation) and jumpiness between consecutive days
//! (average absolute change). Each is normalized to 0-100 against configured
//! bounds and blended with the configured weights.

use serde::{Deserialize, Serialize};

use crate::scoring_config::ScoringConfig;
use crate::stats::{avg_abs_delta, normalize_0_100, round_dp, stddev};

/// Volatility metrics for a mood series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolatilityResult {
    /// Population standard deviation of mood (4 decimals)
    pub mood_std: f64,

    /// Average absolute day-to-day mood change (4 decimals)
    pub mood_jump: f64,

    /// Weighted 0-100 volatility score (2 decimals)
    pub volatility_score: f64,
}

pub struct VolatilityCalculator;

impl VolatilityCalculator {
    /// Calculate the volatility score for a mood series
    ///
    /// Single-point and empty series score 0.
    pub fn calculate(mood: &[f64], config: &ScoringConfig) -> VolatilityResult {
        let s = stddev(mood);
        let j = avg_abs_delta(mood);

        let s_norm = normalize_0_100(s, config.mood_std_min, config.mood_std_max);
        let j_norm = normalize_0_100(j, config.mood_jump_min, config.mood_jump_max);

        let score = config.vol_w_std * s_norm + config.vol_w_jump * j_norm;

        tracing::trace!(std = s, jump = j, s_norm, j_norm, score, "volatility computed");

        VolatilityResult {
            mood_std: round_dp(s, 4),
            mood_jump: round_dp(j, 4),
            volatility_score: round_dp(score, 2),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring_config::DEFAULT_CONFIG;

    #[test]
    fn test_constant_mood_has_zero_volatility() {
        let result = VolatilityCalculator::calculate(&[6.0; 7], &DEFAULT_CONFIG);
        assert_eq!(result.mood_std, 0.0);
        assert_eq!(result.mood_jump, 0.0);
        assert_eq!(result.volatility_score, 0.0);
    }

    #[test]
    fn test_degenerate_series() {
        assert_eq!(
            VolatilityCalculator::calculate(&[], &DEFAULT_CONFIG).volatility_score,
            0.0
        );
        assert_eq!(
            VolatilityCalculator::calculate(&[9.0], &DEFAULT_CONFIG).volatility_score,
            0.0
        );
    }

    #[test]
    fn test_alternating_mood() {
        // std = 1.5, jump = 3.0
        let mood = [2.0, 5.0, 2.0, 5.0];
        let result = VolatilityCalculator::calculate(&mood, &DEFAULT_CONFIG);

        assert_eq!(result.mood_std, 1.5);
        assert_eq!(result.mood_jump, 3.0);

        // 0.6 * (1.5 / 3.5 * 100) + 0.4 * (3.0 / 4.0 * 100) = 25.714... + 30
        assert_eq!(result.volatility_score, 55.71);
    }

    #[test]
    fn test_extreme_swings_saturate() {
        let mood = [0.0, 10.0, 0.0, 10.0, 0.0, 10.0];
        let result = VolatilityCalculator::calculate(&mood, &DEFAULT_CONFIG);
        assert_eq!(result.volatility_score, 100.0);
    }

    #[test]
    fn test_custom_weights() {
        let config = ScoringConfig {
            vol_w_std: 0.0,
            vol_w_jump: 1.0,
            ..ScoringConfig::default()
        };
        let result = VolatilityCalculator::calculate(&[2.0, 4.0], &config);
        // Only the jump counts: 2.0 / 4.0 * 100
        assert_eq!(result.volatility_score, 50.0);
    }
}
