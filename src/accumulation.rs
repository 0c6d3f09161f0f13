//! Stress accumulation model
//!
//! Daily stress carries over into the following days with exponential decay:
//!
//! ```text
//! A[i] = decay * A[i-1] + stress[i],   A[-1] = 0
//! ```
//!
//! The decay factor is clamped to `[0, 0.99]` before use, so a misconfigured
//! value can never turn the recurrence into an unbounded sum.

use serde::{Deserialize, Serialize};

use crate::scoring_config::{ScoringConfig, MAX_STRESS_DECAY};
use crate::stats::{linear_trend_slope, round_dp};

/// Stress accumulation curve and its trend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccumulationResult {
    /// Running accumulated stress for each day (3 decimals)
    pub accumulation_curve: Vec<f64>,

    /// OLS slope of the curve; positive means accumulation is worsening (4 decimals)
    pub accumulation_trend_slope: f64,

    /// Accumulated stress on the most recent day (3 decimals)
    pub latest_accumulation: f64,
}

pub struct AccumulationCalculator;

impl AccumulationCalculator {
    /// Run the decay recurrence over a stress series
    pub fn calculate(stress: &[f64], config: &ScoringConfig) -> AccumulationResult {
        if config.stress_decay > MAX_STRESS_DECAY {
            tracing::warn!(
                configured = config.stress_decay,
                cap = MAX_STRESS_DECAY,
                "stress decay above cap, clamping"
            );
        }
        let decay = config.effective_stress_decay();

        let curve = Self::accumulation_curve(stress, decay);
        let slope = linear_trend_slope(&curve);
        let latest = curve.last().copied().unwrap_or(0.0);

        AccumulationResult {
            accumulation_curve: curve.iter().map(|&a| round_dp(a, 3)).collect(),
            accumulation_trend_slope: round_dp(slope, 4),
            latest_accumulation: round_dp(latest, 3),
        }
    }

    /// Unrounded running totals for an already-clamped decay factor
    pub fn accumulation_curve(stress: &[f64], decay: f64) -> Vec<f64> {
        stress
            .iter()
            .scan(0.0, |prev, &s| {
                *prev = decay * *prev + s;
                Some(*prev)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring_config::DEFAULT_CONFIG;

    #[test]
    fn test_unit_stress_curve() {
        let result = AccumulationCalculator::calculate(&[1.0, 1.0, 1.0, 1.0], &DEFAULT_CONFIG);

        assert_eq!(result.accumulation_curve, vec![1.0, 1.8, 2.44, 2.952]);
        assert_eq!(result.latest_accumulation, 2.952);
        assert!(result.accumulation_trend_slope > 0.0);
    }

    #[test]
    fn test_empty_series() {
        let result = AccumulationCalculator::calculate(&[], &DEFAULT_CONFIG);

        assert!(result.accumulation_curve.is_empty());
        assert_eq!(result.accumulation_trend_slope, 0.0);
        assert_eq!(result.latest_accumulation, 0.0);
    }

    #[test]
    fn test_zero_decay_is_identity() {
        let config = ScoringConfig {
            stress_decay: 0.0,
            ..ScoringConfig::default()
        };
        let result = AccumulationCalculator::calculate(&[3.0, 7.0, 2.0], &config);
        assert_eq!(result.accumulation_curve, vec![3.0, 7.0, 2.0]);
    }

    #[test]
    fn test_decay_above_cap_is_clamped() {
        let stress = [5.0; 10];
        let runaway = ScoringConfig {
            stress_decay: 1.25,
            ..ScoringConfig::default()
        };
        let capped = ScoringConfig {
            stress_decay: MAX_STRESS_DECAY,
            ..ScoringConfig::default()
        };

        assert_eq!(
            AccumulationCalculator::calculate(&stress, &runaway),
            AccumulationCalculator::calculate(&stress, &capped)
        );
    }

    #[test]
    fn test_relief_produces_negative_slope() {
        let result =
            AccumulationCalculator::calculate(&[9.0, 9.0, 2.0, 1.0, 0.0, 0.0, 0.0, 0.0], &DEFAULT_CONFIG);
        assert!(result.accumulation_trend_slope < 0.0);
    }
}
