//! Emotional battery gauge for dashboard display

use crate::stats::{clamp, mean, round_dp};

const STRESS_DRAIN_WEIGHT: f64 = 0.6;
const ENERGY_DRAIN_WEIGHT: f64 = 0.4;

pub struct BatteryCalculator;

impl BatteryCalculator {
    /// Remaining emotional reserve on a 0-100 scale (2 decimals)
    ///
    /// `100 - (0.6 * mean stress + 0.4 * (10 - mean energy)) * 10`, clamped.
    pub fn calculate(stress: &[f64], energy: &[f64]) -> f64 {
        let s = mean(stress);
        let e = mean(energy);

        let drain = STRESS_DRAIN_WEIGHT * s + ENERGY_DRAIN_WEIGHT * (10.0 - e);
        round_dp(clamp(100.0 - drain * 10.0, 0.0, 100.0), 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_battery() {
        assert_eq!(BatteryCalculator::calculate(&[0.0; 5], &[10.0; 5]), 100.0);
    }

    #[test]
    fn test_empty_battery_is_clamped() {
        assert_eq!(BatteryCalculator::calculate(&[10.0; 5], &[0.0; 5]), 0.0);
    }

    #[test]
    fn test_midrange() {
        // 100 - (0.6 * 5 + 0.4 * 5) * 10 = 50
        assert_eq!(BatteryCalculator::calculate(&[5.0, 5.0], &[5.0, 5.0]), 50.0);
    }

    #[test]
    fn test_energy_above_scale_clamps_high() {
        assert_eq!(BatteryCalculator::calculate(&[0.0], &[15.0]), 100.0);
    }
}
