use serde::{Deserialize, Serialize};

use crate::error::{Result, WellScoreError};

/// Upper bound applied to the stress decay factor at evaluation time
pub const MAX_STRESS_DECAY: f64 = 0.99;

/// Tunable weights and thresholds for every wellness calculator
///
/// The struct is a plain value: calculators borrow it and never mutate it, so
/// one instance can be shared by any number of concurrent report computations.
/// Missing fields in a TOML/JSON override fall back to the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Weight of normalized mood standard deviation in the volatility score
    pub vol_w_std: f64,
    /// Weight of normalized mood jump in the volatility score
    pub vol_w_jump: f64,

    pub mood_std_min: f64,
    pub mood_std_max: f64,
    pub mood_jump_min: f64,
    pub mood_jump_max: f64,

    /// Carry-over factor for yesterday's accumulated stress (capped at 0.99)
    pub stress_decay: f64,

    pub risk_w_stress: f64,
    pub risk_w_sleep_deficit: f64,
    pub risk_w_energy_deficit: f64,
    pub risk_w_mood_downtrend: f64,

    /// Nightly sleep target in hours
    pub sleep_target: f64,

    pub risk_raw_min: f64,
    pub risk_raw_max: f64,

    /// Highest risk score still labelled Green
    pub green_max: f64,
    /// Highest risk score still labelled Yellow
    pub yellow_max: f64,
}

impl ScoringConfig {
    pub const DEFAULT: ScoringConfig = ScoringConfig {
        vol_w_std: 0.6,
        vol_w_jump: 0.4,

        mood_std_min: 0.0,
        mood_std_max: 3.5,
        mood_jump_min: 0.0,
        mood_jump_max: 4.0,

        stress_decay: 0.8,

        risk_w_stress: 0.45,
        risk_w_sleep_deficit: 0.20,
        risk_w_energy_deficit: 0.25,
        risk_w_mood_downtrend: 0.10,

        sleep_target: 8.0,

        risk_raw_min: 0.0,
        risk_raw_max: 10.0,

        green_max: 33.0,
        yellow_max: 66.0,
    };

    /// Decay factor actually used by the accumulation model
    pub fn effective_stress_decay(&self) -> f64 {
        crate::stats::clamp(self.stress_decay, 0.0, MAX_STRESS_DECAY)
    }

    /// Check the configuration for values that are legal but suspicious
    ///
    /// Returns human-readable warnings; an empty list means the configuration
    /// looks sane.
    pub fn validate(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        let vol_sum = self.vol_w_std + self.vol_w_jump;
        if (vol_sum - 1.0).abs() > 1e-9 {
            warnings.push(format!(
                "Volatility weights sum to {:.3}; scores may leave the 0-100 range",
                vol_sum
            ));
        }

        let risk_sum = self.risk_w_stress
            + self.risk_w_sleep_deficit
            + self.risk_w_energy_deficit
            + self.risk_w_mood_downtrend;
        if (risk_sum - 1.0).abs() > 1e-9 {
            warnings.push(format!("Risk factor weights sum to {:.3}", risk_sum));
        }

        for (name, lo, hi) in [
            ("mood_std", self.mood_std_min, self.mood_std_max),
            ("mood_jump", self.mood_jump_min, self.mood_jump_max),
            ("risk_raw", self.risk_raw_min, self.risk_raw_max),
        ] {
            if hi <= lo {
                warnings.push(format!(
                    "Degenerate {} range [{}, {}]; normalized values will always be 0",
                    name, lo, hi
                ));
            }
        }

        if self.stress_decay > MAX_STRESS_DECAY {
            warnings.push(format!(
                "stress_decay {} exceeds {} and will be capped",
                self.stress_decay, MAX_STRESS_DECAY
            ));
        } else if self.stress_decay < 0.0 {
            warnings.push(format!(
                "stress_decay {} is negative and will be raised to 0",
                self.stress_decay
            ));
        }

        if self.green_max >= self.yellow_max {
            warnings.push(format!(
                "green_max ({}) >= yellow_max ({}); the Yellow band is empty",
                self.green_max, self.yellow_max
            ));
        }

        warnings
    }

    /// Reject configurations whose label thresholds leave an empty band
    pub fn strict_validate(&self) -> Result<()> {
        if self.green_max >= self.yellow_max {
            return Err(WellScoreError::Config(format!(
                "green_max ({}) must be lower than yellow_max ({})",
                self.green_max, self.yellow_max
            )));
        }
        Ok(())
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Process-wide default configuration
pub static DEFAULT_CONFIG: ScoringConfig = ScoringConfig::DEFAULT;
