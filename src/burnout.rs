//! Burnout risk scoring
//!
//! Four factors feed a weighted raw risk value:
//!
//! | Factor         | Raw quantity                         | Rescaling |
//! |----------------|--------------------------------------|-----------|
//! | Stress         | mean stress                          | x1        |
//! | Sleep deficit  | `max(0, sleep_target - mean sleep)`  | x2        |
//! | Energy deficit | `max(0, 10 - mean energy)`           | /2        |
//! | Mood downtrend | `max(0, -OLS slope of mood)`         | x5        |
//!
//! The rescaling constants are calibration values that bring hours, 0-10
//! ratings and slopes onto a comparable scale. The raw value is normalized to
//! 0-100 and split into Green/Yellow/Red bands by two thresholds.
//!
//! Each factor also has two severity gates producing a fixed message. Fired
//! messages are ranked by the factor's weighted contribution so the largest
//! driver of risk is always listed first.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::scoring_config::ScoringConfig;
use crate::stats::{linear_trend_slope, mean, normalize_0_100, round_dp};

/// Default number of reasons attached to a burnout result
pub const DEFAULT_MAX_REASONS: usize = 3;

/// Message used when no factor crosses a severity gate
pub const STABLE_REASON: &str = "Overall indicators look stable this week.";

const SLEEP_DEFICIT_SCALE: f64 = 2.0;
const ENERGY_DEFICIT_DIVISOR: f64 = 2.0;
const MOOD_DOWNTREND_SCALE: f64 = 5.0;
const ENERGY_CEILING: f64 = 10.0;

/// Three-band burnout risk classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLabel {
    Green,
    Yellow,
    Red,
}

impl RiskLabel {
    /// Classify a 0-100 risk score against the configured band ceilings
    ///
    /// Bands are closed at the top: a score equal to `green_max` is Green and
    /// a score equal to `yellow_max` is Yellow.
    pub fn from_score(score: f64, green_max: f64, yellow_max: f64) -> Self {
        if score <= green_max {
            RiskLabel::Green
        } else if score <= yellow_max {
            RiskLabel::Yellow
        } else {
            RiskLabel::Red
        }
    }
}

impl fmt::Display for RiskLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskLabel::Green => write!(f, "Green"),
            RiskLabel::Yellow => write!(f, "Yellow"),
            RiskLabel::Red => write!(f, "Red"),
        }
    }
}

/// Factors contributing to burnout risk, in gate-check order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskFactor {
    Stress,
    Sleep,
    Energy,
    Mood,
}

impl RiskFactor {
    /// Messages for the (high, moderate) severity gates
    fn messages(&self) -> (&'static str, &'static str) {
        match self {
            RiskFactor::Stress => (
                "High average stress over the past week.",
                "Moderate stress levels have been persistent.",
            ),
            RiskFactor::Sleep => (
                "Significant sleep deficit compared to the 8-hour target.",
                "Not consistently meeting the 8-hour sleep target.",
            ),
            RiskFactor::Energy => (
                "Low energy levels on average.",
                "Energy levels have been slightly below ideal.",
            ),
            RiskFactor::Mood => (
                "Mood has been trending downward across the week.",
                "Slight downward mood trend detected.",
            ),
        }
    }

    /// Gate thresholds as (high, moderate)
    fn thresholds(&self) -> (f64, f64) {
        match self {
            RiskFactor::Stress => (7.0, 5.5),
            RiskFactor::Sleep => (2.0, 1.0),
            RiskFactor::Energy => (4.0, 2.0),
            RiskFactor::Mood => (0.35, 0.20),
        }
    }

    /// Message for a gated quantity, if any gate fires
    pub fn gate(&self, value: f64) -> Option<&'static str> {
        let (high, moderate) = self.thresholds();
        let (high_msg, moderate_msg) = self.messages();

        if value >= high {
            Some(high_msg)
        } else if value >= moderate {
            Some(moderate_msg)
        } else {
            None
        }
    }
}

/// Per-factor weighted contributions to the raw risk value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskContributions {
    pub stress: f64,
    pub sleep: f64,
    pub energy: f64,
    pub mood: f64,
}

/// Intermediate quantities, attached only when debugging is requested
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BurnoutDebug {
    pub avg_stress: f64,
    pub avg_sleep: f64,
    pub avg_energy: f64,
    pub sleep_deficit: f64,
    pub energy_deficit: f64,
    pub mood_slope: f64,
    pub mood_downtrend: f64,
    pub risk_raw: f64,
    pub contributions: RiskContributions,
}

/// Burnout risk score, label and ranked reasons
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BurnoutResult {
    /// Normalized risk score 0-100 (2 decimals)
    pub burnout_risk_score: f64,

    pub burnout_risk_label: RiskLabel,

    /// Human-readable reasons, largest contributor first
    pub burnout_reasons: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub components_debug: Option<BurnoutDebug>,
}

/// Burnout inputs after aggregation, before scoring
#[derive(Debug, Clone, Copy, PartialEq)]
struct RiskFactors {
    avg_stress: f64,
    avg_sleep: f64,
    avg_energy: f64,
    sleep_deficit: f64,
    energy_deficit: f64,
    mood_slope: f64,
    mood_downtrend: f64,
}

impl RiskFactors {
    fn from_series(
        mood: &[f64],
        stress: &[f64],
        sleep: &[f64],
        energy: &[f64],
        config: &ScoringConfig,
    ) -> Self {
        let avg_stress = mean(stress);
        let avg_sleep = mean(sleep);
        let avg_energy = mean(energy);
        let mood_slope = linear_trend_slope(mood);

        RiskFactors {
            avg_stress,
            avg_sleep,
            avg_energy,
            sleep_deficit: (config.sleep_target - avg_sleep).max(0.0),
            energy_deficit: (ENERGY_CEILING - avg_energy).max(0.0),
            mood_slope,
            mood_downtrend: (-mood_slope).max(0.0),
        }
    }

    fn contributions(&self, config: &ScoringConfig) -> RiskContributions {
        RiskContributions {
            stress: config.risk_w_stress * self.avg_stress,
            sleep: config.risk_w_sleep_deficit * (self.sleep_deficit * SLEEP_DEFICIT_SCALE),
            energy: config.risk_w_energy_deficit * (self.energy_deficit / ENERGY_DEFICIT_DIVISOR),
            mood: config.risk_w_mood_downtrend * (self.mood_downtrend * MOOD_DOWNTREND_SCALE),
        }
    }

    /// Gated quantity for each factor, in gate-check order
    fn gated_values(&self) -> [(RiskFactor, f64); 4] {
        [
            (RiskFactor::Stress, self.avg_stress),
            (RiskFactor::Sleep, self.sleep_deficit),
            (RiskFactor::Energy, self.energy_deficit),
            (RiskFactor::Mood, self.mood_downtrend),
        ]
    }
}

impl RiskContributions {
    pub fn total(&self) -> f64 {
        self.stress + self.sleep + self.energy + self.mood
    }

    pub fn get(&self, factor: RiskFactor) -> f64 {
        match factor {
            RiskFactor::Stress => self.stress,
            RiskFactor::Sleep => self.sleep,
            RiskFactor::Energy => self.energy,
            RiskFactor::Mood => self.mood,
        }
    }
}

pub struct BurnoutCalculator;

impl BurnoutCalculator {
    /// Score burnout risk with the default reason cap and no debug payload
    pub fn calculate(
        mood: &[f64],
        stress: &[f64],
        sleep: &[f64],
        energy: &[f64],
        config: &ScoringConfig,
    ) -> BurnoutResult {
        Self::calculate_with(
            mood,
            stress,
            sleep,
            energy,
            config,
            DEFAULT_MAX_REASONS,
            false,
        )
    }

    /// Score burnout risk
    ///
    /// Series are expected to be non-empty. An empty series averages to 0,
    /// which skews the result instead of failing.
    pub fn calculate_with(
        mood: &[f64],
        stress: &[f64],
        sleep: &[f64],
        energy: &[f64],
        config: &ScoringConfig,
        max_reasons: usize,
        debug: bool,
    ) -> BurnoutResult {
        let factors = RiskFactors::from_series(mood, stress, sleep, energy, config);
        let contributions = factors.contributions(config);

        let risk_raw = contributions.total();
        let risk_score = normalize_0_100(risk_raw, config.risk_raw_min, config.risk_raw_max);
        let label = RiskLabel::from_score(risk_score, config.green_max, config.yellow_max);

        let reasons = Self::rank_reasons(&factors, &contributions, max_reasons);

        tracing::debug!(risk_raw, risk_score, %label, reasons = reasons.len(), "burnout risk scored");

        let components_debug = debug.then(|| BurnoutDebug {
            avg_stress: round_dp(factors.avg_stress, 2),
            avg_sleep: round_dp(factors.avg_sleep, 2),
            avg_energy: round_dp(factors.avg_energy, 2),
            sleep_deficit: round_dp(factors.sleep_deficit, 2),
            energy_deficit: round_dp(factors.energy_deficit, 2),
            mood_slope: round_dp(factors.mood_slope, 4),
            mood_downtrend: round_dp(factors.mood_downtrend, 4),
            risk_raw: round_dp(risk_raw, 4),
            contributions: RiskContributions {
                stress: round_dp(contributions.stress, 4),
                sleep: round_dp(contributions.sleep, 4),
                energy: round_dp(contributions.energy, 4),
                mood: round_dp(contributions.mood, 4),
            },
        });

        BurnoutResult {
            burnout_risk_score: round_dp(risk_score, 2),
            burnout_risk_label: label,
            burnout_reasons: reasons,
            components_debug,
        }
    }

    /// Collect fired gate messages, rank them by contribution and cap the list
    ///
    /// `sort_by` is stable, so equal contributions keep gate-check order
    /// (stress, sleep, energy, mood). An empty result after capping falls back
    /// to the stable message.
    fn rank_reasons(
        factors: &RiskFactors,
        contributions: &RiskContributions,
        max_reasons: usize,
    ) -> Vec<String> {
        let mut candidates: Vec<(RiskFactor, f64, &'static str)> = factors
            .gated_values()
            .iter()
            .filter_map(|&(factor, value)| {
                factor
                    .gate(value)
                    .map(|msg| (factor, contributions.get(factor), msg))
            })
            .collect();

        candidates.sort_by(|a, b| b.1.total_cmp(&a.1));

        let reasons: Vec<String> = candidates
            .into_iter()
            .take(max_reasons)
            .map(|(_, _, msg)| msg.to_string())
            .collect();

        if reasons.is_empty() {
            vec![STABLE_REASON.to_string()]
        } else {
            reasons
        }
    }
}
