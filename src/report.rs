//! Wellness report aggregation
//!
//! Runs every calculator over one set of daily series and assembles the
//! nested report served to the dashboard. Calculators are independent of each
//! other; they only share the (read-only) scoring configuration.

use serde::{Deserialize, Serialize};
use tracing::debug_span;

use crate::accumulation::{AccumulationCalculator, AccumulationResult};
use crate::battery::BatteryCalculator;
use crate::burnout::{BurnoutCalculator, BurnoutResult, DEFAULT_MAX_REASONS};
use crate::models::DailySignals;
use crate::scoring_config::{ScoringConfig, DEFAULT_CONFIG};
use crate::volatility::{VolatilityCalculator, VolatilityResult};

/// Fixed disclaimer attached to every report
pub const DISCLAIMER: &str = "Wellness insights only. Not medical diagnosis.";

/// All wellness metrics for one set of series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WellnessMetrics {
    pub volatility: VolatilityResult,
    pub stress_accumulation: AccumulationResult,
    pub burnout_risk: BurnoutResult,
    /// Emotional battery gauge, 0-100 (2 decimals)
    pub emotional_battery: f64,
}

/// Engine output: metrics plus the disclaimer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WellnessReport {
    pub metrics: WellnessMetrics,
    pub disclaimer: String,
}

/// Knobs forwarded to the burnout calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportOptions {
    /// Maximum number of burnout reasons to include
    pub max_reasons: usize,

    /// Attach the burnout component breakdown
    pub debug: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        ReportOptions {
            max_reasons: DEFAULT_MAX_REASONS,
            debug: false,
        }
    }
}

/// Report generator bound to a scoring configuration
pub struct ReportGenerator<'a> {
    config: &'a ScoringConfig,
    options: ReportOptions,
}

impl ReportGenerator<'static> {
    /// Create a generator using the shared default configuration
    pub fn new() -> Self {
        ReportGenerator {
            config: &DEFAULT_CONFIG,
            options: ReportOptions::default(),
        }
    }
}

impl<'a> ReportGenerator<'a> {
    /// Create a generator with a custom configuration
    pub fn with_config(config: &'a ScoringConfig) -> Self {
        if config.green_max >= config.yellow_max {
            tracing::warn!(
                green_max = config.green_max,
                yellow_max = config.yellow_max,
                "label thresholds leave the Yellow band empty"
            );
        }
        ReportGenerator {
            config,
            options: ReportOptions::default(),
        }
    }

    pub fn options(mut self, options: ReportOptions) -> Self {
        self.options = options;
        self
    }

    /// Generate the full wellness report
    pub fn generate(&self, signals: &DailySignals) -> WellnessReport {
        let span = debug_span!("generate_report", days = signals.days());
        let _guard = span.enter();

        let config = self.config;
        let volatility = VolatilityCalculator::calculate(&signals.mood, config);
        let stress_accumulation = AccumulationCalculator::calculate(&signals.stress, config);
        let burnout_risk = BurnoutCalculator::calculate_with(
            &signals.mood,
            &signals.stress,
            &signals.sleep,
            &signals.energy,
            config,
            self.options.max_reasons,
            self.options.debug,
        );
        let emotional_battery = BatteryCalculator::calculate(&signals.stress, &signals.energy);

        tracing::debug!(
            volatility = volatility.volatility_score,
            burnout = burnout_risk.burnout_risk_score,
            label = %burnout_risk.burnout_risk_label,
            battery = emotional_battery,
            "report generated"
        );

        WellnessReport {
            metrics: WellnessMetrics {
                volatility,
                stress_accumulation,
                burnout_risk,
                emotional_battery,
            },
            disclaimer: DISCLAIMER.to_string(),
        }
    }
}

impl Default for ReportGenerator<'static> {
    fn default() -> Self {
        Self::new()
    }
}

/// Generate a report with the default reason cap and no debug payload
pub fn generate_report(signals: &DailySignals, config: &ScoringConfig) -> WellnessReport {
    ReportGenerator::with_config(config).generate(signals)
}

/// Generate a report with explicit burnout options
pub fn generate_report_with(
    signals: &DailySignals,
    config: &ScoringConfig,
    options: ReportOptions,
) -> WellnessReport {
    ReportGenerator::with_config(config)
        .options(options)
        .generate(signals)
}
