// Library interface for the WellScore engine
// The CLI and integration tests both go through these modules

pub mod accumulation;
pub mod battery;
pub mod batch;
pub mod burnout;
pub mod config;
pub mod error;
pub mod export;
pub mod import;
pub mod logging;
pub mod models;
pub mod report;
pub mod scoring_config;
pub mod stats;
pub mod volatility;

// Re-export commonly used types for convenience
pub use accumulation::{AccumulationCalculator, AccumulationResult};
pub use battery::BatteryCalculator;
pub use batch::{analyze_files_parallel, generate_reports_parallel};
pub use burnout::{BurnoutCalculator, BurnoutDebug, BurnoutResult, RiskFactor, RiskLabel};
pub use config::AppConfig;
pub use error::{ImportError, Result, ValidationError, WellScoreError};
pub use logging::{LogConfig, LogFormat, LogLevel};
pub use models::{DailyLog, DailySignals, MIN_ENTRIES};
pub use report::{
    generate_report, generate_report_with, ReportGenerator, ReportOptions, WellnessMetrics,
    WellnessReport, DISCLAIMER,
};
pub use scoring_config::{ScoringConfig, DEFAULT_CONFIG};
pub use volatility::{VolatilityCalculator, VolatilityResult};
