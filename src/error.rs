//! Unified error hierarchy for WellScore
//!
//! The scoring engine itself is infallible. Errors only arise at the edges:
//! validating caller-supplied series, loading configuration, importing and
//! exporting files.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for all WellScore operations
#[derive(Debug, Error)]
pub enum WellScoreError {
    /// Input series violate the engine's input contract
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Import errors
    #[error("Import error: {0}")]
    Import(#[from] ImportError),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

/// Contract violations on the four input series
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A required series key is absent
    #[error("Missing required series: {name}")]
    MissingSeries { name: String },

    /// Series shorter than the minimum the trend estimators need
    #[error("Insufficient data in {series}: {len} entries, need at least {min}")]
    InsufficientData {
        series: String,
        len: usize,
        min: usize,
    },

    /// Series lengths disagree
    #[error("Length mismatch in {series}: expected {expected}, got {actual}")]
    LengthMismatch {
        series: String,
        expected: usize,
        actual: usize,
    },

    /// NaN or infinite sample
    #[error("Non-finite value in {series} at index {index}")]
    NonFinite { series: String, index: usize },
}

/// Daily log import errors
#[derive(Debug, Error)]
pub enum ImportError {
    /// Unsupported or undetectable file format
    #[error("Unsupported format: {format}")]
    UnsupportedFormat { format: String },

    /// Format-specific parsing error
    #[error("Parse error in {path}: {reason}")]
    ParseError { path: PathBuf, reason: String },

    /// Required column absent from a CSV header
    #[error("Missing column: {column}")]
    MissingColumn { column: String },
}

/// Result type alias for WellScore operations
pub type Result<T> = std::result::Result<T, WellScoreError>;

impl WellScoreError {
    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            WellScoreError::Validation(_) => ErrorSeverity::Warning,
            WellScoreError::Import(ImportError::MissingColumn { .. }) => ErrorSeverity::Warning,
            WellScoreError::Config(_) => ErrorSeverity::Critical,
            _ => ErrorSeverity::Error,
        }
    }

    /// Get user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            WellScoreError::Validation(ValidationError::MissingSeries { name }) => {
                format!("The '{}' series is required to build a report.", name)
            }
            WellScoreError::Validation(ValidationError::InsufficientData { min, .. }) => {
                format!(
                    "Not enough check-ins yet. Please log at least {} days before requesting insights.",
                    min
                )
            }
            WellScoreError::Import(ImportError::UnsupportedFormat { format }) => {
                format!("Cannot read '{}' files. Use CSV or JSON daily logs.", format)
            }
            _ => self.to_string(),
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Critical error requiring immediate attention
    Critical,
    /// Error that prevents the operation
    Error,
    /// Warning that doesn't prevent operation
    Warning,
}

impl ErrorSeverity {
    /// Convert to tracing level
    pub fn to_tracing_level(&self) -> tracing::Level {
        match self {
            ErrorSeverity::Critical => tracing::Level::ERROR,
            ErrorSeverity::Error => tracing::Level::ERROR,
            ErrorSeverity::Warning => tracing::Level::WARN,
        }
    }
}
