use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Result, WellScoreError};
use crate::report::WellnessReport;

pub mod json;
pub mod text;

/// Export format types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Json,
    Text,
}

impl std::str::FromStr for ExportFormat {
    type Err = WellScoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "text" | "txt" => Ok(ExportFormat::Text),
            _ => Err(WellScoreError::Export(format!("Unsupported format: {}", s))),
        }
    }
}

/// A report plus the context it was produced in
///
/// The wrapped report stays byte-for-byte what the engine returned; the
/// timestamp and source live only on the envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportEnvelope {
    pub generated_at: DateTime<Utc>,

    /// Where the input came from (file path or label)
    pub source: String,

    /// Number of days scored
    pub days: usize,

    pub report: WellnessReport,
}

impl ReportEnvelope {
    pub fn new(source: impl Into<String>, days: usize, report: WellnessReport) -> Self {
        ReportEnvelope {
            generated_at: Utc::now(),
            source: source.into(),
            days,
            report,
        }
    }
}

/// Render an envelope in the requested format
pub fn render(envelope: &ReportEnvelope, format: ExportFormat) -> Result<String> {
    match format {
        ExportFormat::Json => json::render(envelope),
        ExportFormat::Text => Ok(text::render(envelope)),
    }
}

/// Write an envelope to a file in the requested format
pub fn export_report<P: AsRef<Path>>(
    envelope: &ReportEnvelope,
    format: ExportFormat,
    output_path: P,
) -> Result<()> {
    let content = render(envelope, format)?;
    std::fs::write(&output_path, content)?;
    tracing::info!(
        path = %output_path.as_ref().display(),
        format = ?format,
        "report exported"
    );
    Ok(())
}
