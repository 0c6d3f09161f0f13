use std::path::Path;

use crate::error::{ImportError, Result};
use crate::import::{extension, ImportFormat};
use crate::models::{DailyLog, DailySignals};

/// JSON importer
///
/// Accepts either the series mapping
/// `{"mood": [..], "stress": [..], "sleep": [..], "energy": [..]}`
/// or an array of daily check-ins `[{"day": 0, "mood": 7, ...}, ...]`.
pub struct JsonImporter;

impl JsonImporter {
    /// Parse a JSON document in either accepted shape
    pub fn parse_str(&self, content: &str, source: &Path) -> Result<DailySignals> {
        let value: serde_json::Value =
            serde_json::from_str(content).map_err(|e| ImportError::ParseError {
                path: source.to_path_buf(),
                reason: e.to_string(),
            })?;

        if value.is_array() {
            let logs: Vec<DailyLog> =
                serde_json::from_value(value).map_err(|e| ImportError::ParseError {
                    path: source.to_path_buf(),
                    reason: e.to_string(),
                })?;
            return Ok(DailySignals::from_logs(&logs));
        }

        DailySignals::from_json_value(value)
    }
}

impl ImportFormat for JsonImporter {
    fn can_import(&self, file_path: &Path) -> bool {
        extension(file_path).as_deref() == Some("json")
    }

    fn import_file(&self, file_path: &Path) -> Result<DailySignals> {
        let content = std::fs::read_to_string(file_path)?;
        self.parse_str(&content, file_path)
    }

    fn get_format_name(&self) -> &'static str {
        "JSON"
    }
}
