use std::path::Path;

use crate::error::{ImportError, Result};
use crate::models::DailySignals;

pub mod csv;
pub mod json;

/// Trait for reading daily check-ins from different file formats
pub trait ImportFormat {
    /// Check if this importer can handle the given file
    fn can_import(&self, file_path: &Path) -> bool;

    /// Read the file into the four daily series
    fn import_file(&self, file_path: &Path) -> Result<DailySignals>;

    /// Get the format name for this importer
    fn get_format_name(&self) -> &'static str;
}

/// Lowercased extension of a path, if any
pub(crate) fn extension(file_path: &Path) -> Option<String> {
    file_path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
}

/// Dispatches a file to the first importer that accepts it
pub struct ImportManager {
    importers: Vec<Box<dyn ImportFormat + Send + Sync>>,
}

impl ImportManager {
    pub fn new() -> Self {
        let importers: Vec<Box<dyn ImportFormat + Send + Sync>> = vec![
            Box::new(csv::CsvImporter::new()),
            Box::new(json::JsonImporter),
        ];

        Self { importers }
    }

    /// Import a single file, detecting the format from its extension
    pub fn import_file(&self, file_path: &Path) -> Result<DailySignals> {
        let importer = self
            .importers
            .iter()
            .find(|importer| importer.can_import(file_path))
            .ok_or_else(|| ImportError::UnsupportedFormat {
                format: extension(file_path).unwrap_or_else(|| "unknown".to_string()),
            })?;

        tracing::info!(
            file = %file_path.display(),
            format = importer.get_format_name(),
            "importing daily logs"
        );
        importer.import_file(file_path)
    }
}

impl Default for ImportManager {
    fn default() -> Self {
        Self::new()
    }
}
