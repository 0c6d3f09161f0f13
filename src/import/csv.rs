use csv::ReaderBuilder;
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use crate::error::{ImportError, Result, WellScoreError};
use crate::import::{extension, ImportFormat};
use crate::models::{DailyLog, DailySignals};

/// CSV importer for daily check-ins with flexible column naming
///
/// One row per day. Rows are ordered by the `day` column when present,
/// otherwise by their position in the file.
pub struct CsvImporter {
    column_mapping: HashMap<String, &'static str>,
}

const REQUIRED_COLUMNS: [&str; 4] = ["mood", "stress", "energy", "sleep"];

impl CsvImporter {
    pub fn new() -> Self {
        let mut column_mapping = HashMap::new();

        Self::add_mapping(&mut column_mapping, "day", &["day", "day_index", "index"]);
        Self::add_mapping(&mut column_mapping, "mood", &["mood", "mood_score"]);
        Self::add_mapping(&mut column_mapping, "stress", &["stress", "stress_level"]);
        Self::add_mapping(&mut column_mapping, "energy", &["energy", "energy_level"]);
        Self::add_mapping(
            &mut column_mapping,
            "sleep",
            &["sleep", "sleep_hours", "hours_slept"],
        );
        Self::add_mapping(
            &mut column_mapping,
            "reflection",
            &["reflection", "note", "notes"],
        );

        Self { column_mapping }
    }

    fn add_mapping(
        mapping: &mut HashMap<String, &'static str>,
        standard: &'static str,
        variations: &[&str],
    ) {
        for variation in variations {
            mapping.insert(variation.to_lowercase(), standard);
        }
    }

    fn normalize_column_name(&self, name: &str) -> Option<&'static str> {
        let normalized = name.trim().to_lowercase().replace([' ', '-'], "_");
        self.column_mapping.get(&normalized).copied()
    }

    /// Parse daily logs from any CSV reader
    pub fn read_logs<R: Read>(&self, reader: R, source: &Path) -> Result<Vec<DailyLog>> {
        let mut csv_reader = ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let parse_error = |reason: String| {
            WellScoreError::from(ImportError::ParseError {
                path: source.to_path_buf(),
                reason,
            })
        };

        let headers = csv_reader
            .headers()
            .map_err(|e| parse_error(e.to_string()))?
            .clone();

        let mut columns: HashMap<&'static str, usize> = HashMap::new();
        for (idx, header) in headers.iter().enumerate() {
            if let Some(standard) = self.normalize_column_name(header) {
                columns.entry(standard).or_insert(idx);
            }
        }

        if let Some(missing) = REQUIRED_COLUMNS.iter().find(|c| !columns.contains_key(**c)) {
            return Err(ImportError::MissingColumn {
                column: missing.to_string(),
            }
            .into());
        }

        let mut logs = Vec::new();
        for (row_idx, record) in csv_reader.records().enumerate() {
            let record = record.map_err(|e| parse_error(e.to_string()))?;

            let number = |column: &str| -> Result<f64> {
                let raw = columns
                    .get(column)
                    .and_then(|&idx| record.get(idx))
                    .unwrap_or("");
                raw.parse::<f64>().map_err(|_| {
                    parse_error(format!(
                        "row {}: invalid {} value '{}'",
                        row_idx + 1,
                        column,
                        raw
                    ))
                })
            };

            let day = match columns.get("day").and_then(|&idx| record.get(idx)) {
                Some(raw) if !raw.is_empty() => raw.parse::<u32>().map_err(|_| {
                    parse_error(format!("row {}: invalid day '{}'", row_idx + 1, raw))
                })?,
                _ => row_idx as u32,
            };

            logs.push(DailyLog {
                day,
                mood: number("mood")?,
                stress: number("stress")?,
                energy: number("energy")?,
                sleep: number("sleep")?,
                reflection: columns
                    .get("reflection")
                    .and_then(|&idx| record.get(idx))
                    .unwrap_or("")
                    .to_string(),
            });
        }

        tracing::debug!(rows = logs.len(), file = %source.display(), "csv parsed");
        Ok(logs)
    }
}

impl Default for CsvImporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ImportFormat for CsvImporter {
    fn can_import(&self, file_path: &Path) -> bool {
        extension(file_path).as_deref() == Some("csv")
    }

    fn import_file(&self, file_path: &Path) -> Result<DailySignals> {
        let file = std::fs::File::open(file_path)?;
        let logs = self.read_logs(file, file_path)?;
        Ok(DailySignals::from_logs(&logs))
    }

    fn get_format_name(&self) -> &'static str {
        "CSV"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    #[test]
    fn test_header_aliases() {
        let data = "Day,Mood,Stress Level,Energy,Sleep Hours,Notes\n\
                    1,6,5,6,7.5,tired\n\
                    0,7,4,7,8,\n";
        let importer = CsvImporter::new();
        let logs = importer
            .read_logs(data.as_bytes(), Path::new("inline.csv"))
            .unwrap();

        assert_eq!(logs.len(), 2);
        assert_eq!(logs[0].day, 1);
        assert_eq!(logs[0].stress, 5.0);
        assert_eq!(logs[0].sleep, 7.5);
        assert_eq!(logs[0].reflection, "tired");

        let signals = DailySignals::from_logs(&logs);
        assert_eq!(signals.mood, vec![7.0, 6.0]);
    }

    #[test]
    fn test_rows_without_day_use_position() {
        let data = "mood,stress,energy,sleep\n5,5,5,7\n6,4,6,8\n";
        let logs = CsvImporter::new()
            .read_logs(data.as_bytes(), Path::new("inline.csv"))
            .unwrap();
        assert_eq!(logs[0].day, 0);
        assert_eq!(logs[1].day, 1);
    }

    #[test]
    fn test_missing_column() {
        let data = "mood,stress,energy\n5,5,5\n";
        let err = CsvImporter::new()
            .read_logs(data.as_bytes(), Path::new("inline.csv"))
            .unwrap_err();
        assert!(matches!(
            err,
            WellScoreError::Import(ImportError::MissingColumn { ref column }) if column == "sleep"
        ));
    }

    #[test]
    fn test_invalid_number() {
        let data = "mood,stress,energy,sleep\n5,high,5,7\n";
        let err = CsvImporter::new()
            .read_logs(data.as_bytes(), Path::new("inline.csv"))
            .unwrap_err();
        assert!(err.to_string().contains("invalid stress value 'high'"));
    }

    #[test]
    fn test_import_file() {
        let mut file = Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(file, "day,mood,stress,energy,sleep").unwrap();
        writeln!(file, "0,7,2,8,8").unwrap();
        writeln!(file, "1,6,3,7,7.5").unwrap();

        let importer = CsvImporter::new();
        assert!(importer.can_import(file.path()));

        let signals = importer.import_file(file.path()).unwrap();
        assert_eq!(signals.stress, vec![2.0, 3.0]);
        assert_eq!(signals.sleep, vec![8.0, 7.5]);
    }
}
