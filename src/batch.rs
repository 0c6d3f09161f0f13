//! Parallel scoring of many independent inputs using rayon
//!
//! Each input is validated and scored on its own; one bad input never aborts
//! the rest of the batch.

use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, error, info, warn, Level};

use crate::error::{Result, WellScoreError};
use crate::import::ImportManager;
use crate::models::{DailySignals, MIN_ENTRIES};
use crate::report::{generate_report_with, ReportOptions, WellnessReport};
use crate::scoring_config::ScoringConfig;

/// Validate and score every input in parallel, preserving input order
pub fn generate_reports_parallel(
    signals: &[DailySignals],
    config: &ScoringConfig,
    options: &ReportOptions,
) -> Vec<Result<WellnessReport>> {
    signals
        .par_iter()
        .map(|s| {
            s.validate(MIN_ENTRIES)?;
            Ok(generate_report_with(s, config, *options))
        })
        .collect()
}

/// Outcome of scoring a single file
#[derive(Debug)]
pub struct FileReport {
    pub file_path: PathBuf,
    /// Number of days read from the file (0 when import failed)
    pub days: usize,
    pub result: Result<WellnessReport>,
}

/// Summary of a batch run over files
#[derive(Debug)]
pub struct BatchSummary {
    pub results: Vec<FileReport>,
    pub total_duration_ms: u128,
}

impl BatchSummary {
    pub fn successful(&self) -> usize {
        self.results.iter().filter(|r| r.result.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.results.len() - self.successful()
    }

    pub fn is_fully_successful(&self) -> bool {
        self.failed() == 0
    }
}

/// Import and score a set of files in parallel
pub fn analyze_files_parallel(
    paths: &[PathBuf],
    config: &ScoringConfig,
    options: &ReportOptions,
) -> BatchSummary {
    let start = Instant::now();
    let manager = ImportManager::new();

    info!(files = paths.len(), "starting batch analysis");

    let results: Vec<FileReport> = paths
        .par_iter()
        .map(|path| analyze_file(&manager, path, config, options))
        .collect();

    let summary = BatchSummary {
        results,
        total_duration_ms: start.elapsed().as_millis(),
    };

    info!(
        successful = summary.successful(),
        failed = summary.failed(),
        duration_ms = summary.total_duration_ms as u64,
        "batch analysis finished"
    );
    summary
}

fn analyze_file(
    manager: &ImportManager,
    path: &Path,
    config: &ScoringConfig,
    options: &ReportOptions,
) -> FileReport {
    let signals = match manager.import_file(path) {
        Ok(signals) => signals,
        Err(e) => {
            log_failure(path, "import failed", &e);
            return FileReport {
                file_path: path.to_path_buf(),
                days: 0,
                result: Err(e),
            };
        }
    };

    let days = signals.days();
    let result: Result<WellnessReport> = signals
        .validate(MIN_ENTRIES)
        .map_err(Into::into)
        .map(|_| generate_report_with(&signals, config, *options));

    if let Err(e) = &result {
        log_failure(path, "input rejected", e);
    } else {
        debug!(file = %path.display(), days, "file scored");
    }

    FileReport {
        file_path: path.to_path_buf(),
        days,
        result,
    }
}

/// Log a per-file failure at the level its severity calls for
fn log_failure(path: &Path, stage: &str, e: &WellScoreError) {
    if e.severity().to_tracing_level() == Level::ERROR {
        error!(file = %path.display(), error = %e, "{}", stage);
    } else {
        warn!(file = %path.display(), error = %e, "{}", stage);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ValidationError, WellScoreError};
    use crate::report::generate_report;
    use crate::scoring_config::DEFAULT_CONFIG;
    use std::io::Write;
    use tempfile::Builder;

    fn week(stress: f64) -> DailySignals {
        DailySignals::new(
            vec![6.0; 7],
            vec![stress; 7],
            vec![7.0; 7],
            vec![6.0; 7],
        )
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let inputs: Vec<DailySignals> = (0..16).map(|i| week(i as f64 * 0.5)).collect();
        let results = generate_reports_parallel(&inputs, &DEFAULT_CONFIG, &ReportOptions::default());

        assert_eq!(results.len(), inputs.len());
        for (input, result) in inputs.iter().zip(results) {
            assert_eq!(result.unwrap(), generate_report(input, &DEFAULT_CONFIG));
        }
    }

    #[test]
    fn test_bad_input_does_not_abort_batch() {
        let short = DailySignals::new(vec![5.0], vec![5.0], vec![7.0], vec![5.0]);
        let inputs = vec![week(3.0), short, week(8.0)];

        let results = generate_reports_parallel(&inputs, &DEFAULT_CONFIG, &ReportOptions::default());

        assert!(results[0].is_ok());
        assert!(matches!(
            results[1],
            Err(WellScoreError::Validation(ValidationError::InsufficientData { .. }))
        ));
        assert!(results[2].is_ok());
    }

    #[test]
    fn test_analyze_files() {
        let mut good = Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(good, "mood,stress,energy,sleep").unwrap();
        writeln!(good, "7,2,8,8").unwrap();
        writeln!(good, "6,3,7,7.5").unwrap();

        let mut single = Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(single, "mood,stress,energy,sleep").unwrap();
        writeln!(single, "7,2,8,8").unwrap();

        let paths = vec![
            good.path().to_path_buf(),
            single.path().to_path_buf(),
            PathBuf::from("missing.xml"),
        ];
        let summary = analyze_files_parallel(&paths, &DEFAULT_CONFIG, &ReportOptions::default());

        assert_eq!(summary.results.len(), 3);
        assert_eq!(summary.successful(), 1);
        assert_eq!(summary.failed(), 2);
        assert!(!summary.is_fully_successful());
        assert_eq!(summary.results[0].days, 2);
        assert_eq!(summary.results[1].days, 1);
    }
}
