//! Input boundary for the scoring engine
//!
//! Daily check-ins arrive either as individual [`DailyLog`] entries or as the
//! four parallel series in [`DailySignals`]. Contract checks (minimum length,
//! equal lengths, finite values) live here so the calculators can stay
//! infallible.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ValidationError, WellScoreError};

/// Minimum number of days accepted at the input boundary
///
/// Trend estimators are degenerate on a single point.
pub const MIN_ENTRIES: usize = 2;

/// Names of the four required input series, in canonical order
pub const SERIES_NAMES: [&str; 4] = ["mood", "stress", "sleep", "energy"];

/// One day's self-reported check-in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyLog {
    /// Day offset within the reporting window (0-based)
    pub day: u32,

    /// Mood rating, 0-10
    pub mood: f64,

    /// Stress rating, 0-10
    pub stress: f64,

    /// Energy rating, 0-10
    pub energy: f64,

    /// Hours slept
    pub sleep: f64,

    /// Free-text reflection, not used in scoring
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub reflection: String,
}

/// The four daily series the scoring engine consumes
///
/// Every key is required when deserializing; a missing key is a contract
/// violation, not something the engine papers over.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySignals {
    pub mood: Vec<f64>,
    pub stress: Vec<f64>,
    pub sleep: Vec<f64>,
    pub energy: Vec<f64>,
}

impl DailySignals {
    pub fn new(mood: Vec<f64>, stress: Vec<f64>, sleep: Vec<f64>, energy: Vec<f64>) -> Self {
        DailySignals {
            mood,
            stress,
            sleep,
            energy,
        }
    }

    /// Build series from individual check-ins, ordered by day
    ///
    /// Logs are sorted by their `day` field (stably, so duplicate days keep
    /// submission order) rather than taken in the order they were submitted.
    /// Callers that rely on submission order should number `day` accordingly.
    pub fn from_logs(logs: &[DailyLog]) -> Self {
        let mut ordered: Vec<&DailyLog> = logs.iter().collect();
        ordered.sort_by_key(|log| log.day);

        DailySignals {
            mood: ordered.iter().map(|l| l.mood).collect(),
            stress: ordered.iter().map(|l| l.stress).collect(),
            sleep: ordered.iter().map(|l| l.sleep).collect(),
            energy: ordered.iter().map(|l| l.energy).collect(),
        }
    }

    /// Parse from an untyped JSON mapping, reporting the first missing key
    pub fn from_json_value(value: serde_json::Value) -> Result<Self> {
        if let Some(obj) = value.as_object() {
            if let Some(missing) = SERIES_NAMES.iter().find(|name| !obj.contains_key(**name)) {
                return Err(ValidationError::MissingSeries {
                    name: missing.to_string(),
                }
                .into());
            }
        }

        serde_json::from_value(value).map_err(WellScoreError::from)
    }

    /// Series paired with their names, in canonical order
    pub fn series(&self) -> [(&'static str, &[f64]); 4] {
        [
            ("mood", self.mood.as_slice()),
            ("stress", self.stress.as_slice()),
            ("sleep", self.sleep.as_slice()),
            ("energy", self.energy.as_slice()),
        ]
    }

    /// Number of days covered (length of the mood series)
    pub fn days(&self) -> usize {
        self.mood.len()
    }

    /// Enforce the boundary contract: minimum length, equal lengths, finite values
    ///
    /// The scoring engine never calls this itself; it degrades gracefully on
    /// whatever it receives.
    pub fn validate(&self, min_len: usize) -> std::result::Result<(), ValidationError> {
        let expected = self.mood.len();

        for (name, values) in self.series() {
            if values.len() < min_len {
                return Err(ValidationError::InsufficientData {
                    series: name.to_string(),
                    len: values.len(),
                    min: min_len,
                });
            }

            if values.len() != expected {
                return Err(ValidationError::LengthMismatch {
                    series: name.to_string(),
                    expected,
                    actual: values.len(),
                });
            }

            if let Some(index) = values.iter().position(|v| !v.is_finite()) {
                return Err(ValidationError::NonFinite {
                    series: name.to_string(),
                    index,
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn log(day: u32, mood: f64) -> DailyLog {
        DailyLog {
            day,
            mood,
            stress: 4.0,
            energy: 6.0,
            sleep: 7.5,
            reflection: String::new(),
        }
    }

    #[test]
    fn test_from_logs_orders_by_day() {
        let logs = vec![log(2, 3.0), log(0, 1.0), log(1, 2.0)];
        let signals = DailySignals::from_logs(&logs);

        assert_eq!(signals.mood, vec![1.0, 2.0, 3.0]);
        assert_eq!(signals.sleep, vec![7.5; 3]);
        assert_eq!(signals.days(), 3);
    }

    #[test]
    fn test_from_logs_duplicate_days_keep_submission_order() {
        let logs = vec![log(1, 9.0), log(0, 4.0), log(1, 8.0), log(0, 3.0)];
        let signals = DailySignals::from_logs(&logs);

        assert_eq!(signals.mood, vec![4.0, 3.0, 9.0, 8.0]);
    }

    #[test]
    fn test_validate_accepts_well_formed() {
        let signals = DailySignals::new(vec![5.0; 3], vec![5.0; 3], vec![7.0; 3], vec![6.0; 3]);
        assert!(signals.validate(MIN_ENTRIES).is_ok());
    }

    #[test]
    fn test_validate_rejects_short_series() {
        let signals = DailySignals::new(vec![5.0], vec![5.0], vec![7.0], vec![6.0]);
        assert_eq!(
            signals.validate(MIN_ENTRIES),
            Err(ValidationError::InsufficientData {
                series: "mood".to_string(),
                len: 1,
                min: 2,
            })
        );
    }

    #[test]
    fn test_validate_rejects_ragged_series() {
        let signals = DailySignals::new(vec![5.0; 3], vec![5.0; 3], vec![7.0; 2], vec![6.0; 3]);
        assert_eq!(
            signals.validate(MIN_ENTRIES),
            Err(ValidationError::LengthMismatch {
                series: "sleep".to_string(),
                expected: 3,
                actual: 2,
            })
        );
    }

    #[test]
    fn test_validate_rejects_nan() {
        let signals = DailySignals::new(
            vec![5.0; 3],
            vec![5.0, f64::NAN, 5.0],
            vec![7.0; 3],
            vec![6.0; 3],
        );
        assert_eq!(
            signals.validate(MIN_ENTRIES),
            Err(ValidationError::NonFinite {
                series: "stress".to_string(),
                index: 1,
            })
        );
    }

    #[test]
    fn test_missing_key_is_validation_error() {
        let value = json!({
            "mood": [5, 6],
            "stress": [4, 4],
            "energy": [6, 6],
        });

        match DailySignals::from_json_value(value) {
            Err(WellScoreError::Validation(ValidationError::MissingSeries { name })) => {
                assert_eq!(name, "sleep");
            }
            other => panic!("expected missing series error, got {:?}", other),
        }
    }

    #[test]
    fn test_json_value_with_integers() {
        let value = json!({
            "mood": [5, 6],
            "stress": [4, 4.5],
            "sleep": [8, 7],
            "energy": [6, 6],
        });
        let signals = DailySignals::from_json_value(value).unwrap();
        assert_eq!(signals.stress, vec![4.0, 4.5]);
    }

    #[test]
    fn test_log_reflection_optional() {
        let log: DailyLog =
            serde_json::from_str(r#"{"day": 0, "mood": 6, "stress": 3, "energy": 7, "sleep": 7.5}"#)
                .unwrap();
        assert!(log.reflection.is_empty());
    }
}
