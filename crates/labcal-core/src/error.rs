//! Core error types for labcal-core.
//!
//! Schedule errors are deterministic input-validation failures: they are
//! returned to the immediate caller and never retried.

use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;

use crate::schedule::TimeUnit;

/// Core error type for labcal-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Scheduling and classification errors
    #[error("Schedule error: {0}")]
    Schedule(#[from] ScheduleError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// No calibration record with the requested id
    #[error("Calibration record {id} not found")]
    RecordNotFound { id: u64 },

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised by the date-increment helper, the next-due calculator and
/// the urgency classifier.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// Unit string is not one of days, weeks, months, years
    #[error("Invalid unit '{unit}': must be 'days', 'weeks', 'months' or 'years'")]
    InvalidUnit { unit: String },

    /// Frequency is zero or negative
    #[error("Invalid frequency {frequency}: must be a positive integer")]
    InvalidFrequency { frequency: i64 },

    /// Tolerance is negative
    #[error("Invalid tolerance {tolerance}: must not be negative")]
    InvalidTolerance { tolerance: i64 },

    /// The iterative search hit its cap without passing the deadline
    #[error("No scheduled date found after {max_iterations} iterations")]
    ScheduleUnbounded { max_iterations: u32 },

    /// Shifting a date left chrono's representable range
    #[error("Date out of range: {base} shifted by {amount} {unit}")]
    DateOutOfRange {
        base: NaiveDate,
        unit: TimeUnit,
        amount: i64,
    },
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Key does not exist in the configuration
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schedule_error_messages_name_the_input() {
        let err = ScheduleError::InvalidUnit {
            unit: "fortnights".to_string(),
        };
        assert!(err.to_string().contains("fortnights"));

        let err = ScheduleError::InvalidFrequency { frequency: 0 };
        assert!(err.to_string().contains('0'));
    }

    #[test]
    fn schedule_error_converts_into_core_error() {
        let err: CoreError = ScheduleError::InvalidTolerance { tolerance: -3 }.into();
        assert!(matches!(
            err,
            CoreError::Schedule(ScheduleError::InvalidTolerance { tolerance: -3 })
        ));
    }
}
