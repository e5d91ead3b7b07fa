//! # labcal Core Library
//!
//! Calibration scheduling for laboratory equipment. Given when a calibration
//! plan started, how often it repeats and how much grace it allows, the
//! engine computes the next due date and classifies how urgent it is.
//!
//! ## Architecture
//!
//! - **Schedule**: calendar-aware date increments and the next-due search,
//!   pure functions over plain dates and counts
//! - **Urgency**: classification of a due date as normal, upcoming, warning
//!   or overdue relative to a given day
//! - **Calibration / Window**: record type handed over by calling code and
//!   calendar-month windows for "due this month" listings
//! - **Storage**: TOML configuration and the JSON record file used by the CLI
//!
//! ## Key Components
//!
//! - [`NextDueCalculator`]: bounded search for the next scheduled date
//! - [`UrgencyClassifier`]: severity classification
//! - [`Config`]: application configuration management

pub mod calibration;
pub mod error;
pub mod schedule;
pub mod storage;
pub mod urgency;
pub mod window;

pub use calibration::{CalibrationRecord, CalibrationUpdate};
pub use error::{ConfigError, CoreError, ScheduleError};
pub use schedule::{
    compute_next_calibration_date, first_due_date, shift_date, shift_date_str,
    CalibrationSchedule, NextDueCalculator, NextDueConfig, TimeUnit,
};
pub use storage::{Config, RecordFile};
pub use urgency::{
    classify_calibration_urgency, CalibrationStatus, UrgencyClassifier, UrgencyConfig,
    UrgencyThresholds,
};
pub use window::DueWindow;
