//! Urgency classification of a calibration's next-due date.
//!
//! Three thresholds are derived from "today" and the tolerance window. Each
//! one a due date falls before raises a candidate status, and the most
//! severe candidate wins.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;
use crate::schedule::{shift_date, TimeUnit};

/// Default look-ahead for the `upcoming` status.
pub const DEFAULT_HORIZON_DAYS: i64 = 30;

/// Largest look-ahead accepted from configuration (about a century).
pub const MAX_HORIZON_DAYS: i64 = 36_500;

/// Display status of a calibration, ordered by severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalibrationStatus {
    Normal,
    Upcoming,
    Warning,
    Overdue,
}

impl CalibrationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CalibrationStatus::Normal => "normal",
            CalibrationStatus::Upcoming => "upcoming",
            CalibrationStatus::Warning => "warning",
            CalibrationStatus::Overdue => "overdue",
        }
    }

    /// 0 for `normal` up to 3 for `overdue`.
    pub fn severity(&self) -> u8 {
        *self as u8
    }
}

impl fmt::Display for CalibrationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CalibrationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "normal" => Ok(CalibrationStatus::Normal),
            "upcoming" => Ok(CalibrationStatus::Upcoming),
            "warning" => Ok(CalibrationStatus::Warning),
            "overdue" => Ok(CalibrationStatus::Overdue),
            other => Err(format!("unknown calibration status: {other}")),
        }
    }
}

/// Threshold dates for one classification day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrgencyThresholds {
    /// `today + horizon_days`
    pub horizon: NaiveDate,
    /// `today + tolerance`
    pub tolerance_deadline: NaiveDate,
    /// `today - tolerance`
    pub expiry_point: NaiveDate,
}

impl UrgencyThresholds {
    /// Most severe status whose threshold `next` falls strictly before.
    pub fn status_of(&self, next: NaiveDate) -> CalibrationStatus {
        [
            (CalibrationStatus::Upcoming, self.horizon),
            (CalibrationStatus::Warning, self.tolerance_deadline),
            (CalibrationStatus::Overdue, self.expiry_point),
        ]
        .into_iter()
        .filter(|(_, threshold)| next < *threshold)
        .map(|(status, _)| status)
        .max()
        .unwrap_or(CalibrationStatus::Normal)
    }
}

/// Configuration for urgency classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrgencyConfig {
    /// Look-ahead window in days for `upcoming`.
    pub horizon_days: i64,
}

impl Default for UrgencyConfig {
    fn default() -> Self {
        Self {
            horizon_days: DEFAULT_HORIZON_DAYS,
        }
    }
}

/// Classifies next-due dates relative to a given day.
#[derive(Debug, Clone, Copy, Default)]
pub struct UrgencyClassifier {
    config: UrgencyConfig,
}

impl UrgencyClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: UrgencyConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &UrgencyConfig {
        &self.config
    }

    /// Compute the three threshold dates for `today`.
    ///
    /// # Errors
    /// [`ScheduleError::InvalidTolerance`] for a negative tolerance and
    /// [`ScheduleError::DateOutOfRange`] near the ends of the date range.
    pub fn thresholds(
        &self,
        tolerance: i64,
        tolerance_unit: TimeUnit,
        today: NaiveDate,
    ) -> Result<UrgencyThresholds, ScheduleError> {
        if tolerance < 0 {
            return Err(ScheduleError::InvalidTolerance { tolerance });
        }
        Ok(UrgencyThresholds {
            horizon: shift_date(today, TimeUnit::Days, self.config.horizon_days)?,
            tolerance_deadline: shift_date(today, tolerance_unit, tolerance)?,
            expiry_point: shift_date(today, tolerance_unit, -tolerance)?,
        })
    }

    /// Classify `next_calibration_date` as seen on `today`.
    ///
    /// # Errors
    /// See [`UrgencyClassifier::thresholds`].
    pub fn classify(
        &self,
        next_calibration_date: NaiveDate,
        tolerance: i64,
        tolerance_unit: TimeUnit,
        today: NaiveDate,
    ) -> Result<CalibrationStatus, ScheduleError> {
        let thresholds = self.thresholds(tolerance, tolerance_unit, today)?;
        let status = thresholds.status_of(next_calibration_date);
        tracing::debug!(
            next = %next_calibration_date,
            %today,
            status = status.as_str(),
            "classified calibration urgency"
        );
        Ok(status)
    }

    /// Like [`UrgencyClassifier::classify`], with the tolerance unit by name.
    ///
    /// # Errors
    /// [`ScheduleError::InvalidUnit`] for an unrecognized unit name.
    pub fn classify_str(
        &self,
        next_calibration_date: NaiveDate,
        tolerance: i64,
        tolerance_unit: &str,
        today: NaiveDate,
    ) -> Result<CalibrationStatus, ScheduleError> {
        self.classify(next_calibration_date, tolerance, tolerance_unit.parse()?, today)
    }
}

/// Classify with the default 30-day horizon.
///
/// # Errors
/// See [`UrgencyClassifier::classify`].
pub fn classify_calibration_urgency(
    next_calibration_date: NaiveDate,
    tolerance: i64,
    tolerance_unit: TimeUnit,
    today: NaiveDate,
) -> Result<CalibrationStatus, ScheduleError> {
    UrgencyClassifier::new().classify(next_calibration_date, tolerance, tolerance_unit, today)
}
