//! Calibration records as handed to the engine by calling code.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;
use crate::schedule::{first_due_date, CalibrationSchedule, NextDueCalculator, TimeUnit};
use crate::urgency::{CalibrationStatus, UrgencyClassifier};

/// A piece of equipment on a calibration plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalibrationRecord {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub apparatus: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub department: String,
    pub initial_check_date: NaiveDate,
    pub frequency: i64,
    pub frequency_unit: TimeUnit,
    #[serde(default)]
    pub tolerance: i64,
    #[serde(default = "default_tolerance_unit")]
    pub tolerance_unit: TimeUnit,
    pub last_calibration_date: NaiveDate,
    #[serde(default)]
    pub next_calibration_date: Option<NaiveDate>,
    #[serde(default)]
    pub notes: String,
}

fn default_tolerance_unit() -> TimeUnit {
    TimeUnit::Days
}

/// Outcome of recording a performed calibration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalibrationUpdate {
    pub id: u64,
    pub last_calibration_date: NaiveDate,
    pub previous_next_date: Option<NaiveDate>,
    pub next_calibration_date: NaiveDate,
}

impl CalibrationRecord {
    /// Create a plan whose first due date is one frequency step past the
    /// initial check, with nothing performed yet beyond that check.
    ///
    /// # Errors
    /// [`ScheduleError::InvalidFrequency`] or [`ScheduleError::InvalidTolerance`].
    pub fn new(
        id: u64,
        name: impl Into<String>,
        initial_check_date: NaiveDate,
        frequency: i64,
        frequency_unit: TimeUnit,
        tolerance: i64,
        tolerance_unit: TimeUnit,
    ) -> Result<Self, ScheduleError> {
        if tolerance < 0 {
            return Err(ScheduleError::InvalidTolerance { tolerance });
        }
        let next = first_due_date(initial_check_date, frequency, frequency_unit)?;
        Ok(Self {
            id,
            name: name.into(),
            apparatus: String::new(),
            description: String::new(),
            department: String::new(),
            initial_check_date,
            frequency,
            frequency_unit,
            tolerance,
            tolerance_unit,
            last_calibration_date: initial_check_date,
            next_calibration_date: Some(next),
            notes: String::new(),
        })
    }

    pub fn schedule(&self) -> CalibrationSchedule {
        CalibrationSchedule {
            initial_check_date: self.initial_check_date,
            frequency: self.frequency,
            frequency_unit: self.frequency_unit,
            tolerance: self.tolerance,
            tolerance_unit: self.tolerance_unit,
            last_calibration_date: self.last_calibration_date,
        }
    }

    /// Recompute and store the next calibration date from the stored fields.
    pub fn plan(&mut self, calculator: &NextDueCalculator) -> Result<NaiveDate, ScheduleError> {
        let next = calculator.compute(&self.schedule())?;
        self.next_calibration_date = Some(next);
        Ok(next)
    }

    /// Record a calibration performed on `performed_on` and reschedule.
    ///
    /// The record is left untouched when rescheduling fails.
    pub fn record_calibration(
        &mut self,
        performed_on: NaiveDate,
        calculator: &NextDueCalculator,
    ) -> Result<CalibrationUpdate, ScheduleError> {
        let mut schedule = self.schedule();
        schedule.last_calibration_date = performed_on;
        let next = calculator.compute(&schedule)?;

        let previous_next_date = self.next_calibration_date.replace(next);
        self.last_calibration_date = performed_on;
        tracing::info!(
            id = self.id,
            name = %self.name,
            performed_on = %performed_on,
            next = %next,
            "recorded calibration"
        );
        Ok(CalibrationUpdate {
            id: self.id,
            last_calibration_date: performed_on,
            previous_next_date,
            next_calibration_date: next,
        })
    }

    /// Stored next date, or a freshly computed one when none is stored.
    pub fn next_due(&self, calculator: &NextDueCalculator) -> Result<NaiveDate, ScheduleError> {
        match self.next_calibration_date {
            Some(next) => Ok(next),
            None => calculator.compute(&self.schedule()),
        }
    }

    /// Urgency of this record's next date as seen on `today`.
    pub fn status(
        &self,
        today: NaiveDate,
        calculator: &NextDueCalculator,
        classifier: &UrgencyClassifier,
    ) -> Result<CalibrationStatus, ScheduleError> {
        let next = self.next_due(calculator)?;
        classifier.classify(next, self.tolerance, self.tolerance_unit, today)
    }
}
