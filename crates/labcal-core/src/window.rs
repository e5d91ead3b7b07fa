//! Calendar-month windows for listing calibrations that fall due.

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::calibration::CalibrationRecord;

/// Inclusive date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DueWindow {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DueWindow {
    /// First to last day of the month containing `date`.
    pub fn month_of(date: NaiveDate) -> Option<Self> {
        let from = date.with_day(1)?;
        let to = from.checked_add_months(Months::new(1))?.pred_opt()?;
        Some(Self { from, to })
    }

    pub fn this_month(today: NaiveDate) -> Option<Self> {
        Self::month_of(today)
    }

    /// The calendar month after `today`'s, rolling over into January.
    pub fn next_month(today: NaiveDate) -> Option<Self> {
        let first = today.with_day(1)?.checked_add_months(Months::new(1))?;
        Self::month_of(first)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from <= date && date <= self.to
    }

    /// Records whose stored next calibration date lies in the window.
    pub fn select<'a>(&self, records: &'a [CalibrationRecord]) -> Vec<&'a CalibrationRecord> {
        records
            .iter()
            .filter(|r| r.next_calibration_date.is_some_and(|next| self.contains(next)))
            .collect()
    }

    /// Month label such as `June-2024`.
    pub fn label(&self) -> String {
        self.from.format("%B-%Y").to_string()
    }
}
