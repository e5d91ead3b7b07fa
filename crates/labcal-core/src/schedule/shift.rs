//! Calendar-aware date increments.
//!
//! Month and year shifts keep the day-of-month when the target month has it
//! and clamp to the month's last day otherwise (Jan 31 + 1 month = Feb 28/29).

use chrono::{Days, Months, NaiveDate};

use super::TimeUnit;
use crate::error::ScheduleError;

/// Shift `base` by `n` units. Negative `n` shifts backwards.
///
/// # Errors
/// Returns [`ScheduleError::DateOutOfRange`] when the result (or the scaled
/// count) does not fit chrono's date range.
pub fn shift_date(base: NaiveDate, unit: TimeUnit, n: i64) -> Result<NaiveDate, ScheduleError> {
    let out_of_range = || ScheduleError::DateOutOfRange {
        base,
        unit,
        amount: n,
    };

    let shifted = match unit {
        TimeUnit::Days | TimeUnit::Weeks => {
            let per_unit = if unit == TimeUnit::Weeks { 7 } else { 1 };
            let days = n.checked_mul(per_unit).ok_or_else(out_of_range)?;
            let step = Days::new(days.unsigned_abs());
            if days >= 0 {
                base.checked_add_days(step)
            } else {
                base.checked_sub_days(step)
            }
        }
        TimeUnit::Months | TimeUnit::Years => {
            let per_unit = if unit == TimeUnit::Years { 12 } else { 1 };
            let months = n.checked_mul(per_unit).ok_or_else(out_of_range)?;
            let step = u32::try_from(months.unsigned_abs())
                .map(Months::new)
                .map_err(|_| out_of_range())?;
            if months >= 0 {
                base.checked_add_months(step)
            } else {
                base.checked_sub_months(step)
            }
        }
    };

    shifted.ok_or_else(out_of_range)
}

/// Like [`shift_date`], with the unit given by name.
///
/// # Errors
/// Returns [`ScheduleError::InvalidUnit`] when `unit` is not one of
/// `days`, `weeks`, `months`, `years`.
pub fn shift_date_str(base: NaiveDate, unit: &str, n: i64) -> Result<NaiveDate, ScheduleError> {
    shift_date(base, unit.parse()?, n)
}
