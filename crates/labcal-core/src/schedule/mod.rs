//! Calibration scheduling: units, calendar-aware date shifts and the
//! next-due search.

mod next_due;
mod shift;
mod unit;

pub use next_due::{
    compute_next_calibration_date, first_due_date, CalibrationSchedule, NextDueCalculator,
    NextDueConfig, DEFAULT_MAX_ITERATIONS,
};
pub use shift::{shift_date, shift_date_str};
pub use unit::TimeUnit;
