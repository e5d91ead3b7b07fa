//! Next calibration due-date calculation.
//!
//! Frequency and tolerance carry independent units (for instance monthly
//! checks with a tolerance in days), so the next date is found by walking the
//! schedule from its anchor rather than by a closed form.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{shift_date, TimeUnit};
use crate::error::ScheduleError;

/// Default cap on schedule steps examined per calculation.
pub const DEFAULT_MAX_ITERATIONS: u32 = 100_000;

/// Schedule parameters of a single calibration plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalibrationSchedule {
    /// Anchor of the recurrence.
    pub initial_check_date: NaiveDate,
    pub frequency: i64,
    pub frequency_unit: TimeUnit,
    /// Grace period added to the last calibration date.
    pub tolerance: i64,
    pub tolerance_unit: TimeUnit,
    /// When calibration was last actually performed.
    pub last_calibration_date: NaiveDate,
}

impl CalibrationSchedule {
    /// Check frequency and tolerance ranges.
    ///
    /// # Errors
    /// [`ScheduleError::InvalidFrequency`] for `frequency <= 0`,
    /// [`ScheduleError::InvalidTolerance`] for `tolerance < 0`.
    pub fn validate(&self) -> Result<(), ScheduleError> {
        if self.frequency <= 0 {
            return Err(ScheduleError::InvalidFrequency {
                frequency: self.frequency,
            });
        }
        if self.tolerance < 0 {
            return Err(ScheduleError::InvalidTolerance {
                tolerance: self.tolerance,
            });
        }
        Ok(())
    }

    /// Last calibration date extended by the tolerance window.
    pub fn deadline(&self) -> Result<NaiveDate, ScheduleError> {
        shift_date(self.last_calibration_date, self.tolerance_unit, self.tolerance)
    }

    /// The `n`-th scheduled date, counted from the anchor.
    pub fn scheduled_date(&self, n: i64) -> Result<NaiveDate, ScheduleError> {
        let amount = self
            .frequency
            .checked_mul(n)
            .ok_or_else(|| ScheduleError::DateOutOfRange {
                base: self.initial_check_date,
                unit: self.frequency_unit,
                amount: self.frequency.saturating_mul(n),
            })?;
        shift_date(self.initial_check_date, self.frequency_unit, amount)
    }
}

/// Configuration for the next-due search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NextDueConfig {
    /// Schedule steps examined before giving up with `ScheduleUnbounded`.
    pub max_iterations: u32,
}

impl Default for NextDueConfig {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

/// Computes next calibration dates.
#[derive(Debug, Clone, Copy, Default)]
pub struct NextDueCalculator {
    config: NextDueConfig,
}

impl NextDueCalculator {
    /// Create a new calculator with default config
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with custom config
    pub fn with_config(config: NextDueConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &NextDueConfig {
        &self.config
    }

    /// Smallest scheduled date strictly after `last + tolerance`.
    ///
    /// Scheduled dates are `initial + frequency * n` for `n = 1, 2, ...`, each
    /// computed from the anchor so month clamping never accumulates.
    ///
    /// # Errors
    /// Validation errors from [`CalibrationSchedule::validate`],
    /// [`ScheduleError::ScheduleUnbounded`] when `max_iterations` steps do not
    /// pass the deadline, and [`ScheduleError::DateOutOfRange`] on overflow.
    pub fn compute(&self, schedule: &CalibrationSchedule) -> Result<NaiveDate, ScheduleError> {
        schedule.validate()?;
        let deadline = schedule.deadline()?;

        for n in 1..=i64::from(self.config.max_iterations) {
            let candidate = schedule.scheduled_date(n)?;
            tracing::trace!(n, %candidate, %deadline, "next-due candidate");
            if candidate > deadline {
                tracing::debug!(
                    iterations = n,
                    next = %candidate,
                    %deadline,
                    "computed next calibration date"
                );
                return Ok(candidate);
            }
        }

        tracing::warn!(
            max_iterations = self.config.max_iterations,
            initial = %schedule.initial_check_date,
            %deadline,
            "next-due search exhausted its iteration cap"
        );
        Err(ScheduleError::ScheduleUnbounded {
            max_iterations: self.config.max_iterations,
        })
    }
}

/// Compute the next calibration date with the default configuration.
///
/// # Errors
/// See [`NextDueCalculator::compute`].
pub fn compute_next_calibration_date(
    schedule: &CalibrationSchedule,
) -> Result<NaiveDate, ScheduleError> {
    NextDueCalculator::new().compute(schedule)
}

/// Date exactly one frequency step past the anchor.
///
/// Used when a calibration plan is created and nothing has been performed yet.
///
/// # Errors
/// [`ScheduleError::InvalidFrequency`] for `frequency <= 0`.
pub fn first_due_date(
    initial_check_date: NaiveDate,
    frequency: i64,
    frequency_unit: TimeUnit,
) -> Result<NaiveDate, ScheduleError> {
    if frequency <= 0 {
        return Err(ScheduleError::InvalidFrequency { frequency });
    }
    shift_date(initial_check_date, frequency_unit, frequency)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn monthly(initial: NaiveDate, last: NaiveDate, tolerance_days: i64) -> CalibrationSchedule {
        CalibrationSchedule {
            initial_check_date: initial,
            frequency: 1,
            frequency_unit: TimeUnit::Months,
            tolerance: tolerance_days,
            tolerance_unit: TimeUnit::Days,
            last_calibration_date: last,
        }
    }

    #[test]
    fn first_step_past_deadline_is_returned() {
        let schedule = monthly(d(2023, 1, 1), d(2023, 1, 1), 5);
        assert_eq!(schedule.deadline().unwrap(), d(2023, 1, 6));
        assert_eq!(compute_next_calibration_date(&schedule).unwrap(), d(2023, 2, 1));
    }

    #[test]
    fn candidates_clamp_at_month_end() {
        let schedule = monthly(d(2023, 1, 31), d(2023, 1, 31), 0);
        assert_eq!(schedule.scheduled_date(1).unwrap(), d(2023, 2, 28));
        assert_eq!(compute_next_calibration_date(&schedule).unwrap(), d(2023, 2, 28));
    }

    #[test]
    fn clamping_does_not_drift_across_steps() {
        // Feb 28 must not become the new day-of-month for March.
        let schedule = monthly(d(2023, 1, 31), d(2023, 3, 1), 0);
        assert_eq!(compute_next_calibration_date(&schedule).unwrap(), d(2023, 3, 31));
    }

    #[test]
    fn late_calibration_skips_missed_slots() {
        let schedule = monthly(d(2023, 1, 1), d(2023, 4, 15), 5);
        assert_eq!(compute_next_calibration_date(&schedule).unwrap(), d(2023, 5, 1));
    }

    #[test]
    fn tolerance_can_push_past_the_next_slot() {
        // Calibrated on the scheduled day with a 1 month grace: the slot one
        // month later equals the deadline and is not strictly after it.
        let schedule = CalibrationSchedule {
            initial_check_date: d(2023, 1, 1),
            frequency: 1,
            frequency_unit: TimeUnit::Months,
            tolerance: 1,
            tolerance_unit: TimeUnit::Months,
            last_calibration_date: d(2023, 2, 1),
        };
        assert_eq!(compute_next_calibration_date(&schedule).unwrap(), d(2023, 4, 1));
    }

    #[test]
    fn weekly_and_yearly_units() {
        let weekly = CalibrationSchedule {
            initial_check_date: d(2024, 1, 1),
            frequency: 2,
            frequency_unit: TimeUnit::Weeks,
            tolerance: 3,
            tolerance_unit: TimeUnit::Days,
            last_calibration_date: d(2024, 1, 20),
        };
        assert_eq!(compute_next_calibration_date(&weekly).unwrap(), d(2024, 1, 29));

        let yearly = CalibrationSchedule {
            initial_check_date: d(2020, 2, 29),
            frequency: 1,
            frequency_unit: TimeUnit::Years,
            tolerance: 2,
            tolerance_unit: TimeUnit::Weeks,
            last_calibration_date: d(2023, 3, 1),
        };
        assert_eq!(compute_next_calibration_date(&yearly).unwrap(), d(2024, 2, 29));
    }

    #[test]
    fn last_before_initial_yields_first_step() {
        let schedule = monthly(d(2023, 6, 1), d(2023, 1, 1), 0);
        assert_eq!(compute_next_calibration_date(&schedule).unwrap(), d(2023, 7, 1));
    }

    #[test]
    fn zero_frequency_is_rejected() {
        let mut schedule = monthly(d(2023, 1, 1), d(2023, 1, 1), 5);
        schedule.frequency = 0;
        assert_eq!(
            compute_next_calibration_date(&schedule),
            Err(ScheduleError::InvalidFrequency { frequency: 0 })
        );
    }

    #[test]
    fn negative_inputs_are_rejected() {
        let mut schedule = monthly(d(2023, 1, 1), d(2023, 1, 1), 5);
        schedule.frequency = -2;
        assert_eq!(
            compute_next_calibration_date(&schedule),
            Err(ScheduleError::InvalidFrequency { frequency: -2 })
        );

        let schedule = monthly(d(2023, 1, 1), d(2023, 1, 1), -1);
        assert_eq!(
            compute_next_calibration_date(&schedule),
            Err(ScheduleError::InvalidTolerance { tolerance: -1 })
        );
    }

    #[test]
    fn step_overflow_reports_attempted_amount() {
        let mut schedule = monthly(d(2023, 1, 1), d(2023, 1, 1), 0);
        schedule.frequency = i64::MAX / 2 + 1;
        assert_eq!(
            schedule.scheduled_date(2),
            Err(ScheduleError::DateOutOfRange {
                base: d(2023, 1, 1),
                unit: TimeUnit::Months,
                amount: i64::MAX,
            })
        );
    }

    #[test]
    fn iteration_cap_reports_unbounded() {
        let schedule = CalibrationSchedule {
            initial_check_date: d(2000, 1, 1),
            frequency: 1,
            frequency_unit: TimeUnit::Days,
            tolerance: 50,
            tolerance_unit: TimeUnit::Years,
            last_calibration_date: d(2000, 1, 1),
        };
        let calculator = NextDueCalculator::with_config(NextDueConfig { max_iterations: 100 });
        assert_eq!(
            calculator.compute(&schedule),
            Err(ScheduleError::ScheduleUnbounded { max_iterations: 100 })
        );

        // The default cap is wide enough for the same schedule.
        assert_eq!(
            compute_next_calibration_date(&schedule).unwrap(),
            d(2050, 1, 2)
        );
    }

    #[test]
    fn first_due_date_is_one_step_past_anchor() {
        assert_eq!(first_due_date(d(2023, 1, 31), 1, TimeUnit::Months).unwrap(), d(2023, 2, 28));
        assert_eq!(first_due_date(d(2023, 1, 1), 6, TimeUnit::Weeks).unwrap(), d(2023, 2, 12));
        assert_eq!(
            first_due_date(d(2023, 1, 1), 0, TimeUnit::Days),
            Err(ScheduleError::InvalidFrequency { frequency: 0 })
        );
    }
}
