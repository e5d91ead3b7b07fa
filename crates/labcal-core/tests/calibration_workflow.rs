//! Integration tests for the calibration lifecycle: plan, classify, record.

use chrono::NaiveDate;
use labcal_core::{
    classify_calibration_urgency, compute_next_calibration_date, CalibrationRecord,
    CalibrationSchedule, CalibrationStatus, Config, DueWindow, NextDueCalculator, RecordFile,
    ScheduleError, TimeUnit,
};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[test]
fn monthly_plan_with_five_day_tolerance() {
    let schedule = CalibrationSchedule {
        initial_check_date: d(2023, 1, 1),
        frequency: 1,
        frequency_unit: TimeUnit::Months,
        tolerance: 5,
        tolerance_unit: TimeUnit::Days,
        last_calibration_date: d(2023, 1, 1),
    };
    assert_eq!(compute_next_calibration_date(&schedule).unwrap(), d(2023, 2, 1));
}

#[test]
fn month_end_anchor_is_clamped() {
    let schedule = CalibrationSchedule {
        initial_check_date: d(2023, 1, 31),
        frequency: 1,
        frequency_unit: TimeUnit::Months,
        tolerance: 0,
        tolerance_unit: TimeUnit::Days,
        last_calibration_date: d(2023, 1, 31),
    };
    assert_eq!(schedule.scheduled_date(1).unwrap(), d(2023, 2, 28));
}

#[test]
fn zero_frequency_fails() {
    let schedule = CalibrationSchedule {
        initial_check_date: d(2023, 1, 1),
        frequency: 0,
        frequency_unit: TimeUnit::Days,
        tolerance: 0,
        tolerance_unit: TimeUnit::Days,
        last_calibration_date: d(2023, 1, 1),
    };
    assert_eq!(
        compute_next_calibration_date(&schedule),
        Err(ScheduleError::InvalidFrequency { frequency: 0 })
    );
}

#[test]
fn classifier_scenarios() {
    let today = d(2024, 6, 1);
    assert_eq!(
        classify_calibration_urgency(d(2024, 6, 20), 10, TimeUnit::Days, today).unwrap(),
        CalibrationStatus::Upcoming
    );
    assert_eq!(
        classify_calibration_urgency(d(2024, 6, 5), 10, TimeUnit::Days, today).unwrap(),
        CalibrationStatus::Warning
    );
}

#[test]
fn full_lifecycle_through_a_record_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("calibrations.json");

    let mut thermometer = CalibrationRecord::new(
        1,
        "Reference thermometer",
        d(2024, 1, 15),
        6,
        TimeUnit::Months,
        2,
        TimeUnit::Weeks,
    )
    .unwrap();
    thermometer.department = "Chemistry".into();
    let centrifuge = CalibrationRecord::new(
        2,
        "Centrifuge",
        d(2024, 5, 1),
        1,
        TimeUnit::Years,
        1,
        TimeUnit::Months,
    )
    .unwrap();
    std::fs::write(
        &path,
        serde_json::to_string_pretty(&vec![thermometer, centrifuge]).unwrap(),
    )
    .unwrap();

    let config = Config::default();
    let calculator = config.next_due_calculator();
    let classifier = config.urgency_classifier();

    let mut file = RecordFile::open(&path).unwrap();
    let today = d(2024, 7, 10);

    // Thermometer is due 2024-07-15: inside the two-week tolerance.
    let status = file.records()[0].status(today, &calculator, &classifier).unwrap();
    assert_eq!(status, CalibrationStatus::Warning);

    let july = DueWindow::this_month(today).unwrap();
    assert_eq!(july.select(file.records()).len(), 1);

    let update = file
        .get_mut(1)
        .unwrap()
        .record_calibration(today, &calculator)
        .unwrap();
    assert_eq!(update.previous_next_date, Some(d(2024, 7, 15)));
    assert_eq!(update.next_calibration_date, d(2025, 1, 15));
    file.save().unwrap();

    let reopened = RecordFile::open(&path).unwrap();
    let status = reopened.records()[0].status(today, &calculator, &classifier).unwrap();
    assert_eq!(status, CalibrationStatus::Normal);
    assert!(july.select(reopened.records()).is_empty());
}

#[test]
fn planning_rewrites_stale_next_dates() {
    let mut record = CalibrationRecord::new(
        5,
        "Spectrometer",
        d(2022, 3, 10),
        3,
        TimeUnit::Months,
        10,
        TimeUnit::Days,
    )
    .unwrap();
    record.last_calibration_date = d(2023, 3, 15);
    let next = record.plan(&NextDueCalculator::new()).unwrap();
    assert_eq!(next, d(2023, 6, 10));
    assert_eq!(record.next_calibration_date, Some(next));
}
