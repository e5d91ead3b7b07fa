use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Subcommand, ValueEnum};
use labcal_core::{CalibrationRecord, CalibrationStatus, Config, DueWindow, RecordFile};
use serde::Serialize;

use crate::output::{format_date, status_color, today_or};

#[derive(Subcommand)]
pub enum CalibrationAction {
    /// List records with their next date and urgency
    List {
        /// JSON file holding an array of calibration records
        #[arg(long)]
        file: PathBuf,
        /// Classify as of this date instead of today
        #[arg(long)]
        today: Option<NaiveDate>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Recompute every record's next calibration date
    Plan {
        #[arg(long)]
        file: PathBuf,
        /// Write the recomputed dates back to the file
        #[arg(long)]
        write: bool,
    },
    /// Record a calibration as performed and reschedule it
    Mark {
        /// Record id
        id: u64,
        #[arg(long)]
        file: PathBuf,
        /// Date the calibration was performed (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// List records falling due in a calendar month
    Due {
        /// Which month to list
        #[arg(value_enum)]
        window: MonthWindow,
        #[arg(long)]
        file: PathBuf,
        /// Take "this month" relative to this date instead of today
        #[arg(long)]
        today: Option<NaiveDate>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum MonthWindow {
    ThisMonth,
    NextMonth,
}

#[derive(Serialize)]
struct StatusRow<'a> {
    id: u64,
    name: &'a str,
    department: &'a str,
    next_calibration_date: NaiveDate,
    status: CalibrationStatus,
    color: &'static str,
}

pub fn run(action: CalibrationAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let calculator = config.next_due_calculator();

    match action {
        CalibrationAction::List { file, today, json } => {
            let records = RecordFile::open(&file)?;
            let classifier = config.urgency_classifier();
            let today = today_or(today);

            let mut rows = Vec::with_capacity(records.records().len());
            for record in records.records() {
                let next = record.next_due(&calculator)?;
                let status =
                    classifier.classify(next, record.tolerance, record.tolerance_unit, today)?;
                rows.push(StatusRow {
                    id: record.id,
                    name: &record.name,
                    department: &record.department,
                    next_calibration_date: next,
                    status,
                    color: status_color(status),
                });
            }

            if json {
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                for row in &rows {
                    let mut line = format!(
                        "{:>4}  {:<30}  {}  {:<8}",
                        row.id,
                        row.name,
                        format_date(&config, row.next_calibration_date),
                        row.status
                    );
                    if config.display.show_colors {
                        line.push_str(&format!("  {}", row.color));
                    }
                    println!("{}", line.trim_end());
                }
            }
        }
        CalibrationAction::Plan { file, write } => {
            let mut records = RecordFile::open(&file)?;
            for record in records.records_mut() {
                let previous = record.next_calibration_date;
                let next = record.plan(&calculator)?;
                if previous != Some(next) {
                    println!(
                        "{}: {} -> {}",
                        record.id,
                        previous
                            .map(|d| format_date(&config, d))
                            .unwrap_or_else(|| "-".to_string()),
                        format_date(&config, next)
                    );
                }
            }
            if write {
                records.save()?;
                println!("saved {}", records.path().display());
            }
        }
        CalibrationAction::Mark { id, file, date } => {
            let mut records = RecordFile::open(&file)?;
            let performed_on = today_or(date);
            let update = records.get_mut(id)?.record_calibration(performed_on, &calculator)?;
            records.save()?;
            println!(
                "calibration {} recorded (last: {}, next: {})",
                update.id,
                format_date(&config, update.last_calibration_date),
                format_date(&config, update.next_calibration_date)
            );
        }
        CalibrationAction::Due {
            window,
            file,
            today,
            json,
        } => {
            let records = RecordFile::open(&file)?;
            let today = today_or(today);
            let window = match window {
                MonthWindow::ThisMonth => DueWindow::this_month(today),
                MonthWindow::NextMonth => DueWindow::next_month(today),
            }
            .ok_or("month window out of range")?;
            let due: Vec<&CalibrationRecord> = window.select(records.records());

            if json {
                println!("{}", serde_json::to_string_pretty(&due)?);
            } else if due.is_empty() {
                println!("No calibrations due in {}", window.label());
            } else {
                println!("Calibrations {}", window.label());
                for record in due {
                    if let Some(next) = record.next_calibration_date {
                        println!(
                            "{:>4}  {:<30}  {}",
                            record.id,
                            record.name,
                            format_date(&config, next)
                        );
                    }
                }
            }
        }
    }
    Ok(())
}
