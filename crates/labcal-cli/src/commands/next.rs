use chrono::NaiveDate;
use clap::Args;
use labcal_core::{CalibrationSchedule, Config, TimeUnit};
use serde_json::json;

use crate::output::format_date;

#[derive(Args)]
pub struct NextArgs {
    /// Initial check date (YYYY-MM-DD), the anchor of the schedule
    #[arg(long)]
    pub initial: NaiveDate,
    /// Number of frequency units between checks
    #[arg(long, allow_negative_numbers = true)]
    pub frequency: i64,
    /// days, weeks, months or years
    #[arg(long)]
    pub frequency_unit: TimeUnit,
    /// Grace period added to the last calibration date
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub tolerance: i64,
    /// days, weeks, months or years
    #[arg(long, default_value = "days")]
    pub tolerance_unit: TimeUnit,
    /// Date the calibration was last performed (defaults to the initial check)
    #[arg(long)]
    pub last: Option<NaiveDate>,
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: NextArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let schedule = CalibrationSchedule {
        initial_check_date: args.initial,
        frequency: args.frequency,
        frequency_unit: args.frequency_unit,
        tolerance: args.tolerance,
        tolerance_unit: args.tolerance_unit,
        last_calibration_date: args.last.unwrap_or(args.initial),
    };

    let next = config.next_due_calculator().compute(&schedule)?;

    if args.json {
        let out = json!({
            "schedule": schedule,
            "deadline": schedule.deadline()?,
            "next_calibration_date": next,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{}", format_date(&config, next));
    }
    Ok(())
}
