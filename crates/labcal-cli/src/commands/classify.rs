use chrono::NaiveDate;
use clap::Args;
use labcal_core::{Config, TimeUnit};
use serde_json::json;

use crate::output::{status_color, today_or};

#[derive(Args)]
pub struct ClassifyArgs {
    /// Next calibration due date (YYYY-MM-DD)
    #[arg(long)]
    pub next: NaiveDate,
    /// Tolerance window size
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub tolerance: i64,
    /// days, weeks, months or years
    #[arg(long, default_value = "days")]
    pub tolerance_unit: TimeUnit,
    /// Classify as of this date instead of today
    #[arg(long)]
    pub today: Option<NaiveDate>,
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: ClassifyArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let classifier = config.urgency_classifier();
    let today = today_or(args.today);

    let status = classifier.classify(args.next, args.tolerance, args.tolerance_unit, today)?;

    if args.json {
        let thresholds = classifier.thresholds(args.tolerance, args.tolerance_unit, today)?;
        let out = json!({
            "today": today,
            "next_calibration_date": args.next,
            "status": status,
            "color": status_color(status),
            "thresholds": thresholds,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else if config.display.show_colors {
        println!("{status} ({})", status_color(status));
    } else {
        println!("{status}");
    }
    Ok(())
}
