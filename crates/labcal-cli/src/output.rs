//! Presentation helpers shared by the commands.

use chrono::NaiveDate;
use labcal_core::{CalibrationStatus, Config};

/// Display color of a status, as used by the inventory front-end.
pub fn status_color(status: CalibrationStatus) -> &'static str {
    match status {
        CalibrationStatus::Upcoming => "lightgreen",
        CalibrationStatus::Warning => "orange",
        CalibrationStatus::Overdue => "red",
        CalibrationStatus::Normal => "white",
    }
}

/// Format a date with the configured pattern.
pub fn format_date(config: &Config, date: NaiveDate) -> String {
    date.format(&config.display.date_format).to_string()
}

/// `today` unless the caller pinned a date.
pub fn today_or(date: Option<NaiveDate>) -> NaiveDate {
    date.unwrap_or_else(|| chrono::Local::now().date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_status_has_a_color() {
        assert_eq!(status_color(CalibrationStatus::Upcoming), "lightgreen");
        assert_eq!(status_color(CalibrationStatus::Warning), "orange");
        assert_eq!(status_color(CalibrationStatus::Overdue), "red");
        assert_eq!(status_color(CalibrationStatus::Normal), "white");
    }

    #[test]
    fn dates_follow_configured_format() {
        let mut config = Config::default();
        let date = NaiveDate::from_ymd_opt(2024, 6, 5).unwrap();
        assert_eq!(format_date(&config, date), "2024-06-05");
        config.display.date_format = "%d/%m/%Y".into();
        assert_eq!(format_date(&config, date), "05/06/2024");
    }

    #[test]
    fn pinned_today_wins() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 5).unwrap();
        assert_eq!(today_or(Some(date)), date);
    }
}
