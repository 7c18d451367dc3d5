//! Human-readable labels for dates and memory usage.

use chrono::{Datelike, NaiveDate, Weekday};
use sysinfo::{Pid, ProcessRefreshKind, RefreshKind, System};

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// The two lines of a date column header: weekday and day of month.
///
/// The first column and every first of the month also carry the month name.
pub fn format_day_header(date: NaiveDate, first_column: bool) -> (String, String) {
    let weekday = date.format("%a").to_string();
    let day = if first_column || date.day() == 1 {
        date.format("%b %-d").to_string()
    } else {
        date.format("%-d").to_string()
    };
    (weekday, day)
}

/// Formats an inclusive date range with its length, e.g. `Jan 23 to Jan 25 (3 nights)`.
pub fn format_date_range(start: NaiveDate, end: NaiveDate) -> String {
    let (start, end) = if start <= end { (start, end) } else { (end, start) };
    let days = (end - start).num_days() + 1;
    let unit = if days == 1 { "day" } else { "days" };
    if start.year() == end.year() {
        format!("{} to {} ({} {})", start.format("%b %-d"), end.format("%b %-d, %Y"), days, unit)
    } else {
        format!("{} to {} ({} {})", start.format("%b %-d, %Y"), end.format("%b %-d, %Y"), days, unit)
    }
}

/// Current process memory usage in megabytes, 0.0 if unavailable.
pub fn get_current_memory_mb() -> f64 {
    let mut sys = System::new_with_specifics(
        RefreshKind::new().with_processes(ProcessRefreshKind::new().with_memory())
    );
    sys.refresh_processes_specifics(ProcessRefreshKind::new().with_memory());

    sys.process(Pid::from_u32(std::process::id()))
        .map(|process| process.memory() as f64 / (1024.0 * 1024.0))
        .unwrap_or(0.0)
}

pub fn format_memory_mb(memory_mb: f64) -> String {
    if memory_mb > 1024.0 {
        format!("Memory: {:.2} GB", memory_mb / 1024.0)
    } else {
        format!("Memory: {:.1} MB", memory_mb)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_weekend_detection() {
        assert!(is_weekend(date("2026-01-24")));
        assert!(is_weekend(date("2026-01-25")));
        assert!(!is_weekend(date("2026-01-26")));
    }

    #[test]
    fn test_day_header_shows_month_on_first_column_and_month_start() {
        assert_eq!(format_day_header(date("2026-01-21"), true), ("Wed".to_string(), "Jan 21".to_string()));
        assert_eq!(format_day_header(date("2026-01-22"), false), ("Thu".to_string(), "22".to_string()));
        assert_eq!(format_day_header(date("2026-02-01"), false), ("Sun".to_string(), "Feb 1".to_string()));
    }

    #[test]
    fn test_date_range_label() {
        assert_eq!(format_date_range(date("2026-01-25"), date("2026-01-23")), "Jan 23 to Jan 25, 2026 (3 days)");
        assert_eq!(format_date_range(date("2026-01-23"), date("2026-01-23")), "Jan 23 to Jan 23, 2026 (1 day)");
        assert_eq!(
            format_date_range(date("2025-12-30"), date("2026-01-02")),
            "Dec 30, 2025 to Jan 2, 2026 (4 days)"
        );
    }

    #[test]
    fn test_format_memory() {
        assert_eq!(format_memory_mb(512.5), "Memory: 512.5 MB");
        assert_eq!(format_memory_mb(2048.0), "Memory: 2.00 GB");
    }
}
