//! Formatting and parsing helpers for task fields shown in the terminal.

use chrono::{DateTime, Local, NaiveDate};

pub const DUE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Renders epoch milliseconds as local `YYYY-MM-DD HH:MM`, or an empty string when out of range.
pub fn format_timestamp(millis: i64) -> String {
    DateTime::from_timestamp_millis(millis)
        .map(|utc| utc.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_default()
}

pub fn format_status(is_completed: bool) -> &'static str {
    if is_completed {
        "✔ done"
    } else {
        "○ pending"
    }
}

/// Checks a `YYYY-MM-DD` due date and returns it in canonical form.
pub fn parse_due_date(value: &str) -> Option<String> {
    NaiveDate::parse_from_str(value.trim(), DUE_DATE_FORMAT)
        .ok()
        .map(|date| date.format(DUE_DATE_FORMAT).to_string())
}

pub fn today() -> String {
    Local::now().date_naive().format(DUE_DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn due_dates_are_validated() {
        assert_eq!(parse_due_date(" 2025-03-07 "), Some("2025-03-07".to_string()));
        assert_eq!(parse_due_date("2025-02-30"), None);
        assert_eq!(parse_due_date("tomorrow"), None);
    }

    #[test]
    fn out_of_range_timestamp_is_blank() {
        assert_eq!(format_timestamp(i64::MAX), "");
        assert!(!format_timestamp(0).is_empty());
    }
}
