//! Date formatting used across pages.

use chrono::{DateTime, NaiveDate};

/// "2026-10-01T08:15:00Z" -> "01 Oct 2026 08:15". Unparseable input is returned as is.
pub fn format_datetime(datetime_str: &str) -> String {
    DateTime::parse_from_rfc3339(datetime_str)
        .map(|dt| dt.format("%d %b %Y %H:%M").to_string())
        .unwrap_or_else(|_| datetime_str.to_string())
}

/// "2026-10-01" (or a full RFC 3339 timestamp) -> "01 Oct 2026".
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .map(|d| d.format("%d %b %Y").to_string())
        .unwrap_or_else(|_| date_str.to_string())
}

/// Forecast period "2026-10" -> "October 2026".
pub fn format_period(period: &str) -> String {
    parse_period(period)
        .map(|d| d.format("%B %Y").to_string())
        .unwrap_or_else(|| period.to_string())
}

/// First day of a `YYYY-MM` period.
pub fn parse_period(period: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{period}-01"), "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_datetime() {
        assert_eq!(format_datetime("2026-10-01T08:15:00Z"), "01 Oct 2026 08:15");
        assert_eq!(
            format_datetime("2026-12-31T23:59:59.123Z"),
            "31 Dec 2026 23:59"
        );
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2026-03-15"), "15 Mar 2026");
        assert_eq!(format_date("2026-03-15T14:02:26Z"), "15 Mar 2026");
    }

    #[test]
    fn test_format_period() {
        assert_eq!(format_period("2026-10"), "October 2026");
        assert_eq!(parse_period("2026-02"), NaiveDate::from_ymd_opt(2026, 2, 1));
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_datetime("invalid"), "invalid");
        assert_eq!(format_date("invalid"), "invalid");
        assert_eq!(format_period("2026-13"), "2026-13");
    }
}
