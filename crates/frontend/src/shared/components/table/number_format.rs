//! Number formatting for table cells and stat cards.

/// Thousands separated with ',' and rounded to `decimals` (max 3),
/// so `1234.567` with 2 decimals becomes "1,234.57".
pub fn format_number_with_decimals(value: f64, decimals: u8) -> String {
    let formatted = format!("{:.prec$}", value, prec = decimals.min(3) as usize);

    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (formatted.as_str(), None),
    };

    let mut result = String::new();
    for (i, c) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 && c != '-' {
            result.push(',');
        }
        result.push(c);
    }
    let formatted_integer: String = result.chars().rev().collect();

    match decimal_part {
        Some(d) => format!("{}.{}", formatted_integer, d),
        None => formatted_integer,
    }
}

pub fn format_number_int(value: f64) -> String {
    format_number_with_decimals(value, 0)
}

/// Labor hours with one decimal: "12,480.5".
pub fn format_hours(value: f64) -> String {
    format_number_with_decimals(value, 1)
}

/// Leading sign on positive values: "+340.0", "-12.5".
pub fn format_signed_hours(value: f64) -> String {
    let text = format_hours(value);
    if value > 0.0 {
        format!("+{text}")
    } else {
        text
    }
}

/// "+4.2%", em dash when there is no percentage.
pub fn format_signed_percent(value: Option<f64>) -> String {
    match value {
        Some(v) if v > 0.0 => format!("+{:.1}%", v),
        Some(v) => format!("{:.1}%", v),
        None => "\u{2014}".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(1234.567, 0), "1,235");
        assert_eq!(format_number_with_decimals(1234.567, 1), "1,234.6");
        assert_eq!(format_number_with_decimals(1234.567, 2), "1,234.57");
        assert_eq!(format_number_with_decimals(1234.567, 3), "1,234.567");
    }

    #[test]
    fn test_format_number_int() {
        assert_eq!(format_number_int(1234567.0), "1,234,567");
        assert_eq!(format_number_int(0.0), "0");
        assert_eq!(format_number_int(-1234.0), "-1,234");
        assert_eq!(format_number_int(-123.0), "-123");
    }

    #[test]
    fn test_format_hours() {
        assert_eq!(format_hours(12480.5), "12,480.5");
        assert_eq!(format_signed_hours(340.0), "+340.0");
        assert_eq!(format_signed_hours(-12.5), "-12.5");
        assert_eq!(format_signed_hours(0.0), "0.0");
    }

    #[test]
    fn test_format_signed_percent() {
        assert_eq!(format_signed_percent(Some(4.26)), "+4.3%");
        assert_eq!(format_signed_percent(Some(-10.0)), "-10.0%");
        assert_eq!(format_signed_percent(None), "\u{2014}");
    }
}
