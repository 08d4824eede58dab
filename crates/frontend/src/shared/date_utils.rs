/// Date helpers for tables and date inputs
///
/// Records carry ISO dates (`YYYY-MM-DD`); tables show `DD-MM-YYYY`.
use chrono::{Local, NaiveDate};
use contracts::shared::form_value::parse_form_date;

/// "2024-03-15" or "2024-03-15T14:02:26Z" -> "15-03-2024"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    match parse_form_date(date_part) {
        Some(date) => date.format("%d-%m-%Y").to_string(),
        None => date_str.to_string(),
    }
}

/// `"-"` for a missing or empty date.
pub fn format_optional_date(date_str: Option<&str>) -> String {
    match date_str {
        Some(d) if !d.trim().is_empty() => format_date(d),
        _ => "-".to_string(),
    }
}

/// Value for `<input type="date">`: always `YYYY-MM-DD`, empty when unset.
pub fn to_input_value(date_str: &str) -> String {
    parse_form_date(date_str.split('T').next().unwrap_or(date_str))
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "15-03-2024");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "15-03-2024");
        assert_eq!(format_date("15-03-2024"), "15-03-2024");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_date("invalid"), "invalid");
        assert_eq!(format_optional_date(Some("  ")), "-");
        assert_eq!(format_optional_date(None), "-");
    }

    #[test]
    fn test_to_input_value() {
        assert_eq!(to_input_value("05-01-2024"), "2024-01-05");
        assert_eq!(to_input_value("2024-01-05T00:00:00"), "2024-01-05");
        assert_eq!(to_input_value(""), "");
    }
}
