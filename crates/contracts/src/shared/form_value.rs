//! Helpers for reading loosely typed form values.
//!
//! Form inputs deliver strings. Amounts are kept as `Option<f64>` and a
//! value of `0` counts as "not filled in", the same way the forms have
//! always treated an untouched numeric input.

use chrono::NaiveDate;

/// Parse a calendar date from a form value.
///
/// Accepts `YYYY-MM-DD` (date inputs, optionally followed by a time part)
/// and `DD-MM-YYYY` (dates rendered by the backend). Anything else is `None`.
pub fn parse_form_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    let date_part = value.split('T').next().unwrap_or(value);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(date_part, "%d-%m-%Y"))
        .ok()
}

pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// `true` when an amount is present and non-zero.
pub fn is_set(value: Option<f64>) -> bool {
    matches!(value, Some(v) if v != 0.0 && !v.is_nan())
}

/// Amount used in comparisons; missing values compare as zero.
pub fn amount(value: Option<f64>) -> f64 {
    match value {
        Some(v) if !v.is_nan() => v,
        _ => 0.0,
    }
}

/// Parse a numeric input. Blank or garbage input is `None`.
pub fn parse_amount(value: &str) -> Option<f64> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    value.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Render an amount back into an input field.
pub fn amount_to_input(value: Option<f64>) -> String {
    match value {
        Some(v) if v.fract() == 0.0 => format!("{}", v as i64),
        Some(v) => v.to_string(),
        None => String::new(),
    }
}

/// Empty strings go over the wire as `null`.
pub fn blank_to_none(value: &str) -> Option<String> {
    if is_blank(value) {
        None
    } else {
        Some(value.trim().to_string())
    }
}
