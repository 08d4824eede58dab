//! Number formatting for tables and totals

pub const CURRENCY: &str = "₹";

/// Formats a number with a comma thousands separator and the given decimals.
///
/// ```
/// # use frontend::shared::components::table::number_format::format_number_with_decimals;
/// let formatted = format_number_with_decimals(1234.567, 2);
/// assert_eq!(formatted, "1,234.57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: u8) -> String {
    let formatted = match decimals {
        0 => format!("{:.0}", value),
        1 => format!("{:.1}", value),
        _ => format!("{:.2}", value),
    };

    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (formatted.as_str(), None),
    };

    // Group digits in threes from the right
    let mut result = String::new();
    let chars: Vec<char> = integer_part.chars().rev().collect();
    for (i, c) in chars.iter().enumerate() {
        if i > 0 && i % 3 == 0 && *c != '-' {
            result.push(',');
        }
        result.push(*c);
    }
    let formatted_integer = result.chars().rev().collect::<String>();

    match decimal_part {
        Some(d) => format!("{}.{}", formatted_integer, d),
        None => formatted_integer,
    }
}

/// `1234567.891` → `"1,234,567.89"`
pub fn format_money(value: f64) -> String {
    format_number_with_decimals(value, 2)
}

/// Money with the rupee sign, `"₹ 1,234.00"`.
pub fn format_rupees(value: f64) -> String {
    format!("{} {}", CURRENCY, format_money(value))
}

/// `"-"` for a missing amount.
pub fn format_optional_rupees(value: Option<f64>) -> String {
    value.map(format_rupees).unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(1234.56), "1,234.56");
        assert_eq!(format_money(1234567.891), "1,234,567.89");
        assert_eq!(format_money(0.0), "0.00");
        assert_eq!(format_money(-1234.5), "-1,234.50");
        assert_eq!(format_money(-123.0), "-123.00");
    }

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(1234.567, 0), "1,235");
        assert_eq!(format_number_with_decimals(1234.567, 1), "1,234.6");
        assert_eq!(format_number_with_decimals(1234.567, 7), "1,234.57");
    }

    #[test]
    fn test_format_rupees() {
        assert_eq!(format_rupees(1150.5), "₹ 1,150.50");
        assert_eq!(format_optional_rupees(None), "-");
        assert_eq!(format_optional_rupees(Some(50.0)), "₹ 50.00");
    }
}
