//! Parsing and display of token amounts typed into the dashboard.

pub const TOKEN_SYMBOL: &str = "JBL";

/// Parse user input into a positive, finite amount. Accepts a comma as the
/// decimal separator.
pub fn parse_amount(input: &str) -> Option<f64> {
    let normalized = input.trim().replace(',', ".");
    if normalized.is_empty() {
        return None;
    }
    let value: f64 = normalized.parse().ok()?;
    (value.is_finite() && value > 0.0).then_some(value)
}

/// Two decimal places, the precision every figure is shown with.
pub fn format_amount(value: f64) -> String {
    format!("{value:.2}")
}

/// `format_amount` with the token symbol appended.
pub fn format_tokens(value: f64) -> String {
    format!("{} {TOKEN_SYMBOL}", format_amount(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("150"), Some(150.0));
        assert_eq!(parse_amount(" 12.5 "), Some(12.5));
        assert_eq!(parse_amount("0,75"), Some(0.75));

        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("abc"), None);
        assert_eq!(parse_amount("0"), None);
        assert_eq!(parse_amount("-5"), None);
        assert_eq!(parse_amount("inf"), None);
        assert_eq!(parse_amount("NaN"), None);
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(500.0), "500.00");
        assert_eq!(format_amount(12.5), "12.50");
        assert_eq!(format_amount(0.164383), "0.16");
        assert_eq!(format_tokens(3.0), "3.00 JBL");
    }
}
