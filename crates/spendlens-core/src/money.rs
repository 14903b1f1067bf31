//! Dollar-string helpers.
//!
//! Amounts travel over the wire as strings like `"$12.34"`. Parsing
//! strips an optional leading `$`; formatting always emits two decimal
//! places.

use crate::error::{LensError, LensResult};

/// Parse a dollar string into its numeric value.
///
/// A leading `$` is optional; the remainder must parse as a float.
pub fn parse_dollars(s: &str) -> LensResult<f64> {
    let trimmed = s.trim();
    let digits = trimmed.strip_prefix('$').unwrap_or(trimmed);
    digits
        .parse::<f64>()
        .map_err(|_| LensError::InvalidAmount(s.to_string()))
}

/// Format a numeric value as a dollar string with two decimal places.
pub fn format_dollars(value: f64) -> String {
    format!("${:.2}", value)
}

/// Round a value to whole cents.
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_symbol() {
        assert_eq!(parse_dollars("$12.34").unwrap(), 12.34);
    }

    #[test]
    fn test_parse_without_symbol() {
        assert_eq!(parse_dollars("12.34").unwrap(), 12.34);
    }

    #[test]
    fn test_parse_whitespace() {
        assert_eq!(parse_dollars(" $0.99 ").unwrap(), 0.99);
    }

    #[test]
    fn test_parse_garbage() {
        assert!(parse_dollars("twelve dollars").is_err());
        assert!(parse_dollars("$").is_err());
        assert!(parse_dollars("").is_err());
    }

    #[test]
    fn test_format() {
        assert_eq!(format_dollars(12.3), "$12.30");
        assert_eq!(format_dollars(0.0), "$0.00");
        assert_eq!(format_dollars(7.005), "$7.01");
    }

    #[test]
    fn test_round_cents() {
        assert_eq!(round_cents(12.3456), 12.35);
        assert_eq!(round_cents(12.344), 12.34);
    }

    #[test]
    fn test_parse_format_round_trip() {
        let formatted = format_dollars(round_cents(41.237));
        assert_eq!(parse_dollars(&formatted).unwrap(), 41.24);
    }
}
