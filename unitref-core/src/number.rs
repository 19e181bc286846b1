//! Parsing of user-typed values
//!
//! The only validation applied to input is "is this a parseable number".
//! Grouping separators and locale-specific decimal marks are not accepted.

use thiserror::Error;

/// Error type for value parsing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Empty input")]
    Empty,

    #[error("Invalid number format: {0}")]
    NotANumber(String),
}

/// Parse a decimal or scientific literal ("12", "-0.5", ".25", "1e-3").
///
/// Literals that overflow `f64` parse to an infinity rather than failing.
/// The spelled-out forms `NaN`, `inf` and `infinity` are rejected.
pub fn parse_value(text: &str) -> Result<f64, InputError> {
    let s = text.trim();
    if s.is_empty() {
        return Err(InputError::Empty);
    }

    let unsigned = s.trim_start_matches(['+', '-']);
    if unsigned
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic())
    {
        return Err(InputError::NotANumber(s.to_string()));
    }

    s.parse::<f64>()
        .map_err(|_| InputError::NotANumber(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_integer_and_decimal() {
        assert_eq!(parse_value("42"), Ok(42.0));
        assert_eq!(parse_value(" -0.5 "), Ok(-0.5));
        assert_eq!(parse_value(".25"), Ok(0.25));
        assert_eq!(parse_value("+3"), Ok(3.0));
    }

    #[test]
    fn test_parse_scientific() {
        assert_eq!(parse_value("1.5e2"), Ok(150.0));
        assert_eq!(parse_value("1e-3"), Ok(0.001));
    }

    #[test]
    fn test_parse_overflow_is_infinite() {
        assert_eq!(parse_value("1e400"), Ok(f64::INFINITY));
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert_eq!(parse_value(""), Err(InputError::Empty));
        assert_eq!(parse_value("   "), Err(InputError::Empty));
    }

    #[test]
    fn test_parse_rejects_words() {
        assert!(matches!(parse_value("abc"), Err(InputError::NotANumber(_))));
        assert!(matches!(parse_value("NaN"), Err(InputError::NotANumber(_))));
        assert!(matches!(parse_value("-inf"), Err(InputError::NotANumber(_))));
        assert!(matches!(parse_value("Infinity"), Err(InputError::NotANumber(_))));
    }

    #[test]
    fn test_parse_rejects_grouping() {
        assert!(matches!(parse_value("1,000"), Err(InputError::NotANumber(_))));
        assert!(matches!(parse_value("12px"), Err(InputError::NotANumber(_))));
    }
}
