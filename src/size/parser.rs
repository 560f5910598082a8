use crate::size::error::SizeParseError;
use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    /// Either an unsigned decimal ("12", "12.5", "12.", ".5") or a fraction with an
    /// optional whole part separated by whitespace or one of `&+-` ("7/32", "1-1/4",
    /// "1 3/8", "1 & 3:8"). No signs, no exponents.
    static ref SIZE_PATTERN: Regex = Regex::new(
        r"^\s*(?:(?P<decimal>[0-9]+\.?[0-9]*|[0-9]*\.[0-9]+)|(?:(?P<whole>[0-9]+)(?:\s+|\s*[&+\-]\s*))?(?P<num>[0-9]+)\s*[/:]\s*(?P<den>[0-9]+))\s*$"
    ).unwrap();
}

/// Parse a size string into a non-negative number.
///
/// Accepts unsigned integers and decimals ("3", "12.5") and fractions with an
/// optional whole part ("7/32", "1-1/4", "1 3/8"). The whole input must match,
/// apart from surrounding whitespace.
pub fn parse_size(input: &str) -> Result<f64, SizeParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(SizeParseError::Empty);
    }

    let captures = SIZE_PATTERN
        .captures(trimmed)
        .ok_or_else(|| SizeParseError::Syntax(trimmed.to_string()))?;

    if let Some(decimal) = captures.name("decimal") {
        let value = decimal
            .as_str()
            .parse::<f64>()
            .map_err(|_| SizeParseError::Syntax(trimmed.to_string()))?;
        if !value.is_finite() {
            return Err(SizeParseError::Overflow(trimmed.to_string()));
        }
        return Ok(value);
    }

    parse_fraction(trimmed, &captures)
}

fn parse_fraction(input: &str, captures: &Captures<'_>) -> Result<f64, SizeParseError> {
    // Whole, numerator and denominator are each limited to i32
    let integer = |name: &str| -> Result<i32, SizeParseError> {
        match captures.name(name) {
            Some(m) => m
                .as_str()
                .parse::<i32>()
                .map_err(|_| SizeParseError::Overflow(input.to_string())),
            None => Ok(0),
        }
    };

    let whole = integer("whole")?;
    let numerator = integer("num")?;
    let denominator = integer("den")?;

    if denominator == 0 {
        return Err(SizeParseError::ZeroDenominator(input.to_string()));
    }

    Ok(f64::from(whole) + f64::from(numerator) / f64::from(denominator))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("3", 3.0)]
    #[case("12.5", 12.5)]
    #[case("12.", 12.0)]
    #[case(".5", 0.5)]
    #[case("0", 0.0)]
    #[case("  250  ", 250.0)]
    #[case("7/32", 7.0 / 32.0)]
    #[case("1-1/4", 1.25)]
    #[case("1 3/8", 1.375)]
    #[case("1&3/8", 1.375)]
    #[case("1 + 3/8", 1.375)]
    #[case("3:4", 0.75)]
    #[case("2 - 1 / 2", 2.5)]
    #[case("5/4", 1.25)]
    fn test_parse_valid_sizes(#[case] input: &str, #[case] expected: f64) {
        let value = parse_size(input).unwrap();
        assert!(
            (value - expected).abs() < 1e-12,
            "'{}' parsed to {}, expected {}",
            input,
            value,
            expected
        );
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case(".")]
    #[case("-3")]
    #[case("+3")]
    #[case("1e3")]
    #[case("abc")]
    #[case("1/")]
    #[case("/4")]
    #[case("1--1/4")]
    #[case("1.5/2")]
    #[case("3 mm")]
    fn test_parse_rejects_bad_syntax(#[case] input: &str) {
        assert!(parse_size(input).is_err(), "'{}' should not parse", input);
    }

    #[test]
    fn test_parse_empty_is_empty_error() {
        assert_eq!(parse_size(""), Err(SizeParseError::Empty));
        assert_eq!(parse_size(" \t "), Err(SizeParseError::Empty));
    }

    #[test]
    fn test_parse_zero_denominator() {
        assert_eq!(
            parse_size("1/0"),
            Err(SizeParseError::ZeroDenominator("1/0".to_string()))
        );
        assert!(matches!(
            parse_size("2-3/0"),
            Err(SizeParseError::ZeroDenominator(_))
        ));
    }

    #[test]
    fn test_parse_overflow() {
        assert!(matches!(
            parse_size("99999999999/2"),
            Err(SizeParseError::Overflow(_))
        ));
        assert!(matches!(
            parse_size("1-1/99999999999"),
            Err(SizeParseError::Overflow(_))
        ));

        assert_eq!(
            parse_size("3000000000/3000000000"),
            Err(SizeParseError::Overflow("3000000000/3000000000".to_string()))
        );
        assert!(matches!(
            parse_size("2147483648 1/2"),
            Err(SizeParseError::Overflow(_))
        ));
        assert_eq!(parse_size("2147483647/2147483647"), Ok(1.0));

        let huge = "9".repeat(400);
        assert!(matches!(parse_size(&huge), Err(SizeParseError::Overflow(_))));
    }
}
