use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SizeParseError {
    #[error("Size is empty")]
    Empty,
    #[error("Not a size: '{0}' (expected e.g. 3, 12.5, 7/32 or 1-1/4)")]
    Syntax(String),
    #[error("Fraction has a zero denominator: '{0}'")]
    ZeroDenominator(String),
    #[error("Number is too large: '{0}'")]
    Overflow(String),
}
