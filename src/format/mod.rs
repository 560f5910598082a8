// Text rendering for chart rows: reduced fractions and fixed-width decimals

pub mod fraction;
pub mod number;

pub use fraction::{format_fraction, ReducedFraction};
pub use number::format_decimal;
