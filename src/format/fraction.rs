use crate::grid::SaeStep;
use std::fmt;

/// A mixed fraction with a power-of-two denominator, reduced to lowest terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReducedFraction {
    pub whole: u32,
    pub numerator: u32,
    pub denominator: u32,
}

impl ReducedFraction {
    /// Returns `None` unless `denominator` is a power of two.
    pub fn new(numerator: u32, denominator: u32) -> Option<Self> {
        denominator
            .is_power_of_two()
            .then(|| Self::reduce(numerator, denominator))
    }

    // Halving is enough because the denominator only has factors of two.
    fn reduce(numerator: u32, denominator: u32) -> Self {
        let whole = numerator / denominator;
        let mut num = numerator % denominator;
        let mut denom = denominator;
        while num > 0 && num % 2 == 0 {
            num /= 2;
            denom /= 2;
        }
        Self {
            whole,
            numerator: num,
            denominator: denom,
        }
    }
}

impl fmt::Display for ReducedFraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.whole, self.numerator) {
            (whole, 0) => write!(f, "{}", whole),
            (0, num) => write!(f, "{}/{}", num, self.denominator),
            (whole, num) => write!(f, "{}-{}/{}", whole, num, self.denominator),
        }
    }
}

/// `steps` of an SAE grid as a reduced mixed fraction of an inch: "1", "15/16", "1-1/4"
pub fn format_fraction(steps: u32, step: SaeStep) -> String {
    ReducedFraction::reduce(steps, step.units_per_inch()).to_string()
}
