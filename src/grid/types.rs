use serde::Serialize;
use std::fmt;
use std::iter::Map;
use std::ops::RangeInclusive;

/// Consecutive step counts, as produced by [`StepCount::through`]
pub type StepRange = Map<RangeInclusive<u32>, fn(u32) -> StepCount>;

/// Number of steps on a grid. Never zero: a zero size is reported as one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct StepCount(u32);

impl StepCount {
    pub const ONE: StepCount = StepCount(1);

    /// Clamps to one step
    pub fn new(steps: u32) -> Self {
        Self(steps.max(1))
    }

    /// Round a real step count half away from zero, clamped to at least one step.
    pub fn from_rounded(raw: f64) -> Self {
        let rounded = raw.round();
        if rounded.is_nan() || rounded < 1.0 {
            Self::ONE
        } else {
            // saturating cast
            Self(rounded as u32)
        }
    }

    pub fn get(&self) -> u32 {
        self.0
    }

    /// Every step from `self` to `last`, both included
    pub fn through(self, last: StepCount) -> StepRange {
        (self.0..=last.0).map(StepCount as fn(u32) -> StepCount)
    }
}

impl fmt::Display for StepCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Additive nudge applied before rounding to a grid step, in [-1, +1].
///
/// Positive values round up sooner: +0.3 moves the rounding threshold from half a
/// step to 0.2 of a step, favoring a tool that is too big over one too small.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize)]
pub struct Bias(f64);

impl Bias {
    pub const ZERO: Bias = Bias(0.0);
    pub const MIN: f64 = -1.0;
    pub const MAX: f64 = 1.0;

    pub fn new(value: f64) -> Option<Self> {
        (value.is_finite() && (Self::MIN..=Self::MAX).contains(&value)).then_some(Self(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for Bias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
