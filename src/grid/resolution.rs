use crate::grid::error::GridError;
use crate::size::parse_size;
use std::fmt;
use std::str::FromStr;

/// Millimeters per metric grid step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MetricStep {
    Tenth,
    Fifth,
    Half,
    #[default]
    One,
    Two,
    Five,
    Ten,
}

impl MetricStep {
    pub const ALL: [MetricStep; 7] = [
        MetricStep::Tenth,
        MetricStep::Fifth,
        MetricStep::Half,
        MetricStep::One,
        MetricStep::Two,
        MetricStep::Five,
        MetricStep::Ten,
    ];

    /// Grid steps in one millimeter. Listed rather than computed as 1/step so
    /// 0.1 mm steps give exactly 10 steps per mm.
    pub fn steps_per_mm(&self) -> f64 {
        match self {
            MetricStep::Tenth => 10.0,
            MetricStep::Fifth => 5.0,
            MetricStep::Half => 2.0,
            MetricStep::One => 1.0,
            MetricStep::Two => 0.5,
            MetricStep::Five => 0.2,
            MetricStep::Ten => 0.1,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MetricStep::Tenth => "0.1",
            MetricStep::Fifth => "0.2",
            MetricStep::Half => "0.5",
            MetricStep::One => "1",
            MetricStep::Two => "2",
            MetricStep::Five => "5",
            MetricStep::Ten => "10",
        }
    }
}

impl FromStr for MetricStep {
    type Err = GridError;

    /// Accepts any spelling of one of the choices: "1", "1.0", "0.5", ".5", "1/2"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || GridError::UnknownMetricStep(s.trim().to_string());
        let mm = parse_size(s).map_err(|_| unknown())?;
        Self::ALL
            .into_iter()
            .find(|step| (step.steps_per_mm() * mm - 1.0).abs() < 1e-9)
            .ok_or_else(unknown)
    }
}

impl fmt::Display for MetricStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} mm", self.label())
    }
}

/// Inches per SAE grid step, always 1/2^n
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SaeStep {
    TwoFiftySixth,
    HundredTwentyEighth,
    SixtyFourth,
    ThirtySecond,
    #[default]
    Sixteenth,
    Eighth,
    Quarter,
    Half,
}

impl SaeStep {
    pub const ALL: [SaeStep; 8] = [
        SaeStep::TwoFiftySixth,
        SaeStep::HundredTwentyEighth,
        SaeStep::SixtyFourth,
        SaeStep::ThirtySecond,
        SaeStep::Sixteenth,
        SaeStep::Eighth,
        SaeStep::Quarter,
        SaeStep::Half,
    ];

    /// Grid steps in one inch, which is also the fraction denominator
    pub fn units_per_inch(&self) -> u32 {
        match self {
            SaeStep::TwoFiftySixth => 256,
            SaeStep::HundredTwentyEighth => 128,
            SaeStep::SixtyFourth => 64,
            SaeStep::ThirtySecond => 32,
            SaeStep::Sixteenth => 16,
            SaeStep::Eighth => 8,
            SaeStep::Quarter => 4,
            SaeStep::Half => 2,
        }
    }
}

impl FromStr for SaeStep {
    type Err = GridError;

    /// Accepts "1/16", "1:16" or the decimal "0.0625"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || GridError::UnknownSaeStep(s.trim().to_string());
        let inch = parse_size(s).map_err(|_| unknown())?;
        Self::ALL
            .into_iter()
            .find(|step| (f64::from(step.units_per_inch()) * inch - 1.0).abs() < 1e-9)
            .ok_or_else(unknown)
    }
}

impl fmt::Display for SaeStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "1/{} inch", self.units_per_inch())
    }
}
