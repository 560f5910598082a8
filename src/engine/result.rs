use crate::grid::{SaeStep, StepCount, UnitSystem};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    MetricToSae,
    SaeToMetric,
}

impl Direction {
    pub fn header(&self) -> &'static str {
        match self {
            Direction::MetricToSae => "Metric/millimeter to fractional/inch/SAE/standard:",
            Direction::SaeToMetric => "Fractional/inch/SAE/standard to metric/millimeter:",
        }
    }

    pub fn source(&self) -> UnitSystem {
        match self {
            Direction::MetricToSae => UnitSystem::Millimeters,
            Direction::SaeToMetric => UnitSystem::Inches,
        }
    }

    pub fn target(&self) -> UnitSystem {
        match self {
            Direction::MetricToSae => UnitSystem::Inches,
            Direction::SaeToMetric => UnitSystem::Millimeters,
        }
    }
}

/// How close the nearest grid step is to the exact size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Closeness {
    VeryGood,
    Good,
    Neither,
}

impl Closeness {
    /// Open intervals: within 0.3% is very good, within 0.8% is good.
    pub fn classify(ratio: f64) -> Self {
        if ratio > 0.997 && ratio < 1.003 {
            Closeness::VeryGood
        } else if ratio > 0.992 && ratio < 1.008 {
            Closeness::Good
        } else {
            Closeness::Neither
        }
    }

    /// Text appended to a chart row, with its leading space
    pub fn suffix(&self) -> &'static str {
        match self {
            Closeness::VeryGood => " very good",
            Closeness::Good => " good",
            Closeness::Neither => "",
        }
    }
}

/// One chart row: a source grid step and its nearest step on the other grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConversionResult {
    pub direction: Direction,
    /// SAE grid of the run, used to render inch sizes as fractions
    pub sae_step: SaeStep,
    pub source_steps: StepCount,
    /// Size of `source_steps`, in the source unit
    pub exact_source: f64,
    /// The same size, in the target unit
    pub exact_target: f64,
    pub target_steps: StepCount,
    /// Size of `target_steps`, in the target unit
    pub rounded_target: f64,
    pub ratio: f64,
    pub closeness: Closeness,
}
