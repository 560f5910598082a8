use serde::Serialize;

/// Exact millimeters per inch
pub const MM_PER_INCH: f64 = 25.4;

/// The base unit of a grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    Millimeters,
    Inches,
}

impl UnitSystem {
    /// Express `value` (in this unit) in the `to` unit.
    ///
    /// mm to inch divides by 25.4 and inch to mm multiplies, so a value that went
    /// through one direction is bit-for-bit what a person computes by hand.
    pub fn convert(&self, value: f64, to: UnitSystem) -> f64 {
        match (self, to) {
            (UnitSystem::Millimeters, UnitSystem::Inches) => value / MM_PER_INCH,
            (UnitSystem::Inches, UnitSystem::Millimeters) => value * MM_PER_INCH,
            _ => value,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            UnitSystem::Millimeters => "mm",
            UnitSystem::Inches => "inch",
        }
    }

    /// Largest size accepted for a chart range in this unit
    pub fn max_size(&self) -> f64 {
        match self {
            UnitSystem::Millimeters => 250.0,
            UnitSystem::Inches => 10.0,
        }
    }
}
