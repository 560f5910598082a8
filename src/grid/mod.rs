// Discrete measurement grids: millimeters or inches divided into equal steps

pub mod error;
pub mod resolution;
pub mod types;
pub mod unit_grid;
pub mod unit_system;

pub use error::GridError;
pub use resolution::{MetricStep, SaeStep};
pub use types::{Bias, StepCount, StepRange};
pub use unit_grid::UnitGrid;
pub use unit_system::{UnitSystem, MM_PER_INCH};
