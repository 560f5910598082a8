//! How close are metric wrench sizes to fractional inch (SAE) sizes, and the reverse.
//!
//! Every step of a metric range (0.1 to 10 mm per step) is matched with the nearest
//! step of an inch grid (1/256 to 1/2 inch per step) and every step of an inch range
//! with the nearest metric step, each with the ratio of rounded to exact size.

pub mod config;
pub mod engine;
pub mod format;
pub mod grid;
pub mod request;
pub mod size;

pub use engine::{CancelToken, ConversionEngine, ReportFormat, RunSummary};
pub use request::{ConversionRequest, RequestError, RequestInput};
pub use size::{parse_size, SizeParseError};
