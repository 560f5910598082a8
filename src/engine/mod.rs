// Metric to SAE and SAE to metric sweeps, one row per grid step

pub mod cancel;
pub mod runner;
pub mod report;
pub mod result;
pub mod sink;
pub mod sweep;


pub use cancel::CancelToken;
pub use runner::{ConversionEngine, RunSummary};
pub use report::ReportFormat;
pub use result::{Closeness, ConversionResult, Direction};
pub use sink::{CancelAfterRows, ChannelSink, OutputSink, WriterSink};
pub use sweep::Sweep;
