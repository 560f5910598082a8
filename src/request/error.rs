use crate::grid::GridError;
use crate::size::SizeParseError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RequestError {
    #[error("Invalid {field} size '{input}': {source}")]
    InvalidSize {
        field: &'static str,
        input: String,
        #[source]
        source: SizeParseError,
    },
    #[error("Metric size range must be from 0.0 to 250.0 mm (got {first} to {last})")]
    MetricRange { first: f64, last: f64 },
    #[error("SAE size range must be from 0.0 to 10.0 inch (got {first} to {last})")]
    SaeRange { first: f64, last: f64 },
    #[error("Bias value must be from -1.0 to +1.0 (got '{0}')")]
    Bias(String),
    #[error(transparent)]
    Step(#[from] GridError),
}
