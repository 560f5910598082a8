use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    #[error("Unknown metric step '{0}', expected one of: 0.1, 0.2, 0.5, 1, 2, 5, 10 (mm)")]
    UnknownMetricStep(String),
    #[error("Unknown SAE step '{0}', expected one of: 1/256, 1/128, 1/64, 1/32, 1/16, 1/8, 1/4, 1/2 (inch)")]
    UnknownSaeStep(String),
}
