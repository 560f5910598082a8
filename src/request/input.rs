use crate::grid::{MetricStep, SaeStep, UnitSystem};
use crate::request::error::RequestError;
use crate::request::validation::{parse_bias, ConversionRequest, SizeRange};
use crate::size::parse_size;
use serde::{Deserialize, Serialize};

/// Chart options as the user typed them. Defaults chart 3 to 32 mm at 1 mm steps
/// and 1/8 to 1-1/4 inch at 1/16 inch steps, with no bias.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct RequestInput {
    pub metric_first: String,
    pub metric_last: String,
    pub metric_step: String,
    pub sae_first: String,
    pub sae_last: String,
    pub sae_step: String,
    pub bias: String,
}

impl Default for RequestInput {
    fn default() -> Self {
        Self {
            metric_first: "3".to_string(),
            metric_last: "32".to_string(),
            metric_step: "1".to_string(),
            sae_first: "1/8".to_string(),
            sae_last: "1-1/4".to_string(),
            sae_step: "1/16".to_string(),
            bias: "0.0".to_string(),
        }
    }
}

impl RequestInput {
    /// Check every field and build the request. Nothing is computed if any field is bad.
    pub fn validate(&self) -> Result<ConversionRequest, RequestError> {
        let metric = SizeRange::new(
            UnitSystem::Millimeters,
            parse_field("metric first", &self.metric_first)?,
            parse_field("metric last", &self.metric_last)?,
        )?;
        let sae = SizeRange::new(
            UnitSystem::Inches,
            parse_field("SAE first", &self.sae_first)?,
            parse_field("SAE last", &self.sae_last)?,
        )?;
        let bias = parse_bias(&self.bias)?;
        let metric_step = self.metric_step.parse::<MetricStep>()?;
        let sae_step = self.sae_step.parse::<SaeStep>()?;

        ConversionRequest::new(metric, sae, metric_step, sae_step, bias)
    }
}

fn parse_field(field: &'static str, input: &str) -> Result<f64, RequestError> {
    parse_size(input).map_err(|source| RequestError::InvalidSize {
        field,
        input: input.to_string(),
        source,
    })
}
