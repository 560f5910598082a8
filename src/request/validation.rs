use crate::grid::{Bias, MetricStep, SaeStep, UnitSystem};
use crate::request::error::RequestError;

/// First and last size of a chart range, in the unit of `system`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeRange {
    pub system: UnitSystem,
    pub first: f64,
    pub last: f64,
}

impl SizeRange {
    /// Both ends must lie in `0..=max_size` for the unit, with `first <= last`.
    pub fn new(system: UnitSystem, first: f64, last: f64) -> Result<Self, RequestError> {
        let in_bounds = first >= 0.0 && first <= last && last <= system.max_size();
        if !in_bounds {
            return Err(match system {
                UnitSystem::Millimeters => RequestError::MetricRange { first, last },
                UnitSystem::Inches => RequestError::SaeRange { first, last },
            });
        }
        Ok(Self {
            system,
            first,
            last,
        })
    }
}

/// Everything one chart run needs, already checked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConversionRequest {
    pub metric: SizeRange,
    pub sae: SizeRange,
    pub metric_step: MetricStep,
    pub sae_step: SaeStep,
    pub bias: Bias,
}

impl ConversionRequest {
    pub fn new(
        metric: SizeRange,
        sae: SizeRange,
        metric_step: MetricStep,
        sae_step: SaeStep,
        bias: Bias,
    ) -> Result<Self, RequestError> {
        if metric.system != UnitSystem::Millimeters {
            return Err(RequestError::MetricRange {
                first: metric.first,
                last: metric.last,
            });
        }
        if sae.system != UnitSystem::Inches {
            return Err(RequestError::SaeRange {
                first: sae.first,
                last: sae.last,
            });
        }
        Ok(Self {
            metric,
            sae,
            metric_step,
            sae_step,
            bias,
        })
    }
}

/// Parse a bias the way a user types it: "0", "+0.3", "-.25", "1e-1"
pub fn parse_bias(input: &str) -> Result<Bias, RequestError> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .and_then(Bias::new)
        .ok_or_else(|| RequestError::Bias(input.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, 0.0)]
    #[case(3.0, 32.0)]
    #[case(0.0, 250.0)]
    #[case(250.0, 250.0)]
    fn test_metric_range_accepted(#[case] first: f64, #[case] last: f64) {
        assert!(SizeRange::new(UnitSystem::Millimeters, first, last).is_ok());
    }

    #[rstest]
    #[case(-1.0, 3.0)]
    #[case(5.0, 4.0)]
    #[case(0.0, 250.1)]
    #[case(f64::NAN, 3.0)]
    fn test_metric_range_rejected(#[case] first: f64, #[case] last: f64) {
        assert!(matches!(
            SizeRange::new(UnitSystem::Millimeters, first, last),
            Err(RequestError::MetricRange { .. })
        ));
    }

    #[test]
    fn test_sae_range_bounds() {
        assert!(SizeRange::new(UnitSystem::Inches, 0.125, 10.0).is_ok());
        assert!(matches!(
            SizeRange::new(UnitSystem::Inches, 0.125, 10.5),
            Err(RequestError::SaeRange { .. })
        ));
        assert!(matches!(
            SizeRange::new(UnitSystem::Inches, 2.0, 1.0),
            Err(RequestError::SaeRange { .. })
        ));
    }

    #[test]
    fn test_request_checks_range_units() {
        let mm = SizeRange::new(UnitSystem::Millimeters, 3.0, 3.0).unwrap();
        let inch = SizeRange::new(UnitSystem::Inches, 0.125, 0.125).unwrap();

        let (metric_step, sae_step) = (MetricStep::One, SaeStep::Sixteenth);

        let ordered = ConversionRequest::new(mm, inch, metric_step, sae_step, Bias::ZERO);
        let swapped = ConversionRequest::new(inch, mm, metric_step, sae_step, Bias::ZERO);
        assert!(ordered.is_ok());
        assert!(swapped.is_err());
    }

    #[rstest]
    #[case("0", 0.0)]
    #[case("0.0", 0.0)]
    #[case(" +0.3 ", 0.3)]
    #[case("-.25", -0.25)]
    #[case("1", 1.0)]
    #[case("-1.0", -1.0)]
    #[case("1e-1", 0.1)]
    fn test_parse_bias(#[case] input: &str, #[case] expected: f64) {
        assert_eq!(parse_bias(input).unwrap().value(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("abc")]
    #[case("1.01")]
    #[case("-2")]
    #[case("NaN")]
    #[case("inf")]
    fn test_parse_bias_rejected(#[case] input: &str) {
        assert!(matches!(parse_bias(input), Err(RequestError::Bias(_))));
    }
}
