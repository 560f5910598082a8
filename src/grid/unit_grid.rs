use crate::grid::resolution::{MetricStep, SaeStep};
use crate::grid::types::{Bias, StepCount};
use crate::grid::unit_system::UnitSystem;

/// A base unit (mm or inch) divided into equal steps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitGrid {
    system: UnitSystem,
    steps_per_unit: f64,
}

impl UnitGrid {
    pub fn metric(step: MetricStep) -> Self {
        Self {
            system: UnitSystem::Millimeters,
            steps_per_unit: step.steps_per_mm(),
        }
    }

    pub fn sae(step: SaeStep) -> Self {
        Self {
            system: UnitSystem::Inches,
            steps_per_unit: f64::from(step.units_per_inch()),
        }
    }

    /// Nearest step for `value` (in this grid's unit) after adding `bias`, at least one step.
    pub fn to_steps(&self, value: f64, bias: Bias) -> StepCount {
        StepCount::from_rounded(value * self.steps_per_unit + bias.value())
    }

    /// Exact size of `steps`, no rounding
    pub fn to_value(&self, steps: StepCount) -> f64 {
        f64::from(steps.get()) / self.steps_per_unit
    }

    /// Exact size of `steps` expressed in the other grid's unit
    pub fn cross_convert(&self, steps: StepCount, other: &UnitGrid) -> f64 {
        self.system.convert(self.to_value(steps), other.system)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_steps_clamps_zero() {
        let metric = UnitGrid::metric(MetricStep::One);
        let sae = UnitGrid::sae(SaeStep::Sixteenth);

        assert_eq!(metric.to_steps(0.0, Bias::ZERO), StepCount::ONE);
        assert_eq!(sae.to_steps(0.0, Bias::ZERO), StepCount::ONE);

        let low = Bias::new(-1.0).unwrap();
        assert_eq!(metric.to_steps(0.0, low), StepCount::ONE);
        assert_eq!(sae.to_steps(0.01, low), StepCount::ONE);
    }

    #[test]
    fn test_to_steps_rounding() {
        let metric = UnitGrid::metric(MetricStep::One);
        assert_eq!(metric.to_steps(3.175, Bias::ZERO).get(), 3);
        assert_eq!(metric.to_steps(3.5, Bias::ZERO).get(), 4);
        assert_eq!(metric.to_steps(3.49, Bias::ZERO).get(), 3);

        let tenths = UnitGrid::metric(MetricStep::Tenth);
        assert_eq!(tenths.to_steps(3.26, Bias::ZERO).get(), 33);

        let sae = UnitGrid::sae(SaeStep::Sixteenth);
        assert_eq!(sae.to_steps(3.0 / 25.4, Bias::ZERO).get(), 2);
        assert_eq!(sae.to_steps(1.25, Bias::ZERO).get(), 20);
    }

    #[test]
    fn test_bias_moves_the_threshold() {
        let metric = UnitGrid::metric(MetricStep::One);
        let up = Bias::new(0.3).unwrap();
        let down = Bias::new(-0.3).unwrap();

        // 3.25 normally rounds down, +0.3 rounds anything past 3.2 up
        assert_eq!(metric.to_steps(3.25, Bias::ZERO).get(), 3);
        assert_eq!(metric.to_steps(3.25, up).get(), 4);
        assert_eq!(metric.to_steps(3.15, up).get(), 3);

        // 3.75 normally rounds up, -0.3 keeps anything below 3.8 down
        assert_eq!(metric.to_steps(3.75, Bias::ZERO).get(), 4);
        assert_eq!(metric.to_steps(3.75, down).get(), 3);
    }

    #[test]
    fn test_bias_is_monotonic() {
        let sae = UnitGrid::sae(SaeStep::ThirtySecond);
        for i in 0..200 {
            let value = f64::from(i) * 0.0137;
            let mut previous = sae.to_steps(value, Bias::new(-1.0).unwrap());
            for b in -9..=10 {
                let bias = Bias::new(f64::from(b) / 10.0).unwrap();
                let steps = sae.to_steps(value, bias);
                assert!(steps >= previous, "value {} bias {}", value, bias);
                previous = steps;
            }
        }
    }

    #[test]
    fn test_to_value_is_exact_inverse() {
        let tenths = UnitGrid::metric(MetricStep::Tenth);
        assert_eq!(tenths.to_value(StepCount::new(33)), 3.3);

        let tens = UnitGrid::metric(MetricStep::Ten);
        assert!((tens.to_value(StepCount::new(3)) - 30.0).abs() < 1e-9);

        let sae = UnitGrid::sae(SaeStep::Sixteenth);
        assert_eq!(sae.to_value(StepCount::new(2)), 0.125);
        assert_eq!(
            sae.to_steps(sae.to_value(StepCount::new(37)), Bias::ZERO).get(),
            37
        );
    }

    #[test]
    fn test_cross_convert() {
        let metric = UnitGrid::metric(MetricStep::One);
        let sae = UnitGrid::sae(SaeStep::Sixteenth);

        assert_eq!(metric.cross_convert(StepCount::new(3), &sae), 3.0 / 25.4);
        assert_eq!(sae.cross_convert(StepCount::new(2), &metric), 3.175);
        assert_eq!(sae.cross_convert(StepCount::new(16), &metric), 25.4);
    }
}
