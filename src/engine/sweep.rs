use crate::engine::result::{Closeness, ConversionResult, Direction};
use crate::grid::{Bias, SaeStep, StepCount, StepRange, UnitGrid};
use crate::request::{ConversionRequest, SizeRange};

/// Lazily produces the rows of one direction, in increasing step order.
///
/// Cloning an unstarted sweep gives an independent copy, so a sweep can be replayed.
#[derive(Debug, Clone)]
pub struct Sweep {
    direction: Direction,
    source: UnitGrid,
    target: UnitGrid,
    sae_step: SaeStep,
    bias: Bias,
    steps: StepRange,
}

impl Sweep {
    pub fn new(direction: Direction, request: &ConversionRequest) -> Self {
        let metric = UnitGrid::metric(request.metric_step);
        let sae = UnitGrid::sae(request.sae_step);
        let (source, target, range) = match direction {
            Direction::MetricToSae => (metric, sae, request.metric),
            Direction::SaeToMetric => (sae, metric, request.sae),
        };

        Self {
            direction,
            source,
            target,
            sae_step: request.sae_step,
            bias: request.bias,
            steps: step_bounds(&source, &range),
        }
    }

    pub fn metric_to_sae(request: &ConversionRequest) -> Self {
        Self::new(Direction::MetricToSae, request)
    }

    pub fn sae_to_metric(request: &ConversionRequest) -> Self {
        Self::new(Direction::SaeToMetric, request)
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// The single row for `source_steps`. Bias only applies to the target rounding.
    pub fn convert(&self, source_steps: StepCount) -> ConversionResult {
        let exact_source = self.source.to_value(source_steps);
        let exact_target = self.source.cross_convert(source_steps, &self.target);
        let target_steps = self.target.to_steps(exact_target, self.bias);
        let rounded_target = self.target.to_value(target_steps);
        let ratio = rounded_target / exact_target;

        ConversionResult {
            direction: self.direction,
            sae_step: self.sae_step,
            source_steps,
            exact_source,
            exact_target,
            target_steps,
            rounded_target,
            ratio,
            closeness: Closeness::classify(ratio),
        }
    }
}

// Range ends are rounded without bias, and never below one step.
fn step_bounds(grid: &UnitGrid, range: &SizeRange) -> StepRange {
    let first = grid.to_steps(range.first, Bias::ZERO);
    let last = grid.to_steps(range.last, Bias::ZERO);
    first.through(last)
}

impl Iterator for Sweep {
    type Item = ConversionResult;

    fn next(&mut self) -> Option<Self::Item> {
        let steps = self.steps.next()?;
        Some(self.convert(steps))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.steps.size_hint()
    }
}

impl ExactSizeIterator for Sweep {}
