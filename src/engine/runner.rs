use crate::engine::cancel::CancelToken;
use crate::engine::report::ReportFormat;
use crate::engine::result::Direction;
use crate::engine::sink::OutputSink;
use crate::engine::sweep::Sweep;
use crate::request::ConversionRequest;
use log::{debug, info};
use std::io;

/// Line written by front ends when a run stops early
pub const CANCELLED_MESSAGE: &str = "Cancelled by user.";

/// What a run produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    pub metric_rows: usize,
    pub sae_rows: usize,
    pub cancelled: bool,
}

impl RunSummary {
    pub fn total_rows(&self) -> usize {
        self.metric_rows + self.sae_rows
    }
}

/// Runs the metric to SAE sweep, then the SAE to metric sweep, streaming rows to a sink.
#[derive(Debug, Clone)]
pub struct ConversionEngine {
    request: ConversionRequest,
    format: ReportFormat,
}

impl ConversionEngine {
    pub fn new(request: ConversionRequest) -> Self {
        Self {
            request,
            format: ReportFormat::Text,
        }
    }

    pub fn with_format(mut self, format: ReportFormat) -> Self {
        self.format = format;
        self
    }

    pub fn sweeps(&self) -> [Sweep; 2] {
        [
            Sweep::metric_to_sae(&self.request),
            Sweep::sae_to_metric(&self.request),
        ]
    }

    /// Emit both sweeps. `cancel` is checked before every row; once set the run stops
    /// and whatever was already written stays written. Only sink errors are returned.
    pub fn run<S: OutputSink>(&self, cancel: &CancelToken, sink: &mut S) -> io::Result<RunSummary> {
        let mut summary = RunSummary::default();
        info!(
            "Charting {} to {} mm at {} steps and {} to {} inch at {} steps, bias {}",
            self.request.metric.first,
            self.request.metric.last,
            self.request.metric_step,
            self.request.sae.first,
            self.request.sae.last,
            self.request.sae_step,
            self.request.bias
        );

        for sweep in self.sweeps() {
            let direction = sweep.direction();
            if self.format == ReportFormat::Text {
                sink.write_line("")?;
                sink.write_line(direction.header())?;
            }
            debug!("{:?}: {} rows", direction, sweep.len());

            for row in sweep {
                if cancel.is_cancelled() {
                    info!("Cancelled after {} rows", summary.total_rows());
                    summary.cancelled = true;
                    return Ok(summary);
                }
                let line = row.render(self.format).map_err(io::Error::other)?;
                sink.write_row(&line)?;
                match direction {
                    Direction::MetricToSae => summary.metric_rows += 1,
                    Direction::SaeToMetric => summary.sae_rows += 1,
                }
            }
        }

        info!(
            "Finished: {} metric rows, {} SAE rows",
            summary.metric_rows, summary.sae_rows
        );
        Ok(summary)
    }
}
