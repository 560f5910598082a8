use crate::engine::result::{Closeness, ConversionResult, Direction};
use crate::format::{format_decimal, format_fraction};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How rows are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// The chart as sentences, with a header before each direction
    #[default]
    Text,
    /// One JSON object per row, no headers
    Json,
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            other => Err(format!("Unknown report format '{}', expected text or json", other)),
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportFormat::Text => write!(f, "text"),
            ReportFormat::Json => write!(f, "json"),
        }
    }
}

impl ConversionResult {
    /// The source size as shown in the chart: "3.5" mm or "1-1/4" inch
    pub fn source_label(&self) -> String {
        match self.direction {
            Direction::MetricToSae => format_decimal(self.exact_source, 0, 1),
            Direction::SaeToMetric => format_fraction(self.source_steps.get(), self.sae_step),
        }
    }

    /// The nearest target size as shown in the chart: "1/8" inch or "3" mm
    pub fn rounded_label(&self) -> String {
        match self.direction {
            Direction::MetricToSae => format_fraction(self.target_steps.get(), self.sae_step),
            Direction::SaeToMetric => format_decimal(self.rounded_target, 0, 1),
        }
    }

    /// The chart line for this row, e.g.
    /// "3 mm = 1.890 / 16 inch, rounded to 1/8 has ratio 1.05833"
    pub fn to_text(&self) -> String {
        let ratio = format_decimal(self.ratio, 5, 5);
        match self.direction {
            Direction::MetricToSae => {
                let units_per_inch = self.sae_step.units_per_inch();
                format!(
                    "{} mm = {} / {} inch, rounded to {} has ratio {}{}",
                    self.source_label(),
                    format_decimal(self.exact_target * f64::from(units_per_inch), 3, 3),
                    units_per_inch,
                    self.rounded_label(),
                    ratio,
                    self.closeness.suffix()
                )
            }
            Direction::SaeToMetric => format!(
                "{} inch = {} mm, rounded to {} has ratio {}{}",
                self.source_label(),
                format_decimal(self.exact_target, 3, 3),
                self.rounded_label(),
                ratio,
                self.closeness.suffix()
            ),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&JsonRow::from(self))
    }

    pub fn render(&self, format: ReportFormat) -> serde_json::Result<String> {
        match format {
            ReportFormat::Text => Ok(self.to_text()),
            ReportFormat::Json => self.to_json(),
        }
    }
}

#[derive(Debug, Serialize)]
struct JsonRow {
    direction: Direction,
    source: String,
    source_unit: &'static str,
    exact_source: f64,
    exact_target: f64,
    target_steps: u32,
    rounded: String,
    rounded_target: f64,
    target_unit: &'static str,
    ratio: f64,
    closeness: Closeness,
}

impl From<&ConversionResult> for JsonRow {
    fn from(row: &ConversionResult) -> Self {
        Self {
            direction: row.direction,
            source: row.source_label(),
            source_unit: row.direction.source().display_name(),
            exact_source: row.exact_source,
            exact_target: row.exact_target,
            target_steps: row.target_steps.get(),
            rounded: row.rounded_label(),
            rounded_target: row.rounded_target,
            target_unit: row.direction.target().display_name(),
            ratio: row.ratio,
            closeness: row.closeness,
        }
    }
}
