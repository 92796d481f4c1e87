// Metric sample domain models

use serde::{Deserialize, Serialize};

/// One timestamped metric reading, as stored in the daily metric documents.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Sample {
    /// ISO-8601 UTC instant, e.g. "2024-01-01T00:05:00.000Z".
    pub timestamp: String,
    pub value: f64,
}

impl Sample {
    pub fn new(timestamp: String, value: f64) -> Self {
        Self { timestamp, value }
    }
}

/// Index-aligned columns ready for a time-series chart.
/// `timestamps[k]` and `values[k]` always come from the same sample.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub timestamps: Vec<String>,
    pub values: Vec<f64>,
}

impl ChartSeries {
    pub fn new(timestamps: Vec<String>, values: Vec<f64>) -> Self {
        Self { timestamps, values }
    }
}

/// Rounded value-axis range with exactly three tick labels
/// spanning the true extrema of the underlying samples.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisBounds {
    pub min: f64,
    pub max: f64,
    pub ticks: [f64; 3],
}

impl AxisBounds {
    pub fn new(min: f64, max: f64, ticks: [f64; 3]) -> Self {
        Self { min, max, ticks }
    }
}

/// Output of one transform pass: the culled series plus its axis bounds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphData {
    pub series: ChartSeries,
    pub bounds: AxisBounds,
}

impl GraphData {
    pub fn new(series: ChartSeries, bounds: AxisBounds) -> Self {
        Self { series, bounds }
    }
}
