// Graph panel domain model
use super::sample::GraphData;
use super::timeframe::TimeFrame;
use chrono::NaiveDate;
use serde::Serialize;

/// One renderable graph panel: the transformed data plus the display
/// metadata a chart renderer needs alongside it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Graph {
    pub metric_id: String,
    pub title: String,
    pub unit: String,
    pub timeframe: TimeFrame,
    pub date: NaiveDate,
    pub tick_format: String,
    pub data: GraphData,
}

impl Graph {
    pub fn new(
        metric_id: String,
        title: String,
        unit: String,
        timeframe: TimeFrame,
        date: NaiveDate,
        data: GraphData,
    ) -> Self {
        Self {
            metric_id,
            title,
            unit,
            timeframe,
            date,
            tick_format: timeframe.tick_format().to_string(),
            data,
        }
    }
}
