// Graph service - Use case for building renderable graph panels
use crate::application::fetch::{failure_text, FetchState};
use crate::application::metric_repository::MetricRepository;
use crate::domain::graph::Graph;
use crate::domain::sample::{GraphData, Sample};
use crate::domain::timeframe::TimeFrame;
use crate::domain::transform::transform;
use crate::infrastructure::config::CatalogConfig;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("unknown metric: {0}")]
    UnknownMetric(String),
    #[error("no samples recorded for {metric_id} on {date}")]
    NoSamples { metric_id: String, date: NaiveDate },
    #[error("failed to fetch samples: {0}")]
    Fetch(String),
}

/// Fingerprint of everything a panel's output depends on. Comparing
/// fingerprints decides whether a cached transform can be reused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphInputs {
    pub sample_count: usize,
    pub last_timestamp: Option<String>,
    pub timeframe: TimeFrame,
}

impl GraphInputs {
    pub fn from_samples(samples: &[Sample], timeframe: TimeFrame) -> Self {
        Self {
            sample_count: samples.len(),
            last_timestamp: samples.last().map(|s| s.timestamp.clone()),
            timeframe,
        }
    }
}

/// A panel is recomputed only when its data or its timeframe changed
/// since the last pass.
pub fn should_recompute(prev: Option<&GraphInputs>, curr: &GraphInputs) -> bool {
    match prev {
        None => true,
        Some(prev) => prev != curr,
    }
}

/// Per-metric panel state. A panel shows one date at a time, so each
/// metric keeps exactly one entry and the map stays bounded by the
/// catalog no matter which dates clients ask for.
struct PanelEntry {
    date: NaiveDate,
    status: FetchState,
    rendered: Option<(GraphInputs, GraphData)>,
}

#[derive(Clone)]
pub struct GraphService {
    repository: Arc<dyn MetricRepository>,
    catalog: CatalogConfig,
    panels: Arc<Mutex<HashMap<String, PanelEntry>>>,
}

/// Entry for a panel, resetting any state carried over from a
/// different day.
fn panel_entry<'a>(
    panels: &'a mut HashMap<String, PanelEntry>,
    metric_id: &str,
    date: NaiveDate,
) -> &'a mut PanelEntry {
    let entry = panels.entry(metric_id.to_string()).or_insert_with(|| PanelEntry {
        date,
        status: FetchState::Pending,
        rendered: None,
    });
    if entry.date != date {
        entry.date = date;
        entry.status = FetchState::Pending;
        entry.rendered = None;
    }
    entry
}

impl GraphService {
    pub fn new(repository: Arc<dyn MetricRepository>, catalog: CatalogConfig) -> Self {
        Self {
            repository,
            catalog,
            panels: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Build the graph panel for one metric and calendar day. The date
    /// is always explicit; "today" is the caller's decision.
    pub async fn get_graph(
        &self,
        metric_id: &str,
        date: NaiveDate,
        timeframe: TimeFrame,
    ) -> Result<Graph, GraphError> {
        let metric = self
            .catalog
            .find(metric_id)
            .ok_or_else(|| GraphError::UnknownMetric(metric_id.to_string()))?
            .clone();

        self.set_status(&metric.id, date, FetchState::Pending);

        let result = self.repository.fetch_samples(metric_id, date).await;
        self.set_status(&metric.id, date, FetchState::from_result(&result));

        let samples = result.map_err(|e| GraphError::Fetch(failure_text(&e)))?;
        let inputs = GraphInputs::from_samples(&samples, timeframe);

        let data = {
            let mut panels = self.panels.lock().unwrap();
            let entry = panel_entry(&mut panels, &metric.id, date);

            let reusable = entry
                .rendered
                .as_ref()
                .filter(|(prev, _)| !should_recompute(Some(prev), &inputs))
                .map(|(_, data)| data.clone());

            match reusable {
                Some(data) => {
                    tracing::debug!("reusing cached graph for {} on {}", metric.id, date);
                    data
                }
                None => {
                    let data = transform(&samples, timeframe).ok_or(GraphError::NoSamples {
                        metric_id: metric.id.clone(),
                        date,
                    })?;
                    entry.rendered = Some((inputs, data.clone()));
                    data
                }
            }
        };

        Ok(Graph::new(metric.id, metric.title, metric.unit, timeframe, date, data))
    }

    /// Current fetch state of a panel, if its most recent fetch was
    /// for this date.
    pub fn panel_status(&self, metric_id: &str, date: NaiveDate) -> Option<FetchState> {
        let panels = self.panels.lock().unwrap();
        panels
            .get(metric_id)
            .filter(|e| e.date == date)
            .map(|e| e.status.clone())
    }

    fn set_status(&self, metric_id: &str, date: NaiveDate, status: FetchState) {
        let mut panels = self.panels.lock().unwrap();
        panel_entry(&mut panels, metric_id, date).status = status;
    }
}
