// HTTP request handlers
use crate::application::graph_service::GraphError;
use crate::domain::timeframe::TimeFrame;
use crate::presentation::app_state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Deserialize)]
pub struct GraphQuery {
    pub date: Option<NaiveDate>,
    pub timeframe: Option<TimeFrame>,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// List the metric catalog
pub async fn list_metrics(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.catalog.metrics.clone())
}

/// Build the graph panel for one metric. The date defaults to today
/// (UTC) here at the edge; everything below takes it explicitly.
pub async fn get_graph(
    Path(metric_id): Path<String>,
    Query(query): Query<GraphQuery>,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let date = query.date.unwrap_or_else(|| Utc::now().date_naive());
    let timeframe = query.timeframe.unwrap_or_default();

    match state.graph_service.get_graph(&metric_id, date, timeframe).await {
        Ok(graph) => Json(graph).into_response(),
        Err(e) => {
            let status = match &e {
                GraphError::UnknownMetric(_) | GraphError::NoSamples { .. } => StatusCode::NOT_FOUND,
                GraphError::Fetch(_) => StatusCode::BAD_GATEWAY,
            };
            tracing::error!("graph request for {} failed: {}", metric_id, e);
            let body = serde_json::json!({ "message": e.to_string() });
            (status, Json(body)).into_response()
        }
    }
}
