// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};

use axum::{routing::get, Router};
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use crate::application::graph_service::GraphService;
use crate::infrastructure::config::{load_catalog_config, load_service_config};
use crate::infrastructure::http_repository::HttpMetricRepository;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{get_graph, health_check, list_metrics};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let service_config = load_service_config()?;
    let catalog = load_catalog_config()?;

    // Create repository (infrastructure layer)
    let repository = Arc::new(HttpMetricRepository::new(service_config.store.base_url));

    // Create service (application layer)
    let graph_service = GraphService::new(repository, catalog.clone());

    // Create application state
    let state = Arc::new(AppState {
        graph_service,
        catalog,
    });

    // Build router (presentation layer)
    let router = Router::new()
        .route("/healthz", get(health_check))
        .route("/metrics", get(list_metrics))
        .route("/graphs/:metric_id", get(get_graph))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr: SocketAddr = service_config.server.bind.parse()?;
    println!("Starting metric-graph service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
