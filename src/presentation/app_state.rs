// Application state for HTTP handlers
use crate::application::graph_service::GraphService;
use crate::infrastructure::config::CatalogConfig;

#[derive(Clone)]
pub struct AppState {
    pub graph_service: GraphService,
    pub catalog: CatalogConfig,
}
