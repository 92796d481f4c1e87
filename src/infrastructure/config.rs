use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Clone)]
pub struct ServiceConfig {
    pub store: StoreSettings,
    pub server: ServerSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StoreSettings {
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub bind: String,
}

/// The metric catalog: one entry per graph panel the dashboard shows.
#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    #[serde(default)]
    pub metrics: Vec<MetricConfig>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct MetricConfig {
    pub id: String,
    pub title: String,
    pub unit: String,
}

impl CatalogConfig {
    pub fn find(&self, metric_id: &str) -> Option<&MetricConfig> {
        self.metrics.iter().find(|m| m.id == metric_id)
    }
}

pub fn load_service_config() -> anyhow::Result<ServiceConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/service"))
        .build()?;

    Ok(settings.try_deserialize()?)
}

pub fn load_catalog_config() -> anyhow::Result<CatalogConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/metrics"))
        .build()?;

    Ok(settings.try_deserialize()?)
}
