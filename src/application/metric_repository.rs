// Repository trait for metric sample access
use crate::domain::sample::Sample;
use async_trait::async_trait;
use chrono::NaiveDate;

#[async_trait]
pub trait MetricRepository: Send + Sync {
    /// Fetch one calendar day of samples for a metric, oldest first.
    /// A day with no recorded data yields an empty vector, not an error.
    async fn fetch_samples(&self, metric_id: &str, date: NaiveDate) -> anyhow::Result<Vec<Sample>>;
}
