// HTTP metric store repository implementation
use crate::application::metric_repository::MetricRepository;
use crate::domain::sample::Sample;
use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{Datelike, NaiveDate};

/// Reads daily metric documents from an HTTP document store laid out
/// as `metrics/{id}/{year}/{month}/{day}.json`, each document a JSON
/// array of `{timestamp, value}` objects.
#[derive(Debug, Clone)]
pub struct HttpMetricRepository {
    base_url: String,
    client: reqwest::Client,
}

impl HttpMetricRepository {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    fn document_url(&self, metric_id: &str, date: NaiveDate) -> String {
        let encoded_id = urlencoding::encode(metric_id);
        format!(
            "{}/metrics/{}/{}/{}/{}.json",
            self.base_url,
            encoded_id,
            date.year(),
            date.month(),
            date.day()
        )
    }
}

#[async_trait]
impl MetricRepository for HttpMetricRepository {
    async fn fetch_samples(&self, metric_id: &str, date: NaiveDate) -> Result<Vec<Sample>> {
        let url = self.document_url(metric_id, date);
        tracing::debug!("fetching metric document: {}", url);

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .context("failed to reach the metric store")?;

        // A missing document just means nothing was recorded that day.
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(Vec::new());
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("metric store returned {}: {}", status, body);
        }

        let samples = response
            .json::<Vec<Sample>>()
            .await
            .context("failed to parse metric document")?;

        tracing::debug!("got {} samples for {} on {}", samples.len(), metric_id, date);
        Ok(samples)
    }
}
