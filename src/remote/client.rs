// ABOUTME: HTTP client for communicating with the jobs REST API
// ABOUTME: Handles CRUD requests, count/summary/health probes, and error detail extraction

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};

use super::models::{AnalyticsSummary, ErrorBody, HealthStatus, JobCount, JobPayload, JobRecord};
use super::JobsApi;
use crate::error::{JobTrendsError, Result};

pub struct RemoteClient {
    client: Client,
    api_base_url: String,
}

impl RemoteClient {
    /// Build a client for `api_base_url`. No timeout is applied unless one is
    /// given; the transport defaults are used otherwise.
    pub fn new(api_base_url: String, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| {
            JobTrendsError::network(format!("Failed to create HTTP client: {}", e))
        })?;

        Ok(Self {
            client,
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.api_base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base_url, path)
    }

    pub async fn analytics_summary(&self) -> Result<AnalyticsSummary> {
        let url = self.url("/analytics/summary");
        let response = self.client.get(&url).send().await?;
        let response = ensure_success(response, "Failed to load analytics summary").await?;
        decode(response).await
    }

    pub async fn health(&self) -> Result<HealthStatus> {
        let url = self.url("/health");
        let response = self.client.get(&url).send().await?;
        let response = ensure_success(response, "Health check failed").await?;
        decode(response).await
    }
}

impl JobsApi for RemoteClient {
    async fn list_jobs(&self, skip: u64, limit: u64) -> Result<Vec<JobRecord>> {
        let url = self.url("/jobs");
        debug!("GET {} skip={} limit={}", url, skip, limit);

        let response = self
            .client
            .get(&url)
            .query(&[("skip", skip), ("limit", limit)])
            .send()
            .await?;
        let response = ensure_success(response, "Failed to fetch jobs").await?;
        decode(response).await
    }

    async fn count_jobs(&self) -> Result<u64> {
        let url = self.url("/jobs/count");
        let response = self.client.get(&url).send().await?;
        let response = ensure_success(response, "Failed to count jobs").await?;
        let count: JobCount = decode(response).await?;
        Ok(count.total_jobs.unwrap_or(0))
    }

    async fn get_job(&self, job_id: i64) -> Result<JobRecord> {
        let url = self.url(&format!("/jobs/{}", job_id));
        let response = self.client.get(&url).send().await?;
        let response = ensure_success(response, "Failed to fetch job").await?;
        decode(response).await
    }

    async fn create_job(&self, payload: &JobPayload) -> Result<JobRecord> {
        let url = self.url("/jobs");
        debug!("POST {} payload={:?}", url, payload);

        let response = self.client.post(&url).json(payload).send().await?;
        let response = ensure_success(response, "Failed to create job").await?;
        decode(response).await
    }

    async fn update_job(&self, job_id: i64, payload: &JobPayload) -> Result<JobRecord> {
        let url = self.url(&format!("/jobs/{}", job_id));
        debug!("PUT {} payload={:?}", url, payload);

        let response = self.client.put(&url).json(payload).send().await?;
        let response = ensure_success(response, "Failed to update job").await?;
        decode(response).await
    }

    async fn delete_job(&self, job_id: i64) -> Result<()> {
        let url = self.url(&format!("/jobs/{}", job_id));
        debug!("DELETE {}", url);

        let response = self.client.delete(&url).send().await?;
        ensure_success(response, "Failed to delete job").await?;
        Ok(())
    }
}

/// Turn a non-2xx response into a `Network` error carrying the server detail.
async fn ensure_success(response: Response, fallback: &str) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let detail = error_detail(&body).unwrap_or_else(|| format!("{} (HTTP {})", fallback, status));
    warn!("Request failed with status {}: {}", status, detail);
    Err(JobTrendsError::http(status.as_u16(), detail))
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    response
        .json::<T>()
        .await
        .map_err(|e| JobTrendsError::Decode(e.to_string()))
}

/// Extract the `detail` field from an error body, if the body is JSON.
pub fn error_detail(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.detail_text())
}
