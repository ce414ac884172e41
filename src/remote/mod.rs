// ABOUTME: Remote jobs API module
// ABOUTME: Defines the JobsApi seam, the HTTP client, and the dashboard total with fallback

pub mod client;
pub mod models;

use std::fmt;
use std::future::Future;

use tracing::{info, warn};

pub use client::RemoteClient;
pub use models::{JobPayload, JobRecord};

use crate::error::Result;

/// Operations the client needs from the jobs API.
pub trait JobsApi {
    fn list_jobs(&self, skip: u64, limit: u64)
        -> impl Future<Output = Result<Vec<JobRecord>>> + Send;

    fn count_jobs(&self) -> impl Future<Output = Result<u64>> + Send;

    fn get_job(&self, job_id: i64) -> impl Future<Output = Result<JobRecord>> + Send;

    fn create_job(&self, payload: &JobPayload)
        -> impl Future<Output = Result<JobRecord>> + Send;

    fn update_job(
        &self,
        job_id: i64,
        payload: &JobPayload,
    ) -> impl Future<Output = Result<JobRecord>> + Send;

    fn delete_job(&self, job_id: i64) -> impl Future<Output = Result<()>> + Send;
}

/// Total shown on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobTotal {
    Known(u64),
    Unknown,
}

impl fmt::Display for JobTotal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            JobTotal::Known(total) => write!(f, "{}", total),
            JobTotal::Unknown => write!(f, "unknown"),
        }
    }
}

/// Fetch the job total. When the count endpoint fails, probe a single row so
/// an empty database still reports 0; anything else degrades to `Unknown`.
pub async fn job_total<A: JobsApi>(api: &A) -> JobTotal {
    match api.count_jobs().await {
        Ok(total) => JobTotal::Known(total),
        Err(e) => {
            warn!("Error fetching job count: {}", e);
            match api.list_jobs(0, 1).await {
                Ok(rows) if rows.is_empty() => JobTotal::Known(0),
                Ok(_) => JobTotal::Unknown,
                Err(e) => {
                    info!("Fallback probe failed as well: {}", e);
                    JobTotal::Unknown
                }
            }
        }
    }
}
