// ABOUTME: Job-specific analytics module
// ABOUTME: Loads the full job set and aggregates salary/count trends by work year

pub mod trend;

pub use trend::{aggregate, TrendPoint, TrendQuery, TrendReport, TrendStats};

use tracing::info;

use crate::error::Result;
use crate::remote::JobsApi;

/// Validate the query, fetch up to `fetch_limit` records, and aggregate them.
///
/// `fetch_limit` stands in for "all records"; anything past it is not seen.
pub async fn load_trends<A: JobsApi>(
    api: &A,
    query: &TrendQuery,
    fetch_limit: u64,
) -> Result<TrendReport> {
    query.validate()?;

    let records = api.list_jobs(0, fetch_limit).await?;
    info!(
        "Analyzing {} jobs for \"{}\" between {}-{}",
        records.len(),
        query.text,
        query.start_year,
        query.end_year
    );

    query.run(&records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::JobTrendsError;
    use crate::testing::{sample_records, FakeApi};

    #[tokio::test]
    async fn test_load_trends_fetches_once_with_limit() {
        let api = FakeApi::with_records(sample_records(12));
        let report = load_trends(&api, &TrendQuery::new("job 1", 2020, 2024), 10_000)
            .await
            .unwrap();

        // "Job 1", "Job 10", "Job 11", "Job 12"
        assert_eq!(report.stats.total_jobs, 4);
        assert_eq!(api.calls(), vec!["list 0 10000".to_string()]);
    }

    #[tokio::test]
    async fn test_blank_query_never_hits_the_api() {
        let api = FakeApi::with_records(sample_records(3));
        let err = load_trends(&api, &TrendQuery::new("", 2020, 2024), 10_000)
            .await
            .unwrap_err();
        assert!(matches!(err, JobTrendsError::Validation(_)));
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_fetch_failure_is_network_error() {
        let api = FakeApi::with_records(sample_records(3));
        api.fail_list();
        let err = load_trends(&api, &TrendQuery::new("job", 2020, 2024), 10_000)
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(500));
    }
}
