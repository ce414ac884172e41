// ABOUTME: Job-specific trend analysis and server summary commands
// ABOUTME: Empty results are reported inline rather than as a failure exit

use anyhow::{Context, Result};

use super::{print_json, spinner};
use crate::analytics::{load_trends, TrendQuery};
use crate::config::Config;
use crate::error::JobTrendsError;
use crate::output;
use crate::remote::RemoteClient;

pub async fn trends(
    client: &RemoteClient,
    config: &Config,
    query: &TrendQuery,
    show_jobs: bool,
    json: bool,
) -> Result<()> {
    let pb = spinner("Analyzing…", json);
    let result = load_trends(client, query, config.analytics.fetch_limit).await;
    pb.finish_and_clear();

    match result {
        Ok(report) if json => print_json(&report),
        Ok(report) => {
            print!("{}", output::render_trends(&report, show_jobs));
            Ok(())
        }
        Err(e @ JobTrendsError::EmptyResult { .. }) => {
            if json {
                print_json(&serde_json::json!({ "error": e.to_string() }))
            } else {
                println!("{}", e);
                Ok(())
            }
        }
        Err(e) => Err(e).context("Failed to fetch data"),
    }
}

pub async fn summary(client: &RemoteClient, json: bool) -> Result<()> {
    let pb = spinner("Loading analytics…", json);
    let result = client.analytics_summary().await;
    pb.finish_and_clear();

    let summary = result.context("Failed to load analytics summary")?;
    if json {
        return print_json(&summary);
    }
    print!("{}", output::render_summary(&summary));
    Ok(())
}
