// ABOUTME: Dashboard total and API health commands
// ABOUTME: The total degrades to "unknown" instead of failing

use anyhow::{Context, Result};
use tracing::info;

use super::{print_json, spinner};
use crate::remote::{job_total, JobTotal, RemoteClient};

pub async fn dashboard(client: &RemoteClient, json: bool) -> Result<()> {
    let pb = spinner("Loading…", json);
    let total = job_total(client).await;
    pb.finish_and_clear();

    if json {
        let value = match total {
            JobTotal::Known(n) => serde_json::json!({ "total_jobs": n }),
            JobTotal::Unknown => serde_json::json!({ "total_jobs": "unknown" }),
        };
        return print_json(&value);
    }

    println!("Total Jobs in Database:");
    println!("{}", total);
    Ok(())
}

pub async fn health(client: &RemoteClient, json: bool) -> Result<()> {
    info!("Checking API health at {}", client.base_url());
    let status = client
        .health()
        .await
        .with_context(|| format!("API at {} is unreachable", client.base_url()))?;

    if json {
        return print_json(&status);
    }
    println!("{}: {}", status.status, status.message);
    if status.status != "healthy" {
        anyhow::bail!("API reported status '{}'", status.status);
    }
    Ok(())
}
