// ABOUTME: Job listing, detail, create, edit, and delete commands
// ABOUTME: Mutations go through ListingController so outcomes are reported uniformly

use anyhow::{Context, Result};
use clap::Args;
use dialoguer::Input;
use tracing::warn;

use super::{print_json, spinner};
use crate::config::Config;
use crate::listing::{DeleteIntent, JobDraft, ListingController, SortKey};
use crate::output;
use crate::prompt::Prompter;
use crate::remote::{JobsApi, RemoteClient};

#[derive(Debug, Clone, Args)]
pub struct ListArgs {
    /// Filter by title, location, company, or category
    #[arg(short, long)]
    pub search: Option<String>,

    /// Column to sort by; repeat to toggle direction (id, title, salary, location, category, year)
    #[arg(long = "sort", value_name = "COLUMN")]
    pub sort: Vec<SortKey>,

    /// Page to show; out-of-range values are clamped
    #[arg(short, long, default_value_t = 1)]
    pub page: usize,
}

/// Form fields. Anything not given keeps its current value.
#[derive(Debug, Clone, Default, Args)]
pub struct DraftArgs {
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub company: Option<String>,
    #[arg(long)]
    pub location: Option<String>,
    #[arg(long)]
    pub category: Option<String>,
    #[arg(long)]
    pub min_salary: Option<String>,
    #[arg(long)]
    pub max_salary: Option<String>,
    /// Entry-level, Mid-level, Senior, Executive
    #[arg(long)]
    pub experience: Option<String>,
    #[arg(long)]
    pub employment_type: Option<String>,
    /// Remote, Hybrid, In-person
    #[arg(long)]
    pub work_setting: Option<String>,
    /// Small, Medium, Large
    #[arg(long)]
    pub company_size: Option<String>,
    #[arg(long)]
    pub year: Option<String>,
    /// Comma-separated, e.g. "Python, SQL, React"
    #[arg(long)]
    pub skills: Option<String>,
    /// Prompt for every field, pre-filled with the current value
    #[arg(short, long)]
    pub interactive: bool,
}

impl DraftArgs {
    pub fn apply(&self, draft: &mut JobDraft) {
        let updates = [
            (&self.title, &mut draft.job_title),
            (&self.description, &mut draft.job_description),
            (&self.company, &mut draft.company_name),
            (&self.location, &mut draft.location),
            (&self.category, &mut draft.job_category),
            (&self.min_salary, &mut draft.min_salary),
            (&self.max_salary, &mut draft.max_salary),
            (&self.experience, &mut draft.experience_level),
            (&self.employment_type, &mut draft.employment_type),
            (&self.work_setting, &mut draft.work_setting),
            (&self.company_size, &mut draft.company_size),
            (&self.year, &mut draft.work_year),
            (&self.skills, &mut draft.skills),
        ];
        for (value, field) in updates {
            if let Some(value) = value {
                *field = value.clone();
            }
        }
    }

    fn fill(&self, draft: &mut JobDraft) -> Result<()> {
        self.apply(draft);
        if self.interactive {
            for (label, field) in draft.fields_mut() {
                *field = Input::<String>::new()
                    .with_prompt(label)
                    .with_initial_text(field.clone())
                    .allow_empty(true)
                    .interact_text()
                    .with_context(|| format!("Failed to read {}", label))?;
            }
        }
        Ok(())
    }
}

async fn load_listing(
    client: &RemoteClient,
    config: &Config,
    quiet: bool,
) -> Result<ListingController> {
    let mut listing = ListingController::new(config.listing.page_size, config.listing.fetch_limit);
    let pb = spinner("Loading jobs…", quiet);
    let result = listing.reload(client).await;
    pb.finish_and_clear();
    result.context("Failed to load jobs")?;
    Ok(listing)
}

pub async fn list(
    client: &RemoteClient,
    config: &Config,
    args: &ListArgs,
    json: bool,
) -> Result<()> {
    let mut listing = load_listing(client, config, json).await?;

    if let Some(term) = &args.search {
        listing.search(term);
    }
    for key in &args.sort {
        listing.sort(*key);
    }
    listing.go_to_page(args.page);

    if json {
        return print_json(&listing.page_rows());
    }
    print!("{}", output::render_page(&listing));
    Ok(())
}

pub async fn show(client: &RemoteClient, job_id: i64, json: bool) -> Result<()> {
    let job = client
        .get_job(job_id)
        .await
        .with_context(|| format!("Failed to fetch job {}", job_id))?;

    if json {
        return print_json(&job);
    }
    print!("{}", output::render_job(&job));
    Ok(())
}

pub async fn create(
    client: &RemoteClient,
    config: &Config,
    prompter: &dyn Prompter,
    args: &DraftArgs,
    json: bool,
) -> Result<()> {
    let mut draft = JobDraft::default();
    args.fill(&mut draft)?;

    let mut listing = ListingController::new(config.listing.page_size, config.listing.fetch_limit);
    let created = listing.create(client, prompter, &draft).await?;
    if json {
        return print_json(&created);
    }
    print!("{}", output::render_job(&created));
    Ok(())
}

pub async fn edit(
    client: &RemoteClient,
    config: &Config,
    prompter: &dyn Prompter,
    job_id: i64,
    args: &DraftArgs,
    json: bool,
) -> Result<()> {
    let mut listing = ListingController::new(config.listing.page_size, config.listing.fetch_limit);
    let record = client
        .get_job(job_id)
        .await
        .with_context(|| format!("Failed to fetch job {}", job_id))?;

    let mut draft = listing.edit(&record);
    args.fill(&mut draft)?;

    let intent = draft.into_update(record.job_id);
    let updated = listing.save(client, prompter, &intent).await?;
    if json {
        return print_json(&updated);
    }
    print!("{}", output::render_job(&updated));
    Ok(())
}

pub async fn delete(
    client: &RemoteClient,
    config: &Config,
    prompter: &dyn Prompter,
    job_id: i64,
) -> Result<()> {
    let mut listing = ListingController::new(config.listing.page_size, config.listing.fetch_limit);
    let intent = match client.get_job(job_id).await {
        Ok(record) => listing.delete(&record),
        Err(e) => {
            // Let the API have the final word on whether the job exists.
            warn!("Could not load job {} before deleting: {}", job_id, e);
            DeleteIntent {
                job_id,
                title: format!("job #{}", job_id),
            }
        }
    };

    listing.remove(client, prompter, &intent).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct Harness {
        #[command(flatten)]
        fields: DraftArgs,
        #[arg(long = "sort")]
        sort: Vec<SortKey>,
    }

    #[test]
    fn test_flags_override_only_given_fields() {
        let harness = Harness::parse_from([
            "jobtrends",
            "--title",
            "Senior Data Engineer",
            "--skills",
            "Rust, SQL",
            "--sort",
            "salary",
            "--sort",
            "salary",
        ]);
        let mut draft = JobDraft {
            job_title: "Data Engineer".to_string(),
            location: "Berlin".to_string(),
            ..Default::default()
        };
        harness.fields.apply(&mut draft);

        assert_eq!(draft.job_title, "Senior Data Engineer");
        assert_eq!(draft.location, "Berlin");
        assert_eq!(draft.skills, "Rust, SQL");
        assert_eq!(harness.sort, vec![SortKey::MinSalary, SortKey::MinSalary]);
    }
}
