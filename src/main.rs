// ABOUTME: Command-line entry point for the jobtrends admin client
// ABOUTME: Parses arguments, loads configuration, initializes logging, and dispatches commands

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use jobtrends::analytics::TrendQuery;
use jobtrends::commands::{self, DraftArgs, ListArgs};
use jobtrends::config::Config;
use jobtrends::prompt::{AssumeYes, Prompter, TerminalPrompter};
use jobtrends::remote::RemoteClient;
use jobtrends::error::as_job_error;
use jobtrends::JobTrendsError;

#[derive(Parser)]
#[command(name = "jobtrends")]
#[command(about = "Browse, edit, and analyze job postings served by the Job Trends API", long_about = None)]
#[command(version)]
struct Cli {
    /// Base URL of the jobs API (overrides config and JOBTRENDS_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Path to a TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print JSON instead of tables
    #[arg(long, global = true)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the total number of jobs
    Dashboard,
    /// Check that the API is up
    Health,
    /// Show the server-side analytics summary
    Summary,
    /// List jobs with search, sort, and pagination
    List(ListArgs),
    /// Show one job
    Show { id: i64 },
    /// Create a job
    Create(DraftArgs),
    /// Edit a job; fields not given keep their current value
    Edit {
        id: i64,
        #[command(flatten)]
        fields: DraftArgs,
    },
    /// Delete a job after confirmation
    Delete {
        id: i64,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Salary and posting trends by year for a job title
    Trends {
        /// Job title or keywords
        query: String,
        #[arg(long = "from")]
        start_year: Option<i32>,
        #[arg(long = "to")]
        end_year: Option<i32>,
        /// Also list every matching job
        #[arg(long)]
        jobs: bool,
    },
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::discover(cli.config.as_deref())?.with_api_url(cli.api_url);
    debug!("Using API at {}", config.api.base_url);

    let client = RemoteClient::new(config.api.base_url.clone(), config.timeout())
        .context("Failed to create API client")?;
    let json = cli.json;

    match cli.command {
        Commands::Dashboard => commands::dashboard(&client, json).await,
        Commands::Health => commands::health(&client, json).await,
        Commands::Summary => commands::summary(&client, json).await,
        Commands::List(args) => commands::list(&client, &config, &args, json).await,
        Commands::Show { id } => commands::show(&client, id, json).await,
        Commands::Create(fields) => {
            commands::create(&client, &config, &TerminalPrompter, &fields, json).await
        }
        Commands::Edit { id, fields } => {
            commands::edit(&client, &config, &TerminalPrompter, id, &fields, json).await
        }
        Commands::Delete { id, yes } => {
            let prompter: &dyn Prompter = if yes { &AssumeYes } else { &TerminalPrompter };
            commands::delete(&client, &config, prompter, id).await
        }
        Commands::Trends {
            query,
            start_year,
            end_year,
            jobs,
        } => {
            let query = TrendQuery::new(
                query,
                start_year.unwrap_or(config.analytics.start_year),
                end_year.unwrap_or(config.analytics.end_year),
            );
            commands::trends(&client, &config, &query, jobs, json).await
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            match as_job_error(&e) {
                Some(JobTrendsError::Validation(_)) => ExitCode::from(2),
                _ => ExitCode::FAILURE,
            }
        }
    }
}
