// ABOUTME: Client configuration loaded from an optional TOML file
// ABOUTME: CLI flags and JOBTRENDS_API_URL override file values, which override defaults

//! # Configuration Format
//!
//! ```toml
//! [api]
//! base_url = "http://127.0.0.1:8000"
//! timeout_secs = 30        # omit to use transport defaults
//!
//! [listing]
//! page_size = 25
//! fetch_limit = 5000
//!
//! [analytics]
//! fetch_limit = 10000
//! start_year = 2020
//! end_year = 2024
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::analytics::trend::{DEFAULT_END_YEAR, DEFAULT_FETCH_LIMIT, DEFAULT_START_YEAR};
use crate::listing::controller::DEFAULT_FETCH_LIMIT as LISTING_FETCH_LIMIT;
use crate::listing::paging::DEFAULT_PAGE_SIZE;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_CONFIG_FILE: &str = "jobtrends.toml";
pub const CONFIG_ENV: &str = "JOBTRENDS_CONFIG";
pub const API_URL_ENV: &str = "JOBTRENDS_API_URL";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub listing: ListingConfig,
    #[serde(default)]
    pub analytics: AnalyticsConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout; none means the HTTP client's own defaults.
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingConfig {
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default = "default_listing_fetch_limit")]
    pub fetch_limit: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    #[serde(default = "default_analytics_fetch_limit")]
    pub fetch_limit: u64,
    #[serde(default = "default_start_year")]
    pub start_year: i32,
    #[serde(default = "default_end_year")]
    pub end_year: i32,
}

fn default_base_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_listing_fetch_limit() -> u64 {
    LISTING_FETCH_LIMIT
}

fn default_analytics_fetch_limit() -> u64 {
    DEFAULT_FETCH_LIMIT
}

fn default_start_year() -> i32 {
    DEFAULT_START_YEAR
}

fn default_end_year() -> i32 {
    DEFAULT_END_YEAR
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: None,
        }
    }
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            fetch_limit: default_listing_fetch_limit(),
        }
    }
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            fetch_limit: default_analytics_fetch_limit(),
            start_year: default_start_year(),
            end_year: default_end_year(),
        }
    }
}

impl Config {
    /// Load configuration from `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    /// Resolve the config file: explicit path, then `JOBTRENDS_CONFIG`, then
    /// `./jobtrends.toml` if it exists. Defaults apply when none is found.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        let path = explicit
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from))
            .or_else(|| {
                let local = PathBuf::from(DEFAULT_CONFIG_FILE);
                local.exists().then_some(local)
            });

        match path {
            Some(path) => {
                tracing::debug!("Loading config from {}", path.display());
                Self::load(&path)
            }
            None => Ok(Self::default()),
        }
    }

    /// Apply the API URL override: CLI flag first, then environment.
    pub fn with_api_url(mut self, flag: Option<String>) -> Self {
        if let Some(url) = flag.or_else(|| std::env::var(API_URL_ENV).ok()) {
            self.api.base_url = url;
        }
        self
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.api.timeout_secs.map(Duration::from_secs)
    }
}
