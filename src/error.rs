// ABOUTME: Custom error types for the job trends client
// ABOUTME: Separates transport failures, empty analytics results, and form validation

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobTrendsError {
    /// Request could not be sent, or the API answered with a non-2xx status.
    /// `detail` is the server-provided message when one was returned.
    Network { status: Option<u16>, detail: String },
    /// Filtering produced no records for the given query and year range.
    EmptyResult {
        query: String,
        start_year: i32,
        end_year: i32,
    },
    /// A required field was missing on submit.
    Validation(String),
    /// The response body did not have the expected shape.
    Decode(String),
}

impl JobTrendsError {
    pub fn network(detail: impl Into<String>) -> Self {
        JobTrendsError::Network {
            status: None,
            detail: detail.into(),
        }
    }

    pub fn http(status: u16, detail: impl Into<String>) -> Self {
        JobTrendsError::Network {
            status: Some(status),
            detail: detail.into(),
        }
    }

    /// HTTP status carried by a network error, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            JobTrendsError::Network { status, .. } => *status,
            _ => None,
        }
    }

    /// Message suitable for a notification: the server detail for network
    /// errors, the full description otherwise.
    pub fn detail(&self) -> String {
        match self {
            JobTrendsError::Network { detail, .. } => detail.clone(),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for JobTrendsError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            JobTrendsError::Network {
                status: Some(status),
                detail,
            } => write!(f, "Network error (HTTP {}): {}", status, detail),
            JobTrendsError::Network {
                status: None,
                detail,
            } => write!(f, "Network error: {}", detail),
            JobTrendsError::EmptyResult {
                query,
                start_year,
                end_year,
            } => write!(
                f,
                "No jobs found matching \"{}\" between {}-{}",
                query, start_year, end_year
            ),
            JobTrendsError::Validation(msg) => write!(f, "Validation error: {}", msg),
            JobTrendsError::Decode(msg) => write!(f, "Decode error: {}", msg),
        }
    }
}

impl std::error::Error for JobTrendsError {}

impl From<reqwest::Error> for JobTrendsError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            JobTrendsError::Decode(err.to_string())
        } else {
            JobTrendsError::Network {
                status: err.status().map(|s| s.as_u16()),
                detail: err.to_string(),
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, JobTrendsError>;

/// Recover the error kind from an `anyhow` chain.
pub fn as_job_error(err: &anyhow::Error) -> Option<&JobTrendsError> {
    err.downcast_ref::<JobTrendsError>()
}
