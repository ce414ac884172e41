// ABOUTME: Library root for the jobtrends admin client
// ABOUTME: Exposes the API client, listing controller, and trend analytics

pub mod analytics;
pub mod commands;
pub mod config;
pub mod error;
pub mod listing;
pub mod output;
pub mod prompt;
pub mod remote;

#[cfg(test)]
pub(crate) mod testing;

pub use error::JobTrendsError;
