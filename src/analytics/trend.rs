// ABOUTME: Year-bucketed salary and posting-count trends for a title query
// ABOUTME: Pure transform over already-fetched job records

use std::collections::{BTreeMap, HashSet};

use serde::Serialize;
use tracing::debug;

use crate::error::{JobTrendsError, Result};
use crate::remote::JobRecord;

pub const DEFAULT_START_YEAR: i32 = 2020;
pub const DEFAULT_END_YEAR: i32 = 2024;

/// Number of records requested when loading the analytics data set.
pub const DEFAULT_FETCH_LIMIT: u64 = 10_000;

/// A trend request as entered by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrendQuery {
    pub text: String,
    pub start_year: i32,
    pub end_year: i32,
}

impl TrendQuery {
    pub fn new(text: impl Into<String>, start_year: i32, end_year: i32) -> Self {
        Self {
            text: text.into(),
            start_year,
            end_year,
        }
    }

    /// Reject a blank search before anything is fetched. The year range is not
    /// checked here; an inverted range simply matches nothing.
    pub fn validate(&self) -> Result<()> {
        if self.text.trim().is_empty() {
            return Err(JobTrendsError::Validation(
                "Please enter a job title or keywords".to_string(),
            ));
        }
        Ok(())
    }

    pub fn run(&self, records: &[JobRecord]) -> Result<TrendReport> {
        aggregate(records, &self.text, self.start_year, self.end_year)
    }
}

#[derive(Debug, Default)]
struct YearBucket {
    count: usize,
    total_salary: i128,
    salaries: Vec<i64>,
}

/// Chart-ready statistics for one work year.
///
/// Salary fields are 0 when no record in the year is priced; `priced_count`
/// tells that case apart from a real zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrendPoint {
    pub year: i32,
    pub count: usize,
    pub priced_count: usize,
    pub avg_salary: i64,
    pub min_salary: i64,
    pub max_salary: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrendStats {
    pub total_jobs: usize,
    pub priced_jobs: usize,
    pub avg_salary: i64,
    pub min_salary: i64,
    pub max_salary: i64,
    pub unique_locations: usize,
    pub unique_companies: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct TrendReport {
    pub points: Vec<TrendPoint>,
    pub stats: TrendStats,
    /// Matched records in input order.
    pub jobs: Vec<JobRecord>,
}

fn title_matches(record: &JobRecord, needle: &str) -> bool {
    record
        .job_title
        .as_deref()
        .map(|title| title.to_lowercase().contains(needle))
        .unwrap_or(false)
}

fn year_in_range(record: &JobRecord, start_year: i32, end_year: i32) -> bool {
    matches!(record.work_year, Some(year) if year >= start_year && year <= end_year)
}

/// Returns (average, min, max); all 0 for an empty slice.
fn salary_summary(total: i128, salaries: &[i64]) -> (i64, i64, i64) {
    if salaries.is_empty() {
        return (0, 0, 0);
    }
    let avg = (total as f64 / salaries.len() as f64).round() as i64;
    let min = salaries.iter().copied().min().unwrap_or(0);
    let max = salaries.iter().copied().max().unwrap_or(0);
    (avg, min, max)
}

/// Filter `records` by case-insensitive title substring and inclusive work
/// year range, then summarize per year and overall.
pub fn aggregate(
    records: &[JobRecord],
    query: &str,
    start_year: i32,
    end_year: i32,
) -> Result<TrendReport> {
    let needle = query.to_lowercase();
    let matched: Vec<&JobRecord> = records
        .iter()
        .filter(|r| title_matches(r, &needle) && year_in_range(r, start_year, end_year))
        .collect();

    if matched.is_empty() {
        return Err(JobTrendsError::EmptyResult {
            query: query.to_string(),
            start_year,
            end_year,
        });
    }

    let mut buckets: BTreeMap<i32, YearBucket> = BTreeMap::new();
    let mut all_salaries = Vec::new();
    let mut locations = HashSet::new();
    let mut companies = HashSet::new();

    for record in &matched {
        // year_in_range guarantees a work year
        let Some(year) = record.work_year else {
            continue;
        };
        let bucket = buckets.entry(year).or_default();
        bucket.count += 1;
        if let Some(salary) = record.priced_salary() {
            bucket.total_salary += i128::from(salary);
            bucket.salaries.push(salary);
            all_salaries.push(salary);
        }

        if let Some(location) = record.location.as_deref().filter(|l| !l.is_empty()) {
            locations.insert(location);
        }
        if let Some(company) = record.company_display_name() {
            companies.insert(company);
        }
    }

    let points: Vec<TrendPoint> = buckets
        .into_iter()
        .map(|(year, bucket)| {
            let (avg_salary, min_salary, max_salary) =
                salary_summary(bucket.total_salary, &bucket.salaries);
            TrendPoint {
                year,
                count: bucket.count,
                priced_count: bucket.salaries.len(),
                avg_salary,
                min_salary,
                max_salary,
            }
        })
        .collect();

    let total: i128 = all_salaries.iter().copied().map(i128::from).sum();
    let (avg_salary, min_salary, max_salary) = salary_summary(total, &all_salaries);
    let stats = TrendStats {
        total_jobs: matched.len(),
        priced_jobs: all_salaries.len(),
        avg_salary,
        min_salary,
        max_salary,
        unique_locations: locations.len(),
        unique_companies: companies.len(),
    };

    debug!(
        "Aggregated {} of {} records into {} year buckets",
        stats.total_jobs,
        records.len(),
        points.len()
    );

    Ok(TrendReport {
        points,
        stats,
        jobs: matched.into_iter().cloned().collect(),
    })
}
