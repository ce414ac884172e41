// ABOUTME: Plain-text rendering of listing pages, job details, and trend reports
// ABOUTME: Salary cells show n/a when no priced record backs the number

use std::fmt::Write;

use crate::analytics::{TrendReport, TrendStats};
use crate::listing::ListingController;
use crate::remote::models::AnalyticsSummary;
use crate::remote::JobRecord;

const MAX_COLUMN_WIDTH: usize = 32;

/// Truncate a string to `max_width` characters with an ellipsis.
fn truncate(value: &str, max_width: usize) -> String {
    if value.chars().count() <= max_width {
        value.to_string()
    } else if max_width <= 3 {
        value.chars().take(max_width).collect()
    } else {
        format!("{}...", value.chars().take(max_width - 3).collect::<String>())
    }
}

fn or_na(value: Option<&str>) -> &str {
    value.filter(|v| !v.is_empty()).unwrap_or("N/A")
}

/// Thousands separators: 120000 -> 120,000.
pub fn group_digits(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    if value < 0 {
        format!("-{}", out)
    } else {
        out
    }
}

fn money(value: i64, priced: usize) -> String {
    if priced == 0 {
        "n/a".to_string()
    } else {
        format!("${}", group_digits(value))
    }
}

pub fn render_page(listing: &ListingController) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Showing {} of {} jobs",
        listing.filtered_count(),
        listing.total_count()
    );
    if let Some(label) = listing.sort_state().label() {
        let _ = writeln!(out, "Sorted by {}", label);
    }
    let _ = writeln!(
        out,
        "{:>6}  {:<32}  {:>10}  {:<18}  {:<16}  {:<10}",
        "ID", "Job Title", "Salary", "Location", "Category", "Setting"
    );

    let rows = listing.page_rows();
    if rows.is_empty() {
        let _ = writeln!(out, "No jobs found matching \"{}\"", listing.search_term());
    }
    for job in rows {
        let salary = job
            .min_salary
            .map(|s| format!("${}", group_digits(s)))
            .unwrap_or_else(|| "N/A".to_string());
        let _ = writeln!(
            out,
            "{:>6}  {:<32}  {:>10}  {:<18}  {:<16}  {:<10}",
            job.job_id,
            truncate(job.job_title.as_deref().unwrap_or("Untitled"), MAX_COLUMN_WIDTH),
            salary,
            truncate(job.location.as_deref().unwrap_or("Remote"), 18),
            truncate(or_na(job.job_category.as_deref()), 16),
            or_na(job.work_setting.as_deref()),
        );
    }

    let _ = writeln!(
        out,
        "Page {} of {}",
        listing.current_page(),
        listing.total_pages()
    );
    out
}

pub fn render_job(job: &JobRecord) -> String {
    let mut out = String::new();
    let field = |out: &mut String, label: &str, value: Option<&str>| {
        let _ = writeln!(out, "{:<18}{}", format!("{}:", label), or_na(value));
    };

    let _ = writeln!(out, "{:<18}{}", "ID:", job.job_id);
    field(&mut out, "Title", job.job_title.as_deref());
    field(&mut out, "Company", job.company_display_name());
    field(&mut out, "Location", job.location.as_deref());
    field(&mut out, "Category", job.job_category.as_deref());
    let salary = |v: Option<i64>| v.map(|s| format!("${}", group_digits(s)));
    field(&mut out, "Min Salary", salary(job.min_salary).as_deref());
    field(&mut out, "Max Salary", salary(job.max_salary).as_deref());
    field(
        &mut out,
        "Year",
        job.work_year.map(|y| y.to_string()).as_deref(),
    );
    field(&mut out, "Experience", job.experience_level.as_deref());
    field(&mut out, "Employment", job.employment_type.as_deref());
    field(&mut out, "Work Setting", job.work_setting.as_deref());
    field(&mut out, "Company Size", job.company_size.as_deref());
    let skills = job.skill_names().join(", ");
    field(&mut out, "Skills", Some(skills.as_str()));
    if let Some(description) = job.job_description.as_deref() {
        let _ = writeln!(out, "\n{}", description);
    }
    out
}

fn render_stats(out: &mut String, stats: &TrendStats) {
    let _ = writeln!(out, "Total Jobs:   {}", stats.total_jobs);
    let _ = writeln!(out, "Avg Salary:   {}", money(stats.avg_salary, stats.priced_jobs));
    let _ = writeln!(out, "Min Salary:   {}", money(stats.min_salary, stats.priced_jobs));
    let _ = writeln!(out, "Max Salary:   {}", money(stats.max_salary, stats.priced_jobs));
    let _ = writeln!(out, "Locations:    {}", stats.unique_locations);
    let _ = writeln!(out, "Companies:    {}", stats.unique_companies);
}

pub fn render_trends(report: &TrendReport, show_jobs: bool) -> String {
    let mut out = String::new();
    render_stats(&mut out, &report.stats);

    let _ = writeln!(
        out,
        "\n{:>6}  {:>6}  {:>12}  {:>12}  {:>12}",
        "Year", "Jobs", "Avg", "Min", "Max"
    );
    for point in &report.points {
        let _ = writeln!(
            out,
            "{:>6}  {:>6}  {:>12}  {:>12}  {:>12}",
            point.year,
            point.count,
            money(point.avg_salary, point.priced_count),
            money(point.min_salary, point.priced_count),
            money(point.max_salary, point.priced_count),
        );
    }

    if show_jobs {
        let _ = writeln!(out, "\nAll Job Entries ({})", report.jobs.len());
        for job in &report.jobs {
            let salary = job
                .min_salary
                .map(|s| format!("${}", group_digits(s)))
                .unwrap_or_else(|| "N/A".to_string());
            let _ = writeln!(
                out,
                "{:>6}  {:<32}  {:>6}  {:>10}  {}",
                job.job_id,
                truncate(job.job_title.as_deref().unwrap_or("Untitled"), MAX_COLUMN_WIDTH),
                job.work_year.map(|y| y.to_string()).unwrap_or_default(),
                salary,
                or_na(job.location.as_deref()),
            );
        }
    }
    out
}

pub fn render_summary(summary: &AnalyticsSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Total Jobs:   {}", summary.total_jobs);
    let _ = writeln!(out, "Avg Salary:   ${}", group_digits(summary.avg_salary));

    let sections = [
        ("Top Skills", &summary.top_skills),
        ("Work Setting", &summary.work_setting),
        ("Company Size", &summary.company_size),
    ];
    for (title, entries) in sections {
        if entries.is_empty() {
            continue;
        }
        let _ = writeln!(out, "\n{}", title);
        for entry in entries {
            let _ = writeln!(out, "  {:<24}{:>8}", truncate(&entry.name, 24), entry.count);
        }
    }

    if !summary.salary_trend.is_empty() {
        let _ = writeln!(out, "\nSalary Trend");
        for point in &summary.salary_trend {
            let _ = writeln!(out, "  {:<8}${}", point.year, group_digits(point.salary));
        }
    }
    out
}
