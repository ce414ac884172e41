// ABOUTME: Editable text form for a job record and the intents it produces
// ABOUTME: Applies the single defaulting policy when a draft becomes an API payload

use crate::error::{JobTrendsError, Result};
use crate::remote::{JobPayload, JobRecord};

pub const DEFAULT_TITLE: &str = "Untitled";
pub const DEFAULT_COMPANY: &str = "Unknown Company";
pub const DEFAULT_LOCATION: &str = "Remote";
pub const DEFAULT_WORK_YEAR: i32 = 2024;

/// Form fields as text, the way a user edits them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobDraft {
    pub job_title: String,
    pub job_description: String,
    pub company_name: String,
    pub location: String,
    pub min_salary: String,
    pub max_salary: String,
    pub experience_level: String,
    pub employment_type: String,
    pub work_setting: String,
    pub job_category: String,
    pub company_size: String,
    pub work_year: String,
    /// Comma-separated skill names.
    pub skills: String,
}

fn text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

/// Blank text becomes `None` so it serializes as `null`.
fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn or_default(value: &str, default: &str) -> String {
    optional(value).unwrap_or_else(|| default.to_string())
}

/// Blank means "no salary" and stays `None`; other text that does not parse is 0.
fn salary(value: &str) -> Option<i64> {
    optional(value).map(|text| parse_leading_int(&text).unwrap_or(0))
}

/// Parse the leading integer of `input`, ignoring surrounding whitespace and
/// any trailing junk ("120000 USD" → 120000).
pub fn parse_leading_int(input: &str) -> Option<i64> {
    let trimmed = input.trim_start();
    let (sign, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<i64>().ok().map(|n| sign * n)
}

/// Split comma-separated skills, trimming and dropping empty entries.
pub fn parse_skills(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

impl JobDraft {
    /// Seed a draft from an existing record.
    pub fn from_record(record: &JobRecord) -> Self {
        Self {
            job_title: text(&record.job_title),
            job_description: text(&record.job_description),
            company_name: record.company_display_name().unwrap_or_default().to_string(),
            location: text(&record.location),
            min_salary: record.min_salary.map(|n| n.to_string()).unwrap_or_default(),
            max_salary: record.max_salary.map(|n| n.to_string()).unwrap_or_default(),
            experience_level: text(&record.experience_level),
            employment_type: text(&record.employment_type),
            work_setting: text(&record.work_setting),
            job_category: text(&record.job_category),
            company_size: text(&record.company_size),
            work_year: record.work_year.unwrap_or(DEFAULT_WORK_YEAR).to_string(),
            skills: record.skill_names().join(", "),
        }
    }

    /// Labelled mutable access to every field, in form order.
    pub fn fields_mut(&mut self) -> Vec<(&'static str, &mut String)> {
        vec![
            ("Job Title", &mut self.job_title),
            ("Description", &mut self.job_description),
            ("Company Name", &mut self.company_name),
            ("Location", &mut self.location),
            ("Category", &mut self.job_category),
            ("Min Salary", &mut self.min_salary),
            ("Max Salary", &mut self.max_salary),
            ("Experience Level", &mut self.experience_level),
            ("Employment Type", &mut self.employment_type),
            ("Work Setting", &mut self.work_setting),
            ("Company Size", &mut self.company_size),
            ("Year", &mut self.work_year),
            ("Skills (comma-separated)", &mut self.skills),
        ]
    }

    /// New postings must at least have a title.
    pub fn validate_for_create(&self) -> Result<()> {
        if self.job_title.trim().is_empty() {
            return Err(JobTrendsError::Validation("Job Title is required".to_string()));
        }
        Ok(())
    }

    pub fn to_payload(&self) -> JobPayload {
        JobPayload {
            job_title: or_default(&self.job_title, DEFAULT_TITLE),
            job_description: optional(&self.job_description),
            company_name: or_default(&self.company_name, DEFAULT_COMPANY),
            location: or_default(&self.location, DEFAULT_LOCATION),
            min_salary: salary(&self.min_salary),
            max_salary: salary(&self.max_salary),
            experience_level: optional(&self.experience_level),
            employment_type: optional(&self.employment_type),
            work_setting: optional(&self.work_setting),
            job_category: optional(&self.job_category),
            company_size: optional(&self.company_size),
            work_year: parse_leading_int(&self.work_year)
                .and_then(|year| i32::try_from(year).ok())
                .unwrap_or(DEFAULT_WORK_YEAR),
            skills: parse_skills(&self.skills),
        }
    }

    pub fn into_update(self, job_id: i64) -> UpdateIntent {
        UpdateIntent {
            job_id,
            payload: self.to_payload(),
        }
    }
}

/// A pending PUT of `payload` to `/jobs/{job_id}`.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateIntent {
    pub job_id: i64,
    pub payload: JobPayload,
}

/// A pending DELETE of `/jobs/{job_id}`, waiting for confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteIntent {
    pub job_id: i64,
    pub title: String,
}

impl DeleteIntent {
    pub fn for_record(record: &JobRecord) -> Self {
        Self {
            job_id: record.job_id,
            title: record
                .job_title
                .clone()
                .unwrap_or_else(|| DEFAULT_TITLE.to_string()),
        }
    }

    pub fn confirmation_message(&self) -> String {
        format!(
            "Are you sure you want to delete \"{}\"? This action cannot be undone.",
            self.title
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::trend::aggregate;
    use crate::remote::models::{Company, CompanyRef, SkillEntry};
    use crate::testing::job;

    fn full_record() -> JobRecord {
        JobRecord {
            job_id: 11,
            job_title: Some("Data Engineer".to_string()),
            company: Some(CompanyRef::Embedded(Company {
                company_id: Some(2),
                company_name: Some("Acme".to_string()),
            })),
            location: Some("Berlin".to_string()),
            min_salary: Some(90_000),
            work_year: Some(2023),
            work_setting: Some("Hybrid".to_string()),
            skills: Some(vec![
                SkillEntry::Name("SQL".to_string()),
                SkillEntry::Named {
                    skill_name: "Python".to_string(),
                },
            ]),
            ..Default::default()
        }
    }

    #[test]
    fn test_draft_flattens_skills_and_fills_blanks() {
        let draft = JobDraft::from_record(&full_record());
        assert_eq!(draft.skills, "SQL, Python");
        assert_eq!(draft.company_name, "Acme");
        assert_eq!(draft.min_salary, "90000");
        assert_eq!(draft.max_salary, "");
        assert_eq!(draft.experience_level, "");
        assert_eq!(draft.work_year, "2023");
    }

    #[test]
    fn test_unchanged_draft_round_trips_the_edited_fields() {
        let payload = JobDraft::from_record(&full_record()).to_payload();
        assert_eq!(payload.job_title, "Data Engineer");
        assert_eq!(payload.company_name, "Acme");
        assert_eq!(payload.min_salary, Some(90_000));
        assert_eq!(payload.max_salary, None);
        assert_eq!(payload.work_setting.as_deref(), Some("Hybrid"));
        assert_eq!(payload.experience_level, None);
        assert_eq!(payload.skills, vec!["SQL", "Python"]);
    }

    #[test]
    fn test_defaulting_policy() {
        let draft = JobDraft {
            min_salary: "lots".to_string(),
            max_salary: "120000 USD".to_string(),
            work_year: "soon".to_string(),
            skills: " Rust, ,  Go ,".to_string(),
            ..Default::default()
        };
        let payload = draft.to_payload();
        assert_eq!(payload.job_title, DEFAULT_TITLE);
        assert_eq!(payload.company_name, DEFAULT_COMPANY);
        assert_eq!(payload.location, DEFAULT_LOCATION);
        assert_eq!(payload.min_salary, Some(0));
        assert_eq!(payload.max_salary, Some(120_000));
        assert_eq!(payload.work_year, DEFAULT_WORK_YEAR);
        assert_eq!(payload.skills, vec!["Rust", "Go"]);
        assert_eq!(payload.job_category, None);
    }

    #[test]
    fn test_unpriced_record_stays_unpriced_after_edit() {
        let unpriced = job(2, "Data Analyst", 2022, None);
        let draft = JobDraft::from_record(&unpriced);
        assert_eq!(draft.min_salary, "");

        let payload = draft.to_payload();
        assert_eq!(payload.min_salary, None);
        assert_eq!(payload.max_salary, None);

        let value = serde_json::to_value(&payload).unwrap();
        assert!(value["min_salary"].is_null());

        let mut edited = unpriced.clone();
        edited.min_salary = payload.min_salary;
        edited.max_salary = payload.max_salary;
        let records = vec![job(1, "Data Analyst", 2022, Some(100_000)), edited];
        let report = aggregate(&records, "data analyst", 2020, 2024).unwrap();
        assert_eq!(report.stats.avg_salary, 100_000);
        assert_eq!(report.stats.priced_jobs, 1);
    }

    #[test]
    fn test_parse_leading_int() {
        assert_eq!(parse_leading_int(" 42"), Some(42));
        assert_eq!(parse_leading_int("-7x"), Some(-7));
        assert_eq!(parse_leading_int("+3"), Some(3));
        assert_eq!(parse_leading_int("x7"), None);
        assert_eq!(parse_leading_int(""), None);
    }

    #[test]
    fn test_create_requires_title() {
        assert!(matches!(
            JobDraft::default().validate_for_create(),
            Err(JobTrendsError::Validation(_))
        ));
        let draft = JobDraft {
            job_title: "Analyst".to_string(),
            ..Default::default()
        };
        assert!(draft.validate_for_create().is_ok());
    }

    #[test]
    fn test_delete_intent_message_names_the_job() {
        let intent = DeleteIntent::for_record(&full_record());
        assert_eq!(intent.job_id, 11);
        assert!(intent.confirmation_message().contains("\"Data Engineer\""));
    }
}
