// ABOUTME: Data structures for job records and API request/response bodies
// ABOUTME: These are serialized to JSON for API communication

use serde::{Deserialize, Serialize};

/// A job posting as returned by the jobs API.
///
/// Older endpoints send `company` as a bare foreign key, newer ones embed the
/// company object; both shapes deserialize.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobRecord {
    pub job_id: i64,
    pub job_title: Option<String>,
    pub job_description: Option<String>,
    pub company: Option<CompanyRef>,
    pub company_id: Option<i64>,
    pub company_name: Option<String>,
    pub location: Option<String>,
    pub min_salary: Option<i64>,
    pub max_salary: Option<i64>,
    pub work_year: Option<i32>,
    pub experience_level: Option<String>,
    pub employment_type: Option<String>,
    pub work_setting: Option<String>,
    pub job_category: Option<String>,
    pub company_size: Option<String>,
    pub skills: Option<Vec<SkillEntry>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CompanyRef {
    Embedded(Company),
    Id(i64),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub company_id: Option<i64>,
    pub company_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SkillEntry {
    Name(String),
    Named { skill_name: String },
}

impl SkillEntry {
    pub fn name(&self) -> &str {
        match self {
            SkillEntry::Name(name) => name,
            SkillEntry::Named { skill_name } => skill_name,
        }
    }
}

impl JobRecord {
    /// Company display name: embedded object first, then the flat field.
    pub fn company_display_name(&self) -> Option<&str> {
        let embedded = match &self.company {
            Some(CompanyRef::Embedded(company)) => company.company_name.as_deref(),
            _ => None,
        };
        embedded
            .filter(|name| !name.is_empty())
            .or(self.company_name.as_deref())
            .filter(|name| !name.is_empty())
    }

    pub fn skill_names(&self) -> Vec<&str> {
        self.skills
            .iter()
            .flatten()
            .map(SkillEntry::name)
            .collect()
    }

    /// The salary that feeds trend statistics. A record without a minimum
    /// salary is unpriced.
    pub fn priced_salary(&self) -> Option<i64> {
        self.min_salary
    }
}

/// Body of create and update requests.
///
/// Optional fields are serialized as explicit `null`, never omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPayload {
    pub job_title: String,
    pub job_description: Option<String>,
    pub company_name: String,
    pub location: String,
    pub min_salary: Option<i64>,
    pub max_salary: Option<i64>,
    pub experience_level: Option<String>,
    pub employment_type: Option<String>,
    pub work_setting: Option<String>,
    pub job_category: Option<String>,
    pub company_size: Option<String>,
    pub work_year: i32,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JobCount {
    pub total_jobs: Option<u64>,
}

/// Error body returned by the API. FastAPI sends `detail` as a string for
/// handled errors and as a list of objects for request validation failures.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    pub detail: Option<serde_json::Value>,
}

impl ErrorBody {
    pub fn detail_text(&self) -> Option<String> {
        match self.detail.as_ref()? {
            serde_json::Value::Null => None,
            serde_json::Value::String(s) if s.is_empty() => None,
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalyticsSummary {
    #[serde(default)]
    pub total_jobs: u64,
    #[serde(default)]
    pub avg_salary: i64,
    #[serde(default)]
    pub top_skills: Vec<NamedCount>,
    #[serde(default)]
    pub salary_trend: Vec<YearSalary>,
    #[serde(default)]
    pub work_setting: Vec<NamedCount>,
    #[serde(default)]
    pub company_size: Vec<NamedCount>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamedCount {
    pub name: String,
    pub count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YearSalary {
    pub year: i32,
    pub salary: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub message: String,
}
