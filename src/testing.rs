// ABOUTME: In-memory JobsApi and fixtures shared by unit tests
// ABOUTME: Mirrors the API's status codes and detail messages without a network

use std::io::Write;
use std::sync::{Arc, Mutex};

use crate::error::{JobTrendsError, Result};
use crate::prompt::{Notice, Prompter};
use crate::remote::models::{Company, CompanyRef, SkillEntry};
use crate::remote::{JobPayload, JobRecord, JobsApi};

#[derive(Default)]
struct FakeState {
    records: Vec<JobRecord>,
    fail_count: bool,
    fail_list: bool,
    calls: Vec<String>,
}

#[derive(Default)]
pub struct FakeApi {
    state: Mutex<FakeState>,
}

impl FakeApi {
    pub fn with_records(records: Vec<JobRecord>) -> Self {
        Self {
            state: Mutex::new(FakeState {
                records,
                ..Default::default()
            }),
        }
    }

    pub fn fail_count(&self) {
        self.state.lock().unwrap().fail_count = true;
    }

    pub fn fail_list(&self) {
        self.state.lock().unwrap().fail_list = true;
    }

    pub fn records(&self) -> Vec<JobRecord> {
        self.state.lock().unwrap().records.clone()
    }

    pub fn calls(&self) -> Vec<String> {
        self.state.lock().unwrap().calls.clone()
    }

    /// Remove a record behind the client's back.
    pub fn remove_silently(&self, job_id: i64) {
        self.state
            .lock()
            .unwrap()
            .records
            .retain(|r| r.job_id != job_id);
    }
}

fn not_found() -> JobTrendsError {
    JobTrendsError::http(404, "Job not found")
}

fn apply_payload(record: &mut JobRecord, payload: &JobPayload) {
    record.job_title = Some(payload.job_title.clone());
    record.job_description = payload.job_description.clone();
    record.company = Some(CompanyRef::Embedded(Company {
        company_id: None,
        company_name: Some(payload.company_name.clone()),
    }));
    record.location = Some(payload.location.clone());
    record.min_salary = payload.min_salary;
    record.max_salary = payload.max_salary;
    record.work_year = Some(payload.work_year);
    record.experience_level = payload.experience_level.clone();
    record.employment_type = payload.employment_type.clone();
    record.work_setting = payload.work_setting.clone();
    record.job_category = payload.job_category.clone();
    record.company_size = payload.company_size.clone();
    record.skills = Some(
        payload
            .skills
            .iter()
            .map(|s| SkillEntry::Name(s.clone()))
            .collect(),
    );
}

impl JobsApi for FakeApi {
    async fn list_jobs(&self, skip: u64, limit: u64) -> Result<Vec<JobRecord>> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(format!("list {} {}", skip, limit));
        if state.fail_list {
            return Err(JobTrendsError::http(500, "Internal Server Error"));
        }
        Ok(state
            .records
            .iter()
            .skip(skip as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn count_jobs(&self) -> Result<u64> {
        let mut state = self.state.lock().unwrap();
        state.calls.push("count".to_string());
        if state.fail_count {
            return Err(JobTrendsError::http(404, "Not Found"));
        }
        Ok(state.records.len() as u64)
    }

    async fn get_job(&self, job_id: i64) -> Result<JobRecord> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(format!("get {}", job_id));
        state
            .records
            .iter()
            .find(|r| r.job_id == job_id)
            .cloned()
            .ok_or_else(not_found)
    }

    async fn create_job(&self, payload: &JobPayload) -> Result<JobRecord> {
        let mut state = self.state.lock().unwrap();
        state.calls.push("create".to_string());
        let job_id = state.records.iter().map(|r| r.job_id).max().unwrap_or(0) + 1;
        let mut record = JobRecord {
            job_id,
            ..Default::default()
        };
        apply_payload(&mut record, payload);
        state.records.push(record.clone());
        Ok(record)
    }

    async fn update_job(&self, job_id: i64, payload: &JobPayload) -> Result<JobRecord> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(format!("update {}", job_id));
        let record = state
            .records
            .iter_mut()
            .find(|r| r.job_id == job_id)
            .ok_or_else(not_found)?;
        apply_payload(record, payload);
        Ok(record.clone())
    }

    async fn delete_job(&self, job_id: i64) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(format!("delete {}", job_id));
        let before = state.records.len();
        state.records.retain(|r| r.job_id != job_id);
        if state.records.len() == before {
            return Err(not_found());
        }
        Ok(())
    }
}

/// Prompter that answers confirmations from a fixed value and records notices.
pub struct ScriptedPrompter {
    answer: bool,
    pub questions: Mutex<Vec<String>>,
    pub notices: Mutex<Vec<Notice>>,
}

impl ScriptedPrompter {
    pub fn answering(answer: bool) -> Self {
        Self {
            answer,
            questions: Mutex::new(Vec::new()),
            notices: Mutex::new(Vec::new()),
        }
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().unwrap().clone()
    }
}

impl Prompter for ScriptedPrompter {
    fn confirm(&self, message: &str) -> anyhow::Result<bool> {
        self.questions.lock().unwrap().push(message.to_string());
        Ok(self.answer)
    }

    fn notify(&self, notice: Notice) {
        self.notices.lock().unwrap().push(notice);
    }
}

pub fn job(job_id: i64, title: &str, year: i32, min_salary: Option<i64>) -> JobRecord {
    JobRecord {
        job_id,
        job_title: Some(title.to_string()),
        work_year: Some(year),
        min_salary,
        ..Default::default()
    }
}

pub fn sample_records(n: i64) -> Vec<JobRecord> {
    (1..=n)
        .map(|i| JobRecord {
            location: Some(if i % 2 == 0 { "Berlin" } else { "Remote" }.to_string()),
            job_category: Some("Engineering".to_string()),
            ..job(i, &format!("Job {}", i), 2020 + (i % 5) as i32, Some(50_000 + i * 1_000))
        })
        .collect()
}

/// Shared buffer usable as a `tracing_subscriber` writer in tests.
#[derive(Clone, Default)]
pub struct LogCapture(Arc<Mutex<Vec<u8>>>);

impl LogCapture {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for LogCapture {
    type Writer = LogCapture;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
