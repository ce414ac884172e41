// ABOUTME: Listing state holder: search, sort, and pagination over fetched jobs
// ABOUTME: Mediates create/edit/delete intents to the API and refreshes on success

use anyhow::Result;
use tracing::{debug, error, info, warn};

use super::draft::{DeleteIntent, JobDraft, UpdateIntent};
use super::paging::{FetchToken, FetchTracker, Pagination};
use super::sort::{SortKey, SortState};
use crate::prompt::{Notice, Prompter};
use crate::remote::{JobRecord, JobsApi};

/// Number of records requested when loading the listing.
pub const DEFAULT_FETCH_LIMIT: u64 = 5_000;

/// True when any of title, location, company name, or category contains
/// `needle` (already lowercased). Absent fields never match.
pub fn matches_search(record: &JobRecord, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    [
        record.job_title.as_deref(),
        record.location.as_deref(),
        record.company_display_name(),
        record.job_category.as_deref(),
    ]
    .into_iter()
    .flatten()
    .any(|field| field.to_lowercase().contains(needle))
}

pub struct ListingController {
    records: Vec<JobRecord>,
    /// Indices into `records`: filtered, then sorted.
    view: Vec<usize>,
    search: String,
    sort: SortState,
    pages: Pagination,
    fetch: FetchTracker,
    fetch_limit: u64,
    /// Set once a record set has been applied; mutations only refresh a loaded listing.
    loaded: bool,
}

impl ListingController {
    pub fn new(page_size: usize, fetch_limit: u64) -> Self {
        Self {
            records: Vec::new(),
            view: Vec::new(),
            search: String::new(),
            sort: SortState::default(),
            pages: Pagination::new(page_size),
            fetch: FetchTracker::default(),
            fetch_limit,
            loaded: false,
        }
    }

    /// Replace the record set locally. Any fetch still in flight is dropped
    /// when it resolves.
    pub fn set_records(&mut self, records: Vec<JobRecord>) {
        self.fetch.invalidate();
        self.replace_records(records);
    }

    fn replace_records(&mut self, records: Vec<JobRecord>) {
        self.records = records;
        self.loaded = true;
        self.rebuild_view();
        self.pages.reset();
    }

    fn rebuild_view(&mut self) {
        let needle = self.search.to_lowercase();
        let mut view: Vec<usize> = self
            .records
            .iter()
            .enumerate()
            .filter(|(_, record)| matches_search(record, &needle))
            .map(|(i, _)| i)
            .collect();
        self.sort_view(&mut view);
        self.view = view;
    }

    fn sort_view(&self, view: &mut [usize]) {
        if self.sort.key.is_some() {
            view.sort_by(|&a, &b| self.sort.compare(&self.records[a], &self.records[b]));
        }
    }

    pub fn search(&mut self, term: &str) {
        self.search = term.to_string();
        self.rebuild_view();
        self.pages.reset();
        debug!(
            "Search \"{}\" matched {} of {} jobs",
            term,
            self.view.len(),
            self.records.len()
        );
    }

    /// Activate a column: ascending first, descending on a repeat.
    pub fn sort(&mut self, key: SortKey) {
        self.sort.activate(key);
        let mut view = std::mem::take(&mut self.view);
        self.sort_view(&mut view);
        self.view = view;
    }

    pub fn go_to_page(&mut self, page: usize) -> usize {
        self.pages.go_to(page, self.view.len())
    }

    pub fn first_page(&mut self) -> usize {
        self.go_to_page(1)
    }

    pub fn last_page(&mut self) -> usize {
        self.go_to_page(self.total_pages())
    }

    pub fn next_page(&mut self) -> usize {
        self.go_to_page(self.current_page() + 1)
    }

    pub fn prev_page(&mut self) -> usize {
        self.go_to_page(self.current_page().saturating_sub(1))
    }

    pub fn current_page(&self) -> usize {
        self.pages.current_page()
    }

    pub fn total_pages(&self) -> usize {
        self.pages.total_pages(self.view.len())
    }

    pub fn filtered_count(&self) -> usize {
        self.view.len()
    }

    pub fn total_count(&self) -> usize {
        self.records.len()
    }

    pub fn search_term(&self) -> &str {
        &self.search
    }

    pub fn sort_state(&self) -> SortState {
        self.sort
    }

    pub fn is_loading(&self) -> bool {
        self.fetch.is_loading()
    }

    /// Rows on the current page, in view order.
    pub fn page_rows(&self) -> Vec<&JobRecord> {
        self.view[self.pages.window(self.view.len())]
            .iter()
            .map(|&i| &self.records[i])
            .collect()
    }

    pub fn find(&self, job_id: i64) -> Option<&JobRecord> {
        self.records.iter().find(|r| r.job_id == job_id)
    }

    /// Open an editable draft seeded from `record`.
    pub fn edit(&self, record: &JobRecord) -> JobDraft {
        JobDraft::from_record(record)
    }

    pub fn delete(&self, record: &JobRecord) -> DeleteIntent {
        DeleteIntent::for_record(record)
    }

    /// Start a fetch unless one is already outstanding.
    pub fn begin_reload(&mut self) -> Option<FetchToken> {
        if self.fetch.is_loading() {
            warn!("Job fetch already in progress; ignoring duplicate request");
            return None;
        }
        Some(self.fetch.begin())
    }

    /// Apply a fetch result. Returns `Ok(false)` when the response is stale.
    /// A failed fetch leaves the current records in place.
    pub fn apply_reload(
        &mut self,
        token: FetchToken,
        result: crate::error::Result<Vec<JobRecord>>,
    ) -> crate::error::Result<bool> {
        if !self.fetch.finish(token) {
            debug!("Discarding stale job fetch response");
            return Ok(false);
        }
        match result {
            Ok(records) => {
                info!("Loaded {} jobs", records.len());
                self.replace_records(records);
                Ok(true)
            }
            Err(e) => {
                error!("Error fetching jobs: {}", e);
                Err(e)
            }
        }
    }

    /// Re-fetch the collection from the API.
    pub async fn reload<A: JobsApi>(&mut self, api: &A) -> crate::error::Result<bool> {
        let Some(token) = self.begin_reload() else {
            return Ok(false);
        };
        debug!("Fetching jobs from backend");
        let result = api.list_jobs(0, self.fetch_limit).await;
        self.apply_reload(token, result)
    }

    async fn refresh_after_change<A: JobsApi, P: Prompter + ?Sized>(
        &mut self,
        api: &A,
        prompter: &P,
    ) {
        if !self.loaded {
            debug!("No listing loaded; skipping refresh");
            return;
        }
        if let Err(e) = self.reload(api).await {
            prompter.notify(Notice::Error(format!(
                "Failed to refresh jobs: {}",
                e.detail()
            )));
        }
    }

    /// Create a job from `draft`. Requires a title.
    pub async fn create<A: JobsApi, P: Prompter + ?Sized>(
        &mut self,
        api: &A,
        prompter: &P,
        draft: &JobDraft,
    ) -> Result<JobRecord> {
        if let Err(e) = draft.validate_for_create() {
            prompter.notify(Notice::Error(e.detail()));
            return Err(e.into());
        }

        let payload = draft.to_payload();
        debug!("Sending payload: {:?}", payload);
        match api.create_job(&payload).await {
            Ok(created) => {
                info!("Created job {} ({})", created.job_id, payload.job_title);
                prompter.notify(Notice::Success("Job created successfully!".to_string()));
                self.refresh_after_change(api, prompter).await;
                Ok(created)
            }
            Err(e) => {
                error!("Error creating job: {}", e);
                prompter.notify(Notice::Error(format!("Error creating job: {}", e.detail())));
                Err(e.into())
            }
        }
    }

    /// Issue the update. The view is refreshed only when the API accepts it.
    pub async fn save<A: JobsApi, P: Prompter + ?Sized>(
        &mut self,
        api: &A,
        prompter: &P,
        intent: &UpdateIntent,
    ) -> Result<JobRecord> {
        debug!("Saving job {} with {:?}", intent.job_id, intent.payload);
        match api.update_job(intent.job_id, &intent.payload).await {
            Ok(updated) => {
                info!("Updated job {}", intent.job_id);
                prompter.notify(Notice::Success("Job updated successfully!".to_string()));
                self.refresh_after_change(api, prompter).await;
                Ok(updated)
            }
            Err(e) => {
                error!("Error updating job {}: {}", intent.job_id, e);
                prompter.notify(Notice::Error(format!("Error updating job: {}", e.detail())));
                Err(e.into())
            }
        }
    }

    /// Ask for confirmation, then delete. Returns `Ok(false)` when declined.
    pub async fn remove<A: JobsApi, P: Prompter + ?Sized>(
        &mut self,
        api: &A,
        prompter: &P,
        intent: &DeleteIntent,
    ) -> Result<bool> {
        if !prompter.confirm(&intent.confirmation_message())? {
            debug!("Deletion of job {} cancelled", intent.job_id);
            return Ok(false);
        }

        info!("Deleting job {}", intent.job_id);
        match api.delete_job(intent.job_id).await {
            Ok(()) => {
                info!("Deleted job {}", intent.job_id);
                prompter.notify(Notice::Success("Job deleted successfully!".to_string()));
                self.refresh_after_change(api, prompter).await;
                Ok(true)
            }
            Err(e) => {
                error!("Error deleting job {}: {}", intent.job_id, e);
                prompter.notify(Notice::Error(format!("Error deleting job: {}", e.detail())));
                Err(e.into())
            }
        }
    }
}

impl Default for ListingController {
    fn default() -> Self {
        Self::new(super::paging::DEFAULT_PAGE_SIZE, DEFAULT_FETCH_LIMIT)
    }
}
