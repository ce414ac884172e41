// ABOUTME: Job listing module
// ABOUTME: Client-side search, sort, pagination, and edit/delete mediation

pub mod controller;
pub mod draft;
pub mod paging;
pub mod sort;

pub use controller::{matches_search, ListingController};
pub use draft::{DeleteIntent, JobDraft, UpdateIntent};
pub use paging::{FetchTracker, Pagination};
pub use sort::{SortDirection, SortKey, SortState};
