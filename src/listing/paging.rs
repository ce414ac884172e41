// ABOUTME: Fixed-size pagination and in-flight fetch tracking for the listing
// ABOUTME: Page requests clamp into range; stale fetch responses are detected by sequence token

use std::ops::Range;

pub const DEFAULT_PAGE_SIZE: usize = 25;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page_size: usize,
    current_page: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl Pagination {
    /// A page size of 0 is treated as 1.
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            current_page: 1,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Always at least 1, so an empty result still has one (empty) page.
    pub fn total_pages(&self, item_count: usize) -> usize {
        item_count.div_ceil(self.page_size).max(1)
    }

    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    /// Move to `page`, clamped into `[1, total_pages]`. Returns the page landed on.
    pub fn go_to(&mut self, page: usize, item_count: usize) -> usize {
        self.current_page = page.clamp(1, self.total_pages(item_count));
        self.current_page
    }

    /// Index range of the current page within a list of `item_count` items.
    pub fn window(&self, item_count: usize) -> Range<usize> {
        let start = ((self.current_page - 1) * self.page_size).min(item_count);
        let end = (start + self.page_size).min(item_count);
        start..end
    }
}

/// Token identifying one fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchToken(u64);

/// Loading flag plus a sequence counter, so a response is applied only when it
/// belongs to the most recent request.
#[derive(Debug, Default)]
pub struct FetchTracker {
    sequence: u64,
    loading: bool,
}

impl FetchTracker {
    pub fn begin(&mut self) -> FetchToken {
        self.sequence += 1;
        self.loading = true;
        FetchToken(self.sequence)
    }

    /// Returns true when `token` is the latest request. Only then is the
    /// loading flag cleared.
    pub fn finish(&mut self, token: FetchToken) -> bool {
        if token.0 != self.sequence {
            return false;
        }
        self.loading = false;
        true
    }

    /// Make any outstanding request stale without starting a new one.
    pub fn invalidate(&mut self) {
        self.sequence += 1;
        self.loading = false;
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }
}
