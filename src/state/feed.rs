//! List screen state.

use crate::error::ApiResult;
use crate::models::{PageCursor, PageRequest, Photo, PhotoPage, PhotoQuery};

use super::detail::DetailOutcome;

/// Rows from the end of the list at which the next page is requested.
pub const PREFETCH_ROWS: usize = 5;

/// What [`FeedState::apply_page`] did with a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageOutcome {
    /// Photos were appended (possibly zero)
    Appended(usize),
    /// The result belonged to an earlier list and was dropped
    Stale,
    /// The request failed; the list is unchanged
    Failed,
}

/// Paging state, photo list and selection of the list screen.
#[derive(Debug, Clone, Default)]
pub struct FeedState {
    photos: Vec<Photo>,
    cursor: PageCursor,
    query: PhotoQuery,
    loading: bool,
    generation: u64,
    selected: usize,
    total_results: Option<u64>,
    last_error: Option<String>,
}

impl FeedState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    pub fn len(&self) -> usize {
        self.photos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    pub fn cursor(&self) -> PageCursor {
        self.cursor
    }

    pub fn query(&self) -> &PhotoQuery {
        &self.query
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_photo(&self) -> Option<&Photo> {
        self.photos.get(self.selected)
    }

    pub fn total_results(&self) -> Option<u64> {
        self.total_results
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Reset the list for `query` and return the request for page 1.
    ///
    /// Any request still in flight for the previous list becomes stale.
    pub fn begin(&mut self, query: PhotoQuery) -> PageRequest {
        self.generation += 1;
        self.photos.clear();
        self.cursor = PageCursor::unbounded();
        self.query = query;
        self.selected = 0;
        self.total_results = None;
        self.last_error = None;
        self.loading = true;

        tracing::debug!(generation = self.generation, query = ?self.query, "feed reset");
        PageRequest {
            query: self.query.clone(),
            page: 1,
            generation: self.generation,
        }
    }

    /// Request the following page unless one is outstanding or the
    /// search has no more pages.
    pub fn request_next_page(&mut self) -> Option<PageRequest> {
        if self.loading || !self.cursor.has_more() {
            return None;
        }
        self.loading = true;
        Some(PageRequest {
            query: self.query.clone(),
            page: self.cursor.next_page(),
            generation: self.generation,
        })
    }

    /// True when the selection is close enough to the end to prefetch.
    pub fn should_prefetch(&self) -> bool {
        !self.photos.is_empty() && self.selected + PREFETCH_ROWS >= self.photos.len()
    }

    /// Apply the result of `request`.
    pub fn apply_page(
        &mut self,
        request: &PageRequest,
        result: ApiResult<PhotoPage>,
    ) -> PageOutcome {
        if request.generation != self.generation {
            tracing::debug!(
                stale = request.generation,
                current = self.generation,
                "dropping stale page"
            );
            return PageOutcome::Stale;
        }
        self.loading = false;

        match result {
            Ok(page) => {
                let count = page.photos.len();
                if request.page == 1 {
                    self.selected = 0;
                }
                self.photos.extend(page.photos);
                self.cursor.advance(request.page, page.total_pages);
                if count == 0 {
                    // An empty page ends an otherwise unbounded listing.
                    self.cursor.total_pages = Some(request.page);
                }
                if page.total.is_some() {
                    self.total_results = page.total;
                }
                self.last_error = None;
                PageOutcome::Appended(count)
            }
            Err(err) => {
                tracing::warn!(
                    page = request.page,
                    category = %err.category(),
                    error = %err,
                    "photo page failed"
                );
                self.last_error = Some(format!(
                    "{} ({})",
                    err.user_message(),
                    err.category().recovery_hint()
                ));
                PageOutcome::Failed
            }
        }
    }

    /// Take over what the detail viewer loaded and move to its photo.
    pub fn adopt_detail(&mut self, outcome: DetailOutcome) {
        // Only a viewer that paged further than the list replaces it; pages
        // the list received while the viewer was open are kept.
        if outcome.cursor.page > self.cursor.page {
            self.generation += 1;
            self.loading = false;
            self.photos = outcome.photos;
            self.cursor = outcome.cursor;
        }
        self.select(outcome.index);
    }

    pub fn clear_error(&mut self) {
        self.last_error = None;
    }

    pub fn select(&mut self, index: usize) {
        self.selected = index.min(self.photos.len().saturating_sub(1));
    }

    pub fn select_next(&mut self) {
        self.select(self.selected.saturating_add(1));
    }

    pub fn select_previous(&mut self) {
        self.select(self.selected.saturating_sub(1));
    }

    pub fn page_down(&mut self, rows: usize) {
        self.select(self.selected.saturating_add(rows.max(1)));
    }

    pub fn page_up(&mut self, rows: usize) {
        self.select(self.selected.saturating_sub(rows.max(1)));
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.select(usize::MAX);
    }
}
