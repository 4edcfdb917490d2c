//! Navigation and background-task spawning.

use std::sync::Arc;

use crate::models::{ImageTier, PageRequest, PhotoQuery};
use crate::state::DetailState;
use crate::thumbnails::load_thumbnail;
use crate::traits::HttpClient;

use super::{App, AppMessage, PageTarget, Screen};

impl<C: HttpClient + 'static> App<C> {
    /// Replace the list with page 1 of `query`.
    pub fn start_feed(&mut self, query: PhotoQuery) {
        let request = self.feed.begin(query);
        self.list_offset = 0;
        self.status = None;
        self.spawn_page(PageTarget::Feed, request);
        self.mark_dirty();
    }

    pub fn submit_search(&mut self) {
        self.search.blur();
        let query = PhotoQuery::from_input(self.search.text());
        tracing::info!(query = ?query, "search submitted");
        self.start_feed(query);
    }

    /// Go back to the listing if a search is active.
    pub fn clear_search(&mut self) -> bool {
        self.search.clear();
        if !self.feed.query().is_search() {
            return false;
        }
        self.start_feed(PhotoQuery::Listing);
        true
    }

    /// Fetch the next list page when the selection nears the end.
    pub fn prefetch_if_needed(&mut self) {
        if !self.feed.should_prefetch() {
            return;
        }
        if let Some(request) = self.feed.request_next_page() {
            self.spawn_page(PageTarget::Feed, request);
        }
    }

    /// Retry after an error: restart an empty list, otherwise load on.
    pub fn retry(&mut self) {
        self.feed.clear_error();
        self.thumbnails.clear_failures();
        if self.feed.is_empty() {
            let query = self.feed.query().clone();
            self.start_feed(query);
        } else if let Some(request) = self.feed.request_next_page() {
            self.spawn_page(PageTarget::Feed, request);
        }
        self.mark_dirty();
    }

    pub fn select_next(&mut self) {
        self.feed.select_next();
        self.prefetch_if_needed();
    }

    pub fn select_previous(&mut self) {
        self.feed.select_previous();
    }

    pub fn page_down(&mut self) {
        self.feed.page_down(self.list_rows.max(1));
        self.prefetch_if_needed();
    }

    pub fn page_up(&mut self) {
        self.feed.page_up(self.list_rows.max(1));
    }

    pub fn select_last(&mut self) {
        self.feed.select_last();
        self.prefetch_if_needed();
    }

    /// Start downloads for list rows currently on screen.
    pub fn request_visible_thumbnails(&mut self) {
        let end = (self.list_offset + self.list_rows).min(self.feed.len());
        let urls: Vec<String> = self.feed.photos()[self.list_offset.min(end)..end]
            .iter()
            .filter_map(|photo| photo.url(ImageTier::Thumb).map(str::to_string))
            .collect();
        for url in urls {
            self.request_image(&url);
        }
    }

    /// Open the viewer on the selected row.
    pub fn open_detail(&mut self) {
        if self.feed.selected_photo().is_none() {
            return;
        }
        let session = self.next_detail_session();
        let detail = DetailState::open(
            self.feed.photos().to_vec(),
            self.feed.selected(),
            self.feed.cursor(),
            self.feed.query().clone(),
            session,
        );
        tracing::debug!(index = detail.index(), session, "detail opened");
        self.detail = Some(detail);
        self.screen = Screen::Detail;
        self.sync_detail();
        self.mark_dirty();
    }

    /// Close the viewer and hand its position back to the list.
    pub fn close_detail(&mut self) {
        if let Some(detail) = self.detail.take() {
            let outcome = detail.close();
            tracing::debug!(index = outcome.index, page = outcome.cursor.page, "detail closed");
            self.feed.adopt_detail(outcome);
        }
        self.screen = Screen::List;
        self.mark_dirty();
    }

    pub fn detail_next(&mut self) {
        let Some(detail) = self.detail.as_mut() else {
            return;
        };
        if detail.is_last_image_and_page() {
            self.set_status("Last photo");
            return;
        }
        detail.move_right();
        self.sync_detail();
        self.mark_dirty();
    }

    pub fn detail_previous(&mut self) {
        let Some(detail) = self.detail.as_mut() else {
            return;
        };
        if detail.move_left() {
            self.sync_detail();
            self.mark_dirty();
        }
    }

    /// Fill empty detail slots from the cache or start their downloads,
    /// and ask for more photos when the right neighbour is missing.
    pub fn sync_detail(&mut self) {
        let Some(detail) = self.detail.as_mut() else {
            return;
        };

        let more = detail.request_more();
        let loads = detail.pending_loads();
        let mut downloads = Vec::new();
        for load in loads {
            if let Some(image) = self.thumbnails.get(&load.url) {
                detail.apply_image(load.position, load.index, Some(image));
            } else if self.thumbnails.has_failed(&load.url) {
                detail.apply_image(load.position, load.index, None);
            } else {
                downloads.push(load.url);
            }
        }

        if let Some(request) = more {
            self.spawn_page(PageTarget::Detail, request);
        }
        for url in downloads {
            self.request_image(&url);
        }
    }

    /// Start a download unless the image is cached or already in flight.
    pub fn request_image(&mut self, url: &str) {
        if self.thumbnails.contains(url) || self.thumbnails.has_failed(url) {
            return;
        }
        if !self.thumbnails.begin_fetch(url) {
            return;
        }
        let client = Arc::clone(self.client());
        let tx = self.message_tx.clone();
        let url = url.to_string();
        tokio::spawn(async move {
            let result = load_thumbnail(&client, &url).await;
            let _ = tx.send(AppMessage::ImageLoaded { url, result });
        });
    }

    pub(super) fn spawn_page(&self, target: PageTarget, request: PageRequest) {
        tracing::debug!(?target, page = request.page, query = ?request.query, "requesting page");
        let client = Arc::clone(self.client());
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let result = client.fetch_page(&request.query, request.page).await;
            let _ = tx.send(AppMessage::PageLoaded {
                target,
                request,
                result,
            });
        });
    }
}
