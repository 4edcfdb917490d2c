//! Application state and logic for the TUI.
//!
//! - [`App`] - everything the UI renders, plus the channel background
//!   tasks report back on
//! - [`Screen`] - list or detail viewer
//! - [`AppMessage`] - results from background tasks

mod actions;
mod handlers;
mod messages;
mod types;

pub use messages::AppMessage;
pub use types::{PageTarget, Screen, SearchInput};

use std::sync::Arc;
use tokio::sync::mpsc;

use crate::adapters::ReqwestHttpClient;
use crate::models::PhotoQuery;
use crate::state::{DetailState, FeedState};
use crate::thumbnails::{ThumbnailCache, DEFAULT_CAPACITY};
use crate::traits::HttpClient;
use crate::unsplash::UnsplashClient;

/// Main application state
pub struct App<C: HttpClient + 'static = ReqwestHttpClient> {
    /// Flag to track if the app should quit
    pub should_quit: bool,
    /// Current screen being displayed
    pub screen: Screen,
    pub feed: FeedState,
    /// Present while the detail viewer is open
    pub detail: Option<DetailState>,
    pub search: SearchInput,
    pub thumbnails: ThumbnailCache,
    /// First list row drawn; kept in sync with the selection by the renderer
    pub list_offset: usize,
    /// List rows that fit on screen at the last render
    pub list_rows: usize,
    /// One-line notice shown in the footer
    pub status: Option<String>,
    pub terminal_width: u16,
    pub terminal_height: u16,
    /// Set when visible state changed since the last draw
    pub needs_redraw: bool,
    pub tick_count: u64,
    /// Sender handed to background tasks
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Taken by the event loop
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    client: Arc<UnsplashClient<C>>,
    detail_sessions: u64,
}

impl<C: HttpClient + 'static> App<C> {
    pub fn new(client: UnsplashClient<C>) -> Self {
        Self::with_client(Arc::new(client))
    }

    pub fn with_client(client: Arc<UnsplashClient<C>>) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        Self {
            should_quit: false,
            screen: Screen::List,
            feed: FeedState::new(),
            detail: None,
            search: SearchInput::default(),
            thumbnails: ThumbnailCache::new(DEFAULT_CAPACITY),
            list_offset: 0,
            list_rows: 1,
            status: None,
            terminal_width: 80,
            terminal_height: 24,
            needs_redraw: true,
            tick_count: 0,
            message_tx,
            message_rx: Some(message_rx),
            client,
            detail_sessions: 0,
        }
    }

    pub fn client(&self) -> &Arc<UnsplashClient<C>> {
        &self.client
    }

    /// Load the first page for `initial_query`, or the editorial listing.
    pub fn start(&mut self, initial_query: Option<&str>) {
        let query = initial_query
            .map(PhotoQuery::from_input)
            .unwrap_or_default();
        if let Some(text) = query.search_text() {
            self.search.set_text(text);
        }
        self.start_feed(query);
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        // Spinner frames advance every few ticks while something loads.
        if self.is_busy() && self.tick_count % 6 == 0 {
            self.mark_dirty();
        }
    }

    pub fn is_busy(&self) -> bool {
        self.feed.is_loading()
            || self.detail.as_ref().is_some_and(|d| d.is_loading())
    }

    pub fn update_terminal_dimensions(&mut self, width: u16, height: u16) {
        self.terminal_width = width;
        self.terminal_height = height;
        self.mark_dirty();
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = Some(status.into());
        self.mark_dirty();
    }

    fn next_detail_session(&mut self) -> u64 {
        self.detail_sessions += 1;
        self.detail_sessions
    }
}
