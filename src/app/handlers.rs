//! Message, key and mouse handling for the App.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::state::{PageOutcome, SwipeDirection};
use crate::traits::HttpClient;
use crate::ui::DETAIL_GAP;

use super::{App, AppMessage, PageTarget, Screen};

impl<C: HttpClient + 'static> App<C> {
    /// Handle an incoming async message
    pub fn handle_message(&mut self, msg: AppMessage) {
        self.mark_dirty();
        match msg {
            AppMessage::PageLoaded {
                target: PageTarget::Feed,
                request,
                result,
            } => {
                let outcome = self.feed.apply_page(&request, result);
                if outcome == PageOutcome::Appended(0) && self.feed.is_empty() {
                    self.set_status("No photos found");
                }
            }
            AppMessage::PageLoaded {
                target: PageTarget::Detail,
                request,
                result,
            } => {
                let Some(detail) = self.detail.as_mut() else {
                    return;
                };
                match detail.apply_page(&request, result) {
                    PageOutcome::Failed => self.set_status("Could not load more photos"),
                    PageOutcome::Appended(0) => {}
                    PageOutcome::Appended(_) => self.sync_detail(),
                    PageOutcome::Stale => {}
                }
            }
            AppMessage::ImageLoaded { url, result } => {
                let image = match result {
                    Ok(image) => Some(image),
                    Err(err) => {
                        tracing::warn!(url = %url, error = %err, "image load failed");
                        None
                    }
                };
                self.thumbnails.finish(&url, image.clone());
                if let Some(detail) = self.detail.as_mut() {
                    detail.apply_url(&url, image);
                }
            }
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        self.mark_dirty();

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return;
        }

        match self.screen {
            Screen::List if self.search.is_focused() => self.handle_search_key(key),
            Screen::List => self.handle_list_key(key),
            Screen::Detail => self.handle_detail_key(key),
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.submit_search(),
            KeyCode::Esc => self.search.blur(),
            KeyCode::Backspace => self.search.pop(),
            KeyCode::Char('w') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.search.delete_word()
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.search.clear()
            }
            KeyCode::Char(c) => self.search.push(c),
            _ => {}
        }
    }

    fn handle_list_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.quit(),
            KeyCode::Esc => {
                if !self.clear_search() {
                    self.quit();
                }
            }
            KeyCode::Char('/') => self.search.focus(),
            KeyCode::Char('r') => self.retry(),
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Up | KeyCode::Char('k') => self.select_previous(),
            KeyCode::PageDown => self.page_down(),
            KeyCode::PageUp => self.page_up(),
            KeyCode::Home | KeyCode::Char('g') => self.feed.select_first(),
            KeyCode::End | KeyCode::Char('G') => self.select_last(),
            KeyCode::Enter | KeyCode::Right | KeyCode::Char('l') => self.open_detail(),
            _ => {}
        }
    }

    fn handle_detail_key(&mut self, key: KeyEvent) {
        self.status = None;
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Backspace => self.close_detail(),
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Char(' ') => self.detail_next(),
            KeyCode::Left | KeyCode::Char('h') => self.detail_previous(),
            _ => {}
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        match (self.screen, mouse.kind) {
            (Screen::List, MouseEventKind::ScrollDown) => self.select_next(),
            (Screen::List, MouseEventKind::ScrollUp) => self.select_previous(),
            (Screen::Detail, MouseEventKind::ScrollDown) => self.detail_next(),
            (Screen::Detail, MouseEventKind::ScrollUp) => self.detail_previous(),
            (Screen::Detail, kind) => self.handle_drag(kind, mouse.column),
            _ => return,
        }
        self.mark_dirty();
    }

    /// Mouse drags stand in for touch swipes in the viewer.
    fn handle_drag(&mut self, kind: MouseEventKind, column: u16) {
        let width = f32::from(self.terminal_width);
        let x = f32::from(column);
        let Some(detail) = self.detail.as_mut() else {
            return;
        };
        match kind {
            MouseEventKind::Down(MouseButton::Left) => detail.begin_drag(x),
            MouseEventKind::Drag(MouseButton::Left) => detail.update_drag(x, width, DETAIL_GAP),
            MouseEventKind::Up(MouseButton::Left) => {
                let direction = detail.end_drag(x, width, DETAIL_GAP);
                if direction != SwipeDirection::Center {
                    tracing::trace!(?direction, "swipe settled");
                }
                // A failed move at the end of the loaded list still needs the
                // next page requested.
                self.sync_detail();
            }
            _ => {}
        }
    }
}
