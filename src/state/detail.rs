//! Full-screen detail viewer state.
//!
//! The viewer keeps three image slots around the current photo. Moving
//! shifts the slots (center becomes left on a move right, and so on) so an
//! image already on screen is never downloaded again; only the slot that
//! scrolled in starts empty.

use std::sync::Arc;
use std::time::Instant;

use crate::error::ApiResult;
use crate::models::{ImageTier, PageCursor, PageRequest, Photo, PhotoPage, PhotoQuery};
use crate::thumbnails::Thumbnail;

use super::feed::PageOutcome;
use super::swipe::{clamp_offset, settle_swipe, SwipeDirection, SwipeInput};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotPosition {
    Left,
    Center,
    Right,
}

impl SlotPosition {
    pub const ALL: [SlotPosition; 3] = [SlotPosition::Left, SlotPosition::Center, SlotPosition::Right];
}

/// One image buffer. Non-empty slots remember which photo they hold.
#[derive(Debug, Clone, Default)]
pub enum Slot {
    #[default]
    Empty,
    Loading {
        index: usize,
    },
    Ready {
        index: usize,
        image: Arc<Thumbnail>,
    },
    Failed {
        index: usize,
    },
}

impl Slot {
    pub fn index(&self) -> Option<usize> {
        match self {
            Slot::Empty => None,
            Slot::Loading { index } | Slot::Ready { index, .. } | Slot::Failed { index } => {
                Some(*index)
            }
        }
    }

    pub fn image(&self) -> Option<&Arc<Thumbnail>> {
        match self {
            Slot::Ready { image, .. } => Some(image),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Slot::Empty)
    }
}

#[derive(Debug, Clone, Default)]
pub struct SlotBuffer {
    pub left: Slot,
    pub center: Slot,
    pub right: Slot,
}

impl SlotBuffer {
    pub fn get(&self, position: SlotPosition) -> &Slot {
        match position {
            SlotPosition::Left => &self.left,
            SlotPosition::Center => &self.center,
            SlotPosition::Right => &self.right,
        }
    }

    fn get_mut(&mut self, position: SlotPosition) -> &mut Slot {
        match position {
            SlotPosition::Left => &mut self.left,
            SlotPosition::Center => &mut self.center,
            SlotPosition::Right => &mut self.right,
        }
    }

    fn shift_right(&mut self) {
        self.left = std::mem::take(&mut self.center);
        self.center = std::mem::take(&mut self.right);
    }

    fn shift_left(&mut self) {
        self.right = std::mem::take(&mut self.center);
        self.center = std::mem::take(&mut self.left);
    }
}

/// A download the viewer wants started.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotLoad {
    pub position: SlotPosition,
    pub index: usize,
    pub url: String,
}

/// Handed back to the list screen when the viewer closes.
#[derive(Debug, Clone)]
pub struct DetailOutcome {
    pub index: usize,
    pub cursor: PageCursor,
    pub photos: Vec<Photo>,
}

/// An in-progress horizontal drag, in terminal columns.
#[derive(Debug, Clone, Copy)]
pub struct DragState {
    pub start_x: f32,
    pub last_x: f32,
    pub offset: f32,
    pub started: Instant,
}

#[derive(Debug, Clone)]
pub struct DetailState {
    photos: Vec<Photo>,
    index: usize,
    cursor: PageCursor,
    query: PhotoQuery,
    loading: bool,
    session: u64,
    slots: SlotBuffer,
    drag: Option<DragState>,
    tier: ImageTier,
}

impl DetailState {
    /// Open on `photos[index]` with every slot empty.
    pub fn open(
        photos: Vec<Photo>,
        index: usize,
        cursor: PageCursor,
        query: PhotoQuery,
        session: u64,
    ) -> Self {
        let index = index.min(photos.len().saturating_sub(1));
        Self {
            photos,
            index,
            cursor,
            query,
            loading: false,
            session,
            slots: SlotBuffer::default(),
            drag: None,
            tier: ImageTier::Small,
        }
    }

    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> Option<&Photo> {
        self.photos.get(self.index)
    }

    pub fn cursor(&self) -> PageCursor {
        self.cursor
    }

    pub fn session(&self) -> u64 {
        self.session
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn slots(&self) -> &SlotBuffer {
        &self.slots
    }

    pub fn drag(&self) -> Option<&DragState> {
        self.drag.as_ref()
    }

    /// Index of the photo shown in `position`, if that photo exists.
    pub fn index_at(&self, position: SlotPosition) -> Option<usize> {
        let index = match position {
            SlotPosition::Left => self.index.checked_sub(1)?,
            SlotPosition::Center => self.index,
            SlotPosition::Right => self.index + 1,
        };
        (index < self.photos.len()).then_some(index)
    }

    pub fn is_last_image_and_page(&self) -> bool {
        self.index + 1 >= self.photos.len() && !self.cursor.has_more()
    }

    pub fn can_move_right(&self) -> bool {
        self.index + 1 < self.photos.len()
    }

    pub fn can_move_left(&self) -> bool {
        self.index > 0
    }

    /// Step to the next photo. Refused when its record is not loaded yet.
    pub fn move_right(&mut self) -> bool {
        if !self.can_move_right() {
            return false;
        }
        self.index += 1;
        self.slots.shift_right();
        self.slots.right = Slot::Empty;
        true
    }

    pub fn move_left(&mut self) -> bool {
        if !self.can_move_left() {
            return false;
        }
        self.index -= 1;
        self.slots.shift_left();
        self.slots.left = Slot::Empty;
        true
    }

    /// Mark every empty slot that has a photo as loading and return the
    /// downloads to start. Photos without an image URL fail immediately.
    pub fn pending_loads(&mut self) -> Vec<SlotLoad> {
        let mut loads = Vec::new();
        for position in SlotPosition::ALL {
            let Some(index) = self.index_at(position) else {
                continue;
            };
            if !self.slots.get(position).is_empty() {
                continue;
            }
            match self.photos[index].url(self.tier) {
                Some(url) => {
                    *self.slots.get_mut(position) = Slot::Loading { index };
                    loads.push(SlotLoad {
                        position,
                        index,
                        url: url.to_string(),
                    });
                }
                None => *self.slots.get_mut(position) = Slot::Failed { index },
            }
        }
        loads
    }

    /// The right neighbour has no record yet but the source has more.
    pub fn needs_more_photos(&self) -> bool {
        self.index + 1 >= self.photos.len() && self.cursor.has_more()
    }

    pub fn request_more(&mut self) -> Option<PageRequest> {
        if self.loading || !self.needs_more_photos() {
            return None;
        }
        self.loading = true;
        Some(PageRequest {
            query: self.query.clone(),
            page: self.cursor.next_page(),
            generation: self.session,
        })
    }

    pub fn apply_page(
        &mut self,
        request: &PageRequest,
        result: ApiResult<PhotoPage>,
    ) -> PageOutcome {
        if request.generation != self.session {
            return PageOutcome::Stale;
        }
        self.loading = false;
        match result {
            Ok(page) => {
                let count = page.photos.len();
                self.photos.extend(page.photos);
                self.cursor.advance(request.page, page.total_pages);
                if count == 0 {
                    // Nothing came back: stop asking, even for the listing.
                    self.cursor.total_pages = Some(request.page);
                }
                PageOutcome::Appended(count)
            }
            Err(err) => {
                tracing::warn!(page = request.page, error = %err, "detail page failed");
                PageOutcome::Failed
            }
        }
    }

    /// Store a finished download if `position` still waits for `index`.
    pub fn apply_image(
        &mut self,
        position: SlotPosition,
        index: usize,
        image: Option<Arc<Thumbnail>>,
    ) -> bool {
        let slot = self.slots.get_mut(position);
        if !matches!(slot, Slot::Loading { index: waiting } if *waiting == index) {
            return false;
        }
        *slot = match image {
            Some(image) => Slot::Ready { index, image },
            None => Slot::Failed { index },
        };
        true
    }

    /// Route a finished download by URL to whichever slots wait for it.
    pub fn apply_url(&mut self, url: &str, image: Option<Arc<Thumbnail>>) -> bool {
        let mut applied = false;
        for position in SlotPosition::ALL {
            let Slot::Loading { index } = *self.slots.get(position) else {
                continue;
            };
            if self.photos.get(index).and_then(|p| p.url(self.tier)) == Some(url) {
                applied |= self.apply_image(position, index, image.clone());
            }
        }
        applied
    }

    pub fn begin_drag(&mut self, x: f32) {
        self.drag = Some(DragState {
            start_x: x,
            last_x: x,
            offset: 0.0,
            started: Instant::now(),
        });
    }

    pub fn update_drag(&mut self, x: f32, width: f32, gap: f32) {
        if let Some(drag) = self.drag.as_mut() {
            drag.offset = clamp_offset(drag.offset + (x - drag.last_x), width, gap);
            drag.last_x = x;
        }
    }

    /// Finish a drag and apply the resulting move.
    pub fn end_drag(&mut self, x: f32, width: f32, gap: f32) -> SwipeDirection {
        let Some(drag) = self.drag.take() else {
            return SwipeDirection::Center;
        };
        let direction = settle_swipe(SwipeInput {
            start_x: drag.start_x,
            end_x: x,
            offset: drag.offset,
            elapsed: drag.started.elapsed(),
            width,
            gap,
            can_move_right: !self.is_last_image_and_page(),
            can_move_left: self.can_move_left(),
        });
        let moved = match direction {
            SwipeDirection::Right => self.move_right(),
            SwipeDirection::Left => self.move_left(),
            SwipeDirection::Center => false,
        };
        if moved {
            direction
        } else {
            SwipeDirection::Center
        }
    }

    pub fn close(self) -> DetailOutcome {
        DetailOutcome {
            index: self.index,
            cursor: self.cursor,
            photos: self.photos,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PhotoUrls, PhotoUser};

    fn photo(id: &str) -> Photo {
        Photo {
            id: id.to_string(),
            width: 300,
            height: 200,
            urls: PhotoUrls {
                small: Some(format!("https://images.test/{id}")),
                ..Default::default()
            },
            user: PhotoUser {
                name: id.to_uppercase(),
                username: None,
            },
            description: None,
            alt_description: None,
            color: None,
            likes: 0,
        }
    }

    fn photos(n: usize) -> Vec<Photo> {
        (0..n).map(|i| photo(&format!("p{i}"))).collect()
    }

    fn thumb() -> Arc<Thumbnail> {
        Arc::new(Thumbnail::from_rgb(image::RgbImage::new(2, 2)))
    }

    fn bounded(page: u32, total: u32) -> PageCursor {
        PageCursor {
            page,
            total_pages: Some(total),
        }
    }

    fn ready_all(detail: &mut DetailState) {
        for load in detail.pending_loads() {
            detail.apply_image(load.position, load.index, Some(thumb()));
        }
    }

    #[test]
    fn test_first_photo_has_no_left_slot() {
        let mut detail = DetailState::open(photos(3), 0, bounded(1, 1), PhotoQuery::Listing, 1);
        let loads = detail.pending_loads();

        let positions: Vec<_> = loads.iter().map(|l| (l.position, l.index)).collect();
        assert_eq!(
            positions,
            [(SlotPosition::Center, 0), (SlotPosition::Right, 1)]
        );
        assert_eq!(loads[0].url, "https://images.test/p0");
        assert!(detail.slots().left.is_empty());
        assert!(detail.pending_loads().is_empty());
    }

    #[test]
    fn test_move_right_shifts_slots() {
        let mut detail = DetailState::open(photos(4), 1, bounded(1, 1), PhotoQuery::Listing, 1);
        ready_all(&mut detail);

        assert!(detail.move_right());
        assert_eq!(detail.index(), 2);
        assert_eq!(detail.slots().left.index(), Some(1));
        assert_eq!(detail.slots().center.index(), Some(2));
        assert!(detail.slots().center.image().is_some());
        assert!(detail.slots().right.is_empty());

        let loads = detail.pending_loads();
        assert_eq!(loads.len(), 1);
        assert_eq!((loads[0].position, loads[0].index), (SlotPosition::Right, 3));
    }

    #[test]
    fn test_move_left_shifts_slots() {
        let mut detail = DetailState::open(photos(4), 2, bounded(1, 1), PhotoQuery::Listing, 1);
        ready_all(&mut detail);

        assert!(detail.move_left());
        assert_eq!(detail.index(), 1);
        assert_eq!(detail.slots().right.index(), Some(2));
        assert_eq!(detail.slots().center.index(), Some(1));
        assert!(detail.slots().left.is_empty());

        assert!(detail.move_left());
        assert!(!detail.move_left());
        assert_eq!(detail.index(), 0);
    }

    #[test]
    fn test_end_of_results_refuses_move_right() {
        let mut detail = DetailState::open(photos(2), 1, bounded(1, 1), PhotoQuery::Listing, 1);
        assert!(detail.is_last_image_and_page());
        assert!(!detail.needs_more_photos());
        assert!(detail.request_more().is_none());
        assert!(!detail.move_right());
    }

    #[test]
    fn test_requests_next_page_at_end_of_loaded_list() {
        let query = PhotoQuery::Search("sea".into());
        let mut detail = DetailState::open(photos(2), 1, bounded(1, 3), query.clone(), 7);
        assert!(detail.needs_more_photos());

        let request = detail.request_more().unwrap();
        assert_eq!(request.page, 2);
        assert_eq!(request.query, query);
        assert_eq!(request.generation, 7);
        assert!(detail.request_more().is_none());

        let page = PhotoPage {
            photos: vec![photo("n0"), photo("n1")],
            total_pages: Some(3),
            total: None,
        };
        assert_eq!(detail.apply_page(&request, Ok(page)), PageOutcome::Appended(2));
        assert_eq!(detail.cursor().page, 2);
        assert!(detail.can_move_right());

        // The right slot becomes loadable once the record exists.
        let loads = detail.pending_loads();
        assert!(loads
            .iter()
            .any(|l| l.position == SlotPosition::Right && l.index == 2));
    }

    #[test]
    fn test_empty_page_stops_requests() {
        let mut detail =
            DetailState::open(photos(1), 0, PageCursor { page: 1, total_pages: None }, PhotoQuery::Listing, 1);
        let request = detail.request_more().unwrap();

        assert_eq!(
            detail.apply_page(&request, Ok(PhotoPage::default())),
            PageOutcome::Appended(0)
        );
        assert!(!detail.needs_more_photos());
        assert!(detail.request_more().is_none());
        assert!(detail.is_last_image_and_page());
    }

    #[test]
    fn test_page_for_other_session_is_stale() {
        let mut detail = DetailState::open(photos(1), 0, bounded(1, 2), PhotoQuery::Listing, 2);
        let mut request = detail.request_more().unwrap();
        request.generation = 1;
        assert_eq!(
            detail.apply_page(&request, Ok(PhotoPage::default())),
            PageOutcome::Stale
        );
        assert!(detail.is_loading());
    }

    #[test]
    fn test_late_image_follows_shifted_slot() {
        let mut detail = DetailState::open(photos(5), 1, bounded(1, 1), PhotoQuery::Listing, 1);
        let loads = detail.pending_loads();
        let right = loads
            .iter()
            .find(|l| l.position == SlotPosition::Right)
            .unwrap()
            .clone();

        detail.move_right();
        detail.move_right();

        // The slot that asked for photo 2 has moved two places left.
        assert!(!detail.apply_image(right.position, right.index, Some(thumb())));
        assert!(detail.apply_url(&right.url, Some(thumb())));
        assert_eq!(detail.slots().left.index(), Some(2));
        assert!(detail.slots().left.image().is_some());
    }

    #[test]
    fn test_apply_url_fills_matching_slot() {
        let mut detail = DetailState::open(photos(3), 1, bounded(1, 1), PhotoQuery::Listing, 1);
        detail.pending_loads();

        assert!(detail.apply_url("https://images.test/p2", Some(thumb())));
        assert!(detail.slots().right.image().is_some());
        assert!(detail.apply_url("https://images.test/p0", None));
        assert!(matches!(detail.slots().left, Slot::Failed { index: 0 }));
        assert!(!detail.apply_url("https://images.test/unknown", Some(thumb())));
    }

    #[test]
    fn test_photo_without_url_fails_slot() {
        let mut list = photos(2);
        list[1].urls.small = None;
        let mut detail = DetailState::open(list, 0, bounded(1, 1), PhotoQuery::Listing, 1);

        let loads = detail.pending_loads();
        assert_eq!(loads.len(), 1);
        assert!(matches!(detail.slots().right, Slot::Failed { index: 1 }));
    }

    #[test]
    fn test_slow_drag_past_half_moves_right() {
        let mut detail = DetailState::open(photos(3), 0, bounded(1, 1), PhotoQuery::Listing, 1);
        detail.begin_drag(80.0);
        // Pretend the drag started long ago so it counts as slow.
        if let Some(drag) = detail.drag.as_mut() {
            drag.started = Instant::now() - std::time::Duration::from_secs(1);
        }
        detail.update_drag(20.0, 100.0, 2.0);
        assert_eq!(detail.drag().unwrap().offset, -60.0);

        assert_eq!(detail.end_drag(20.0, 100.0, 2.0), SwipeDirection::Right);
        assert_eq!(detail.index(), 1);
        assert!(detail.drag().is_none());
    }

    #[test]
    fn test_end_drag_without_begin_is_center() {
        let mut detail = DetailState::open(photos(3), 1, bounded(1, 1), PhotoQuery::Listing, 1);
        assert_eq!(detail.end_drag(0.0, 100.0, 2.0), SwipeDirection::Center);
        assert_eq!(detail.index(), 1);
    }

    #[test]
    fn test_close_returns_state() {
        let mut detail = DetailState::open(photos(3), 0, bounded(1, 1), PhotoQuery::Listing, 1);
        detail.move_right();
        let outcome = detail.close();
        assert_eq!(outcome.index, 1);
        assert_eq!(outcome.photos.len(), 3);
        assert_eq!(outcome.cursor, bounded(1, 1));
    }

    #[test]
    fn test_open_clamps_index() {
        let detail = DetailState::open(photos(2), 9, bounded(1, 1), PhotoQuery::Listing, 1);
        assert_eq!(detail.index(), 1);
    }
}
