//! Screen state containers.
//!
//! - [`FeedState`]: the scrolling photo list with its paging cursor
//! - [`DetailState`]: the full-screen viewer and its three image slots
//! - [`swipe`]: settling a horizontal drag into a move

pub mod detail;
pub mod feed;
pub mod swipe;

pub use detail::{DetailOutcome, DetailState, DragState, Slot, SlotBuffer, SlotLoad, SlotPosition};
pub use feed::{FeedState, PageOutcome, PREFETCH_ROWS};
pub use swipe::{clamp_offset, settle_swipe, SwipeDirection, SwipeInput};
