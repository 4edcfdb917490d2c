//! Data types decoded from the Unsplash API and the paging types built on
//! top of them.

mod page;
mod photo;

pub use page::{PageCursor, PageRequest, PhotoPage, PhotoQuery};
pub use photo::{ImageTier, Photo, PhotoUrls, PhotoUser};
