//! Results delivered from background tasks to the UI loop.

use std::sync::Arc;

use crate::error::ApiResult;
use crate::models::{PageRequest, PhotoPage};
use crate::thumbnails::{Thumbnail, ThumbnailError};

use super::types::PageTarget;

#[derive(Debug)]
pub enum AppMessage {
    /// A page request finished
    PageLoaded {
        target: PageTarget,
        request: PageRequest,
        result: ApiResult<PhotoPage>,
    },
    /// An image download and decode finished
    ImageLoaded {
        url: String,
        result: Result<Arc<Thumbnail>, ThumbnailError>,
    },
}
