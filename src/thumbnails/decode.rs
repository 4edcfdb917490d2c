use image::{imageops::FilterType, RgbImage};
use thiserror::Error;

use crate::error::ApiError;

/// Longest edge, in pixels, kept after decoding. A full-width terminal
/// cell grid rarely needs more than this.
pub const THUMBNAIL_MAX_SIZE: u32 = 256;

#[derive(Debug, Error)]
pub enum ThumbnailError {
    #[error("download failed: {0}")]
    Fetch(#[from] ApiError),

    #[error("could not decode image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("decode task failed: {0}")]
    Join(String),
}

/// A decoded, downscaled RGB image.
#[derive(Debug, Clone, PartialEq)]
pub struct Thumbnail {
    image: RgbImage,
}

impl Thumbnail {
    pub fn from_rgb(image: RgbImage) -> Self {
        Self { image }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Pixel at `(x, y)`, clamped to the image bounds.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        if self.image.width() == 0 || self.image.height() == 0 {
            return [0, 0, 0];
        }
        let x = x.min(self.image.width() - 1);
        let y = y.min(self.image.height() - 1);
        self.image.get_pixel(x, y).0
    }
}

/// Decode `bytes` (jpeg, png or webp) and shrink it to fit
/// `max_width` x `max_height`, preserving aspect ratio. Smaller images
/// are kept as-is.
pub fn decode_thumbnail(
    bytes: &[u8],
    max_width: u32,
    max_height: u32,
) -> Result<Thumbnail, ThumbnailError> {
    let decoded = image::load_from_memory(bytes)?;
    let fitted = if decoded.width() > max_width || decoded.height() > max_height {
        decoded.resize(max_width, max_height, FilterType::Triangle)
    } else {
        decoded
    };
    Ok(Thumbnail::from_rgb(fitted.to_rgb8()))
}
