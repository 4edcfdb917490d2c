//! Background image loading for list rows and detail slots.
//!
//! Images are fetched through [`UnsplashClient::fetch_image`], decoded off
//! the UI task and downscaled once to [`THUMBNAIL_MAX_SIZE`]. The
//! [`ThumbnailCache`] keeps recent decodes and tracks downloads in flight
//! so the same URL is never fetched twice at once.

mod cache;
mod decode;

pub use cache::{ThumbnailCache, DEFAULT_CAPACITY};
pub use decode::{decode_thumbnail, Thumbnail, ThumbnailError, THUMBNAIL_MAX_SIZE};

use std::sync::Arc;

use crate::traits::HttpClient;
use crate::unsplash::UnsplashClient;

/// Download and decode one image.
pub async fn load_thumbnail<C: HttpClient>(
    client: &UnsplashClient<C>,
    url: &str,
) -> Result<Arc<Thumbnail>, ThumbnailError> {
    let bytes = client.fetch_image(url).await?;
    let thumbnail = tokio::task::spawn_blocking(move || {
        decode_thumbnail(&bytes, THUMBNAIL_MAX_SIZE, THUMBNAIL_MAX_SIZE)
    })
    .await
    .map_err(|e| ThumbnailError::Join(e.to_string()))??;
    Ok(Arc::new(thumbnail))
}
