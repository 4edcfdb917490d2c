use lru::LruCache;
use std::collections::HashSet;
use std::num::NonZeroUsize;
use std::sync::Arc;

use super::decode::Thumbnail;

pub const DEFAULT_CAPACITY: usize = 128;

/// Recently decoded images keyed by URL, plus the URLs being downloaded.
#[derive(Debug)]
pub struct ThumbnailCache {
    images: LruCache<String, Arc<Thumbnail>>,
    in_flight: HashSet<String>,
    failed: HashSet<String>,
}

impl Default for ThumbnailCache {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl ThumbnailCache {
    /// A capacity of zero is treated as one.
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            images: LruCache::new(capacity),
            in_flight: HashSet::new(),
            failed: HashSet::new(),
        }
    }

    /// Look up without touching recency (usable while rendering).
    pub fn peek(&self, url: &str) -> Option<&Arc<Thumbnail>> {
        self.images.peek(url)
    }

    /// Look up and mark as recently used.
    pub fn get(&mut self, url: &str) -> Option<Arc<Thumbnail>> {
        self.images.get(url).cloned()
    }

    pub fn contains(&self, url: &str) -> bool {
        self.images.contains(url)
    }

    pub fn is_in_flight(&self, url: &str) -> bool {
        self.in_flight.contains(url)
    }

    pub fn has_failed(&self, url: &str) -> bool {
        self.failed.contains(url)
    }

    /// Claim `url` for download. Returns false when it is cached, already
    /// downloading, or failed before.
    pub fn begin_fetch(&mut self, url: &str) -> bool {
        if self.images.contains(url) || self.failed.contains(url) {
            return false;
        }
        self.in_flight.insert(url.to_string())
    }

    /// Record a finished download.
    pub fn finish(&mut self, url: &str, image: Option<Arc<Thumbnail>>) {
        self.in_flight.remove(url);
        match image {
            Some(image) => {
                self.failed.remove(url);
                self.images.put(url.to_string(), image);
            }
            None => {
                self.failed.insert(url.to_string());
            }
        }
    }

    /// Forget failures so they are attempted again.
    pub fn clear_failures(&mut self) {
        self.failed.clear();
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}
