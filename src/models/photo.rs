use serde::{Deserialize, Serialize};

/// Resolution tiers Unsplash exposes for every photo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ImageTier {
    Raw,
    Full,
    Regular,
    /// 400px wide; what the detail slots load
    #[default]
    Small,
    /// 200px wide; list row previews
    Thumb,
}

impl ImageTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageTier::Raw => "raw",
            ImageTier::Full => "full",
            ImageTier::Regular => "regular",
            ImageTier::Small => "small",
            ImageTier::Thumb => "thumb",
        }
    }
}

/// Image URLs keyed by resolution tier. Any tier may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoUrls {
    #[serde(default)]
    pub raw: Option<String>,
    #[serde(default)]
    pub full: Option<String>,
    #[serde(default)]
    pub regular: Option<String>,
    #[serde(default)]
    pub small: Option<String>,
    #[serde(default)]
    pub thumb: Option<String>,
}

impl PhotoUrls {
    pub fn get(&self, tier: ImageTier) -> Option<&str> {
        match tier {
            ImageTier::Raw => self.raw.as_deref(),
            ImageTier::Full => self.full.as_deref(),
            ImageTier::Regular => self.regular.as_deref(),
            ImageTier::Small => self.small.as_deref(),
            ImageTier::Thumb => self.thumb.as_deref(),
        }
    }
}

/// The photographer a photo is attributed to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoUser {
    pub name: String,
    #[serde(default)]
    pub username: Option<String>,
}

/// A single photo record as returned by `/photos` and `/search/photos`.
///
/// Fields not listed here are ignored on decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photo {
    pub id: String,
    pub width: u32,
    pub height: u32,
    pub urls: PhotoUrls,
    pub user: PhotoUser,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub alt_description: Option<String>,
    /// Dominant color as a `#rrggbb` string
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub likes: u64,
}

impl Photo {
    pub fn url(&self, tier: ImageTier) -> Option<&str> {
        self.urls.get(tier)
    }

    pub fn display_name(&self) -> &str {
        &self.user.name
    }

    /// Caption shown under the image: description, then alt text.
    pub fn caption(&self) -> Option<&str> {
        [self.description.as_deref(), self.alt_description.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|s| !s.is_empty())
    }

    /// Height at which the photo keeps its aspect ratio when drawn `width` wide.
    pub fn scaled_height(&self, width: u32) -> u32 {
        if self.width == 0 {
            return 0;
        }
        ((width as u64 * self.height as u64) / self.width as u64) as u32
    }

    /// Parse [`Photo::color`] into RGB components.
    pub fn dominant_rgb(&self) -> Option<(u8, u8, u8)> {
        let hex = self.color.as_deref()?.strip_prefix('#')?;
        if hex.len() != 6 {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
        Some((channel(0)?, channel(2)?, channel(4)?))
    }
}
