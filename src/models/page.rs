use super::photo::Photo;

/// What a screen is browsing: the unbounded listing or a search.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PhotoQuery {
    #[default]
    Listing,
    Search(String),
}

impl PhotoQuery {
    /// Map text-field input to a query; blank input means the listing.
    pub fn from_input(input: &str) -> Self {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            PhotoQuery::Listing
        } else {
            PhotoQuery::Search(trimmed.to_string())
        }
    }

    pub fn search_text(&self) -> Option<&str> {
        match self {
            PhotoQuery::Listing => None,
            PhotoQuery::Search(text) => Some(text),
        }
    }

    pub fn is_search(&self) -> bool {
        matches!(self, PhotoQuery::Search(_))
    }
}

/// Paging position of a screen.
///
/// `page` is the last page that loaded successfully (0 before the first
/// load). `total_pages` is `None` for the listing, which never ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor {
    pub page: u32,
    pub total_pages: Option<u32>,
}

impl Default for PageCursor {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl PageCursor {
    pub fn unbounded() -> Self {
        Self {
            page: 0,
            total_pages: None,
        }
    }

    pub fn has_more(&self) -> bool {
        self.total_pages.map_or(true, |total| self.page < total)
    }

    pub fn next_page(&self) -> u32 {
        self.page.saturating_add(1)
    }

    /// Record a successfully loaded page.
    pub fn advance(&mut self, page: u32, total_pages: Option<u32>) {
        self.page = page;
        if total_pages.is_some() {
            self.total_pages = total_pages;
        }
    }
}

/// A page fetch decided by a screen, tagged with the generation of the
/// list it will be appended to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub query: PhotoQuery,
    pub page: u32,
    pub generation: u64,
}

/// One decoded page of results.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PhotoPage {
    pub photos: Vec<Photo>,
    /// Reported by search only
    pub total_pages: Option<u32>,
    /// Reported by search only
    pub total: Option<u64>,
}
