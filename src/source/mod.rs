//! Where image lists come from.

use crate::prelude::*;

pub mod web_source;
pub use web_source::WebPageSource;

/// Inbound configuration of one page fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub url: String,
    pub page: u32,
    pub limit: u32,
}

impl PageRequest {
    pub fn new(url: impl Into<String>, page: u32, limit: u32) -> Self {
        Self {
            url: url.into(),
            page,
            limit,
        }
    }

    /// An empty URL disables fetching.
    pub fn is_enabled(&self) -> bool {
        !self.url.trim().is_empty()
    }

    /// The full request URL, `<url>?page=<page>&limit=<limit>`.
    pub fn endpoint(&self) -> String {
        format!("{}?page={}&limit={}", self.url.trim(), self.page, self.limit)
    }
}

/// A backend able to return one page of images.
#[async_trait::async_trait]
pub trait PageSource: Send + Sync {
    async fn fetch_page(&self, request: &PageRequest) -> Result<ImageList, FetchError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_appends_page_and_limit() {
        let req = PageRequest::new("https://api.example/images", 1, 3);
        assert_eq!(req.endpoint(), "https://api.example/images?page=1&limit=3");
    }

    #[test]
    fn blank_url_is_disabled() {
        assert!(!PageRequest::new("", 1, 5).is_enabled());
        assert!(!PageRequest::new("   ", 1, 5).is_enabled());
        assert!(PageRequest::new("https://api.example/images", 1, 5).is_enabled());
    }
}
