use std::fmt::Display;

use serde::Serialize;

/// A request for a page of cards, forwarded as is to the cards service.
#[derive(Debug, Serialize, PartialEq, Eq, Clone, Default)]
pub struct CardsRequest {
    /// The page to fetch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) page: Option<u32>,

    /// The number of cards per page.
    #[serde(rename = "pageSize", skip_serializing_if = "Option::is_none")]
    pub(crate) page_size: Option<u32>,
}

impl CardsRequest {
    /// Creates a new `CardsRequest` with the given page and page size.
    pub fn new(page: Option<u32>, page_size: Option<u32>) -> Self {
        Self { page, page_size }
    }

    /// Retrieves the requested page.
    pub fn page(&self) -> Option<u32> {
        self.page
    }

    /// Retrieves the requested page size.
    pub fn page_size(&self) -> Option<u32> {
        self.page_size
    }
}

impl Display for CardsRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "CardsRequest: page={:?}, page_size={:?}",
            self.page, self.page_size
        )
    }
}
