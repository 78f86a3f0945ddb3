pub mod fields;
pub mod html;


use crate::config::DirectoryConfig;
use crate::error::{CrawlError, Result};
use scraper::Selector;

/// Compile a CSS selector, turning a parse failure into a crawl error
pub(crate) fn compile_selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| CrawlError::Selector {
        selector: css.to_string(),
        reason: e.to_string(),
    })
}

/// Selectors used on category listing pages
#[derive(Debug, Clone)]
pub struct ListingSelectors {
    /// Anchors marked as business listing entries
    pub listing_link: Selector,
    /// Items of the pagination control
    pub pagination_item: Selector,
}

impl ListingSelectors {
    /// Build the selectors for a marker attribute and pagination item selector
    pub fn new(listing_marker_attr: &str, pagination_item_selector: &str) -> Result<Self> {
        Ok(Self {
            listing_link: compile_selector(&format!("a[{}][href]", listing_marker_attr))?,
            pagination_item: compile_selector(pagination_item_selector)?,
        })
    }

    pub fn from_config(config: &DirectoryConfig) -> Result<Self> {
        Self::new(&config.listing_marker_attr, &config.pagination_item_selector)
    }
}

/// What the pagination control of a listing page advertises
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageIndex {
    /// Whether the page carries any pagination item at all
    pub control_present: bool,
    /// Largest page number parsed from the control's links
    pub highest_page: Option<u32>,
}

impl PageIndex {
    /// Last page of the listing as seen from `current_page`
    pub fn max_page(&self, current_page: u32) -> u32 {
        self.highest_page.map_or(current_page, |page| page.max(current_page))
    }
}

/// Result of parsing one category listing page
#[derive(Debug, Clone, Default)]
pub struct ListingPage {
    /// Resolved business profile URLs, in document order
    pub business_links: Vec<String>,
    /// Pagination state advertised by the page
    pub page_index: PageIndex,
}
