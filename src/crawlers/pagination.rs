use crate::config::DirectoryConfig;
use crate::crawlers::crawler::Fetcher;
use crate::parsers::{ListingSelectors, html};
use crate::utils::page_url;
use std::time::Duration;
use url::Url;

/// Knobs for walking one category's pages
#[derive(Debug, Clone, Copy)]
pub struct WalkOptions {
    /// Pause before fetching the next page
    pub page_delay: Duration,
    /// Hard stop regardless of what the pagination control claims
    pub max_pages: u32,
}

impl WalkOptions {
    pub fn from_config(config: &DirectoryConfig) -> Self {
        Self {
            page_delay: config.page_delay(),
            max_pages: config.max_pages,
        }
    }
}

/// Walks every page of a category and returns the business URLs in page order
///
/// Stops when the page has no pagination control, when the current page
/// reaches the highest advertised page, or when `max_pages` is reached. A
/// failed fetch ends the walk; links from earlier pages are kept.
pub async fn walk_category<F: Fetcher>(
    fetcher: &F,
    category_url: &str,
    selectors: &ListingSelectors,
    origin: &Url,
    options: WalkOptions,
) -> Vec<String> {
    let mut business_urls = Vec::new();
    let mut current_page: u32 = 1;

    loop {
        let url = page_url(category_url, current_page);

        let html = match fetcher.fetch(&url).await {
            Ok(html) => html,
            Err(e) => {
                ::log::error!("Error fetching page {} of {}: {}", current_page, category_url, e);
                break;
            }
        };

        let listing = html::parse_listing(&html, selectors, origin);
        ::log::debug!(
            "Page {} of {} lists {} businesses",
            current_page,
            category_url,
            listing.business_links.len()
        );
        business_urls.extend(listing.business_links);

        let index = listing.page_index;
        if !index.control_present {
            ::log::info!("No pagination found on {}", url);
            break;
        }

        if index.highest_page.is_none() {
            // Treated as the last page, but the markup probably changed
            ::log::warn!("Pagination control on {} has no page links", url);
        }

        let max_page = index.max_page(current_page);
        if current_page >= max_page {
            ::log::info!(
                "No more pages to process (current page: {}, max page: {})",
                current_page,
                max_page
            );
            break;
        }

        if current_page >= options.max_pages {
            ::log::warn!(
                "Stopping {} at page limit {} (site claims {} pages)",
                category_url,
                options.max_pages,
                max_page
            );
            break;
        }

        current_page += 1;
        tokio::time::sleep(options.page_delay).await;
    }

    business_urls
}
