use crate::crawlers::crawler::Fetcher;
use crate::filter::CategoryFilter;
use crate::parsers::html;
use url::Url;

/// Fetches the root listing page and returns its distinct, sorted category URLs
///
/// A failed fetch is logged and yields no categories.
pub async fn discover_categories<F: Fetcher>(
    fetcher: &F,
    root_url: &str,
    filter: &CategoryFilter,
    origin: &Url,
) -> Vec<String> {
    ::log::info!("Fetching category URLs from {}", root_url);

    let html = match fetcher.fetch(root_url).await {
        Ok(html) => html,
        Err(e) => {
            ::log::error!("Error fetching the root listing page: {}", e);
            return Vec::new();
        }
    };

    let found = html::parse_category_links(&html, filter, origin);
    let total = found.len();
    let categories = filter.filter(found);

    ::log::info!(
        "Found {} category links, {} distinct categories after filtering",
        total,
        categories.len()
    );
    categories
}
