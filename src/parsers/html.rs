use crate::filter::CategoryFilter;
use crate::parsers::{ListingPage, ListingSelectors, PageIndex};
use crate::utils::{prepend_origin, resolve_href};
use scraper::{Html, Selector};
use std::sync::LazyLock;
use url::Url;

static ANCHOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a[href]").expect("valid anchor selector"));

/// Extracts every href on the page, in document order
pub fn parse_links(html: &str) -> Vec<String> {
    let doc = Html::parse_document(html);
    doc.select(&ANCHOR)
        .filter_map(|e| e.value().attr("href"))
        .map(|s| s.to_string())
        .collect()
}

/// Extracts category URLs from the root listing page
///
/// Category hrefs are root-relative, so the origin is prepended without
/// re-encoding the path. Only the path prefix is checked here; exclusion and
/// dedup happen in [`CategoryFilter::filter`].
pub fn parse_category_links(html: &str, filter: &CategoryFilter, origin: &Url) -> Vec<String> {
    let links: Vec<String> = parse_links(html)
        .iter()
        .filter(|href| filter.is_category_href(href))
        .map(|href| prepend_origin(origin, href))
        .collect();

    ::log::debug!("Root page carries {} category links", links.len());
    links
}

/// Parses a category listing page into its business links and page index
pub fn parse_listing(html: &str, selectors: &ListingSelectors, origin: &Url) -> ListingPage {
    let doc = Html::parse_document(html);

    let business_links = doc
        .select(&selectors.listing_link)
        .filter_map(|e| e.value().attr("href"))
        .filter_map(|href| resolve_href(origin, href))
        .collect::<Vec<String>>();

    ListingPage {
        business_links,
        page_index: page_index(&doc, &selectors.pagination_item, origin),
    }
}

/// Scans the pagination control for the highest page number it links to
pub fn page_index(doc: &Html, pagination_item: &Selector, origin: &Url) -> PageIndex {
    let mut index = PageIndex::default();

    for item in doc.select(pagination_item) {
        index.control_present = true;

        // Only the first link of each item counts
        let Some(href) = item
            .select(&ANCHOR)
            .next()
            .and_then(|link| link.value().attr("href"))
        else {
            continue;
        };

        if let Some(page) = page_argument(origin, href) {
            index.highest_page = Some(index.highest_page.map_or(page, |max| max.max(page)));
        }
    }

    index
}

/// Reads the numeric `page` query argument of a pagination link
fn page_argument(origin: &Url, href: &str) -> Option<u32> {
    let url = origin.join(href).ok()?;
    url.query_pairs()
        .find(|(key, _)| key == "page")
        .and_then(|(_, value)| value.trim().parse::<u32>().ok())
}
