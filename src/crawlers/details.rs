use crate::crawlers::crawler::Fetcher;
use crate::parsers::fields::DetailLocators;
use crate::results::BusinessRecord;
use std::time::Duration;

/// Visits each business page in order and extracts its record
///
/// A URL whose fetch fails is logged and skipped. The delay only follows a
/// successful fetch.
pub async fn extract_details<F: Fetcher>(
    fetcher: &F,
    urls: &[String],
    locators: &DetailLocators,
    delay: Duration,
) -> Vec<BusinessRecord> {
    let mut records = Vec::with_capacity(urls.len());

    for (i, url) in urls.iter().enumerate() {
        let url = url.trim();
        ::log::info!("Fetching details for {} ({}/{})", url, i + 1, urls.len());

        let html = match fetcher.fetch(url).await {
            Ok(html) => html,
            Err(e) => {
                ::log::error!("Error fetching details for {}: {}", url, e);
                continue;
            }
        };

        let record = locators.extract(url, &html);
        ::log::debug!("Found business name: {}", record.name);
        records.push(record);

        tokio::time::sleep(delay).await;
    }

    let failed = urls.len() - records.len();
    if failed > 0 {
        ::log::warn!("{} of {} business pages could not be fetched", failed, urls.len());
    }
    records
}
