use crate::error::Result;
use std::future::Future;

/// Source of page bodies for the crawl stages
///
/// Implemented over HTTP by [`super::web::HttpFetcher`]; tests substitute an
/// in-memory site.
pub trait Fetcher {
    /// Fetch the body of `url`, failing on transport errors and non-2xx statuses
    fn fetch(&self, url: &str) -> impl Future<Output = Result<String>> + Send;
}
