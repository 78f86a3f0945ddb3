
use crate::crawlers::crawler::Fetcher;
use crate::error::{CrawlError, Result};
use std::collections::HashMap;
use std::sync::Mutex;

/// In-memory site that records every URL requested from it
#[derive(Debug, Default)]
pub(crate) struct MockFetcher {
    pages: HashMap<String, std::result::Result<String, u16>>,
    requests: Mutex<Vec<String>>,
}

impl MockFetcher {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn page(mut self, url: &str, body: &str) -> Self {
        self.pages.insert(url.to_string(), Ok(body.to_string()));
        self
    }

    pub(crate) fn failing(mut self, url: &str, status: u16) -> Self {
        self.pages.insert(url.to_string(), Err(status));
        self
    }

    pub(crate) fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

impl Fetcher for MockFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        self.requests.lock().unwrap().push(url.to_string());
        match self.pages.get(url) {
            Some(Ok(body)) => Ok(body.clone()),
            Some(Err(status)) => Err(CrawlError::Status {
                status: *status,
                url: url.to_string(),
            }),
            None => Err(CrawlError::Status {
                status: 404,
                url: url.to_string(),
            }),
        }
    }
}

/// Listing page with the given business slugs and pagination links
pub(crate) fn listing_page(slugs: &[&str], page_links: &[u32]) -> String {
    let mut body = String::from("<html><body>");
    for slug in slugs {
        body.push_str(&format!(r#"<a placeid="1" href="/biz/{}">{}</a>"#, slug, slug));
    }
    if !page_links.is_empty() {
        body.push_str("<ul class=\"pagination\">");
        for page in page_links {
            body.push_str(&format!(
                r#"<li class="page-item"><a href="/c/plumbers/?page={}">{}</a></li>"#,
                page, page
            ));
        }
        body.push_str("</ul>");
    }
    body.push_str("</body></html>");
    body
}
