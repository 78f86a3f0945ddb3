use crate::config::DirectoryConfig;
use crate::crawlers::crawler::Fetcher;
use crate::error::{CrawlError, Result};
use reqwest::Client;
use std::time::Duration;

/// Plain HTTP GET fetcher with a fixed browser User-Agent
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Build a fetcher sending `user_agent`, giving up on a request after `timeout`
    pub fn new(user_agent: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .map_err(CrawlError::Client)?;

        Ok(Self { client })
    }

    pub fn from_config(config: &DirectoryConfig) -> Result<Self> {
        Self::new(&config.user_agent, config.request_timeout())
    }
}

impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        ::log::debug!("GET {}", url);
        let start = std::time::Instant::now();

        let transport = |source| CrawlError::Transport {
            url: url.to_string(),
            source,
        };

        let response = self.client.get(url).send().await.map_err(transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(CrawlError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await.map_err(transport)?;
        ::log::debug!(
            "Fetched {} ({} bytes) in {:.2} seconds",
            url,
            body.len(),
            start.elapsed().as_secs_f64()
        );
        Ok(body)
    }
}
