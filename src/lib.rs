// Re-export modules
pub mod config;
pub mod crawlers;
pub mod error;
pub mod filter;
pub mod parsers;
pub mod results;
pub mod store;
pub mod utils;

// Re-export commonly used types for convenience
pub use config::DirectoryConfig;
pub use crawlers::{Fetcher, HttpFetcher};
pub use error::{CrawlError, Result};
pub use results::{BusinessRecord, NOT_AVAILABLE};

use crawlers::pagination::WalkOptions;
use filter::CategoryFilter;
use parsers::ListingSelectors;
use parsers::fields::DetailLocators;
use url::Url;

/// Which part of the crawl to run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Read the URL list and write business details
    Details,
    /// Discover categories, walk them and write the URL list
    Urls,
    /// Both, one after the other
    All,
}

/// Directory crawl wired up from a configuration
pub struct Pipeline<F = HttpFetcher> {
    config: DirectoryConfig,
    fetcher: F,
    origin: Url,
    category_filter: CategoryFilter,
    listing_selectors: ListingSelectors,
    detail_locators: DetailLocators,
}

impl Pipeline<HttpFetcher> {
    /// Create a pipeline that fetches over HTTP
    pub fn new(config: DirectoryConfig) -> Result<Self> {
        let fetcher = HttpFetcher::from_config(&config)?;
        Self::with_fetcher(config, fetcher)
    }
}

impl<F: Fetcher> Pipeline<F> {
    /// Create a pipeline around any page source
    pub fn with_fetcher(config: DirectoryConfig, fetcher: F) -> Result<Self> {
        Ok(Self {
            origin: config.origin_url()?,
            category_filter: CategoryFilter::from_config(&config)?,
            listing_selectors: ListingSelectors::from_config(&config)?,
            detail_locators: DetailLocators::directory_defaults()?,
            fetcher,
            config,
        })
    }

    /// Replace the field locators used on business pages
    pub fn with_detail_locators(mut self, locators: DetailLocators) -> Self {
        self.detail_locators = locators;
        self
    }

    /// Distinct, sorted category URLs linked from the root listing page
    pub async fn discover_categories(&self) -> Result<Vec<String>> {
        let root_url = self.config.root_listing_url()?;
        Ok(crawlers::categories::discover_categories(
            &self.fetcher,
            &root_url,
            &self.category_filter,
            &self.origin,
        )
        .await)
    }

    /// Business URLs across every page of one category
    pub async fn walk_category(&self, category_url: &str) -> Vec<String> {
        crawlers::pagination::walk_category(
            &self.fetcher,
            category_url,
            &self.listing_selectors,
            &self.origin,
            WalkOptions::from_config(&self.config),
        )
        .await
    }

    /// Business URLs across all discovered categories, in category order
    pub async fn collect_business_urls(&self) -> Result<Vec<String>> {
        let categories = self.discover_categories().await?;

        let mut all_business_urls = Vec::new();
        for category_url in &categories {
            ::log::info!("Processing category: {}", category_url);
            let business_urls = self.walk_category(category_url).await;
            ::log::info!("Found {} businesses in this category", business_urls.len());
            all_business_urls.extend(business_urls);
        }

        Ok(all_business_urls)
    }

    /// Records for each URL that could be fetched, in input order
    pub async fn extract_details(&self, urls: &[String]) -> Vec<BusinessRecord> {
        crawlers::details::extract_details(
            &self.fetcher,
            urls,
            &self.detail_locators,
            self.config.detail_delay(),
        )
        .await
    }

    /// Discover, walk and save the URL list; returns the number of URLs written
    pub async fn run_urls(&self) -> Result<usize> {
        let urls = self.collect_business_urls().await?;
        store::write_url_list_to_path(&self.config.url_list_path, &urls)?;

        ::log::info!(
            "Total business URLs found: {} (saved to {})",
            urls.len(),
            self.config.url_list_path.display()
        );
        Ok(urls.len())
    }

    /// Read the URL list, extract details and save them; returns the number of records written
    pub async fn run_details(&self) -> Result<usize> {
        ::log::info!(
            "Reading business URLs from {}",
            self.config.url_list_path.display()
        );
        let urls = store::read_url_list_from_path(&self.config.url_list_path)?;
        ::log::info!("Found {} business URLs", urls.len());

        let records = self.extract_details(&urls).await;
        store::write_records_to_path(&self.config.details_path, &records)?;

        ::log::info!(
            "Total business details saved: {} of {} (saved to {})",
            records.len(),
            urls.len(),
            self.config.details_path.display()
        );
        Ok(records.len())
    }

    /// Run the requested stage
    pub async fn run(&self, stage: Stage) -> Result<()> {
        match stage {
            Stage::Details => {
                self.run_details().await?;
            }
            Stage::Urls => {
                self.run_urls().await?;
            }
            Stage::All => {
                self.run_urls().await?;
                self.run_details().await?;
            }
        }
        Ok(())
    }
}
