use crate::error::{CrawlError, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

/// Configuration for a directory crawl
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectoryConfig {
    /// Scheme and host every relative link is resolved against
    #[serde(default = "default_origin")]
    pub origin: String,

    /// Path of the root listing page; category links start with it
    #[serde(default = "default_category_path")]
    pub category_path: String,

    /// Attribute that marks an anchor as a business listing entry
    #[serde(default = "default_listing_marker_attr")]
    pub listing_marker_attr: String,

    /// CSS selector for the items of the pagination control
    #[serde(default = "default_pagination_item_selector")]
    pub pagination_item_selector: String,

    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Pause between pages of one category, in milliseconds
    #[serde(default = "default_page_delay_ms")]
    pub page_delay_ms: u64,

    /// Pause after each successful business page fetch, in milliseconds
    #[serde(default = "default_detail_delay_ms")]
    pub detail_delay_ms: u64,

    /// Upper bound on pages walked per category
    #[serde(default = "default_max_pages")]
    pub max_pages: u32,

    /// Regex patterns; a category URL matching any of them is discarded
    #[serde(default = "default_category_exclude_patterns")]
    pub category_exclude_patterns: Vec<String>,

    /// File holding one business URL per line
    #[serde(default = "default_url_list_path")]
    pub url_list_path: PathBuf,

    /// File the extracted business records are written to
    #[serde(default = "default_details_path")]
    pub details_path: PathBuf,
}

fn default_origin() -> String {
    "https://australia.chamberofcommerce.com".to_string()
}

fn default_category_path() -> String {
    "/business-directory/queensland/albion/".to_string()
}

fn default_listing_marker_attr() -> String {
    "placeid".to_string()
}

fn default_pagination_item_selector() -> String {
    "li.page-item".to_string()
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36".to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_page_delay_ms() -> u64 {
    1000
}

fn default_detail_delay_ms() -> u64 {
    2000
}

/// Generous enough for any real category, small enough to stop a looping site
fn default_max_pages() -> u32 {
    500
}

fn default_category_exclude_patterns() -> Vec<String> {
    vec![r"\d".to_string()]
}

fn default_url_list_path() -> PathBuf {
    PathBuf::from("business_urls.csv")
}

fn default_details_path() -> PathBuf {
    PathBuf::from("business_details.csv")
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            origin: default_origin(),
            category_path: default_category_path(),
            listing_marker_attr: default_listing_marker_attr(),
            pagination_item_selector: default_pagination_item_selector(),
            user_agent: default_user_agent(),
            request_timeout_secs: default_request_timeout_secs(),
            page_delay_ms: default_page_delay_ms(),
            detail_delay_ms: default_detail_delay_ms(),
            max_pages: default_max_pages(),
            category_exclude_patterns: default_category_exclude_patterns(),
            url_list_path: default_url_list_path(),
            details_path: default_details_path(),
        }
    }
}

impl DirectoryConfig {
    /// Create a configuration for another site, keeping every other default
    pub fn new(origin: &str, category_path: &str) -> Self {
        Self {
            origin: origin.to_string(),
            category_path: category_path.to_string(),
            ..Self::default()
        }
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let mut contents = String::new();
        File::open(path)
            .and_then(|mut file| file.read_to_string(&mut contents))
            .map_err(|source| CrawlError::Io {
                path: path.to_path_buf(),
                source,
            })?;

        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parsed origin URL
    pub fn origin_url(&self) -> Result<Url> {
        Url::parse(&self.origin).map_err(|source| CrawlError::InvalidUrl {
            url: self.origin.clone(),
            source,
        })
    }

    /// Absolute URL of the root listing page
    pub fn root_listing_url(&self) -> Result<String> {
        let origin = self.origin_url()?;
        origin
            .join(&self.category_path)
            .map(|url| url.to_string())
            .map_err(|source| CrawlError::InvalidUrl {
                url: self.category_path.clone(),
                source,
            })
    }

    pub fn page_delay(&self) -> Duration {
        Duration::from_millis(self.page_delay_ms)
    }

    pub fn detail_delay(&self) -> Duration {
        Duration::from_millis(self.detail_delay_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
