use crate::config::DirectoryConfig;
use regex::Regex;
use std::collections::BTreeSet;

/// Decides which links on the root listing page are category pages
#[derive(Debug)]
pub struct CategoryFilter {
    /// Raw hrefs must start with this path (and not equal it)
    required_path_prefix: String,
    exclude_regexes: Vec<Regex>,
}

impl CategoryFilter {
    /// Create a filter from a path prefix and regex exclude patterns
    pub fn new(required_path_prefix: &str, exclude_patterns: &[String]) -> Result<Self, regex::Error> {
        let mut exclude_regexes = Vec::with_capacity(exclude_patterns.len());
        for pattern in exclude_patterns {
            exclude_regexes.push(Regex::new(pattern)?);
        }

        Ok(Self {
            required_path_prefix: required_path_prefix.to_string(),
            exclude_regexes,
        })
    }

    /// Create a filter from the crawl configuration
    pub fn from_config(config: &DirectoryConfig) -> Result<Self, regex::Error> {
        Self::new(&config.category_path, &config.category_exclude_patterns)
    }

    /// Whether a raw href on the root page points at a category
    pub fn is_category_href(&self, href: &str) -> bool {
        href.starts_with(&self.required_path_prefix) && href != self.required_path_prefix
    }

    /// Whether a category URL survives the exclude patterns
    pub fn is_kept(&self, url: &str) -> bool {
        !self.exclude_regexes.iter().any(|regex| regex.is_match(url))
    }

    /// Drop excluded URLs and duplicates; the result is sorted ascending
    pub fn filter<I, S>(&self, urls: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let kept: BTreeSet<String> = urls
            .into_iter()
            .map(|url| -> String { url.into() })
            .filter(|url| {
                let keep = self.is_kept(url);
                if !keep {
                    ::log::trace!("Category filter rejected: {}", url);
                }
                keep
            })
            .collect();

        kept.into_iter().collect()
    }
}
