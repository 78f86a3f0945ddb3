use url::Url;

/// URL of the given page of a category listing; page 1 is the category URL itself
pub fn page_url(category_url: &str, page: u32) -> String {
    if page > 1 {
        format!("{}?page={}", category_url, page)
    } else {
        category_url.to_string()
    }
}

/// Resolve an href found on the site against its origin
pub fn resolve_href(origin: &Url, href: &str) -> Option<String> {
    match origin.join(href) {
        Ok(url) => Some(url.to_string()),
        Err(e) => {
            ::log::debug!("Skipping unresolvable href {:?}: {}", href, e);
            None
        }
    }
}

/// Prefix a root-relative path with the origin, leaving the path unencoded
///
/// Unlike [`resolve_href`], non-ASCII characters and spaces stay as written,
/// so pattern filters see the link as the site printed it.
pub fn prepend_origin(origin: &Url, path: &str) -> String {
    format!("{}{}", origin.as_str().trim_end_matches('/'), path)
}
