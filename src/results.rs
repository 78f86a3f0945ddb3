use serde::{Deserialize, Serialize};

/// Placeholder written in place of a field the page did not carry
pub const NOT_AVAILABLE: &str = "N/A";

/// Contact details extracted from one business profile page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessRecord {
    /// URL of the profile page
    #[serde(rename = "URL")]
    pub url: String,

    /// Business name
    #[serde(rename = "Name")]
    pub name: String,

    /// Phone number as displayed
    #[serde(rename = "Phone")]
    pub phone: String,

    /// Street, suburb, state and postcode joined by single spaces
    #[serde(rename = "Address")]
    pub address: String,
}

impl BusinessRecord {
    /// Create a record, substituting the placeholder for any missing field
    pub fn new(
        url: String,
        name: Option<String>,
        phone: Option<String>,
        address: Option<String>,
    ) -> Self {
        let or_na = |value: Option<String>| value.unwrap_or_else(|| NOT_AVAILABLE.to_string());
        Self {
            url,
            name: or_na(name),
            phone: or_na(phone),
            address: or_na(address),
        }
    }
}
