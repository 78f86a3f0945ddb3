//! Field location on business profile pages.
//!
//! Each field is described by a [`FieldSpec`]: a name plus an ordered list of
//! [`FieldLocator`]s. The first locator that finds non-blank text wins, so a
//! brittle presentation-coupled selector can be backed by sturdier ones
//! without touching the extraction code.

use crate::error::Result;
use crate::parsers::compile_selector;
use crate::results::BusinessRecord;
use scraper::{ElementRef, Html, Selector};
use std::fmt;

/// A strategy for finding one field's text in a parsed document
pub trait FieldLocator: fmt::Debug + Send + Sync {
    /// Trimmed text of the located element, or `None` if absent or blank
    fn locate(&self, document: &Html) -> Option<String>;
}

fn element_text(element: ElementRef<'_>) -> Option<String> {
    let text = element.text().collect::<String>();
    let text = text.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

/// Finds the first element matched by an arbitrary CSS selector
#[derive(Debug)]
pub struct CssLocator {
    selector: Selector,
}

impl CssLocator {
    pub fn new(css: &str) -> Result<Self> {
        Ok(Self {
            selector: compile_selector(css)?,
        })
    }
}

impl FieldLocator for CssLocator {
    fn locate(&self, document: &Html) -> Option<String> {
        document.select(&self.selector).next().and_then(element_text)
    }
}

/// Finds the first element of a tag whose attribute equals a value exactly
///
/// The comparison is a plain string equality on the raw attribute value, so
/// inline styles like `top:-0.2em;` match only when written identically.
#[derive(Debug)]
pub struct AttributeLocator {
    tag: Selector,
    attr: String,
    value: String,
}

impl AttributeLocator {
    pub fn new(tag: &str, attr: &str, value: &str) -> Result<Self> {
        Ok(Self {
            tag: compile_selector(tag)?,
            attr: attr.to_string(),
            value: value.to_string(),
        })
    }

    /// Match on the exact inline `style` attribute
    pub fn style(tag: &str, style: &str) -> Result<Self> {
        Self::new(tag, "style", style)
    }
}

impl FieldLocator for AttributeLocator {
    fn locate(&self, document: &Html) -> Option<String> {
        document
            .select(&self.tag)
            .find(|e| e.value().attr(&self.attr) == Some(self.value.as_str()))
            .and_then(element_text)
    }
}

/// A named field and the locators tried for it, in priority order
#[derive(Debug)]
pub struct FieldSpec {
    pub name: String,
    locators: Vec<Box<dyn FieldLocator>>,
}

impl FieldSpec {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            locators: Vec::new(),
        }
    }

    /// Append a lower-priority locator
    pub fn with_locator(mut self, locator: impl FieldLocator + 'static) -> Self {
        self.locators.push(Box::new(locator));
        self
    }
}

/// Text of the field as found by the first locator that succeeds
pub fn find_field(document: &Html, spec: &FieldSpec) -> Option<String> {
    let found = spec
        .locators
        .iter()
        .find_map(|locator| locator.locate(document));

    if found.is_none() {
        ::log::debug!("Field {} not found", spec.name);
    }
    found
}

/// Marker attribute the directory uses to tag contact fields
const SELECTOR_TYPE: &str = "selector-type";

/// Locators for every field of a business profile page
#[derive(Debug)]
pub struct DetailLocators {
    pub name: FieldSpec,
    pub phone: FieldSpec,
    /// Address components in output order
    pub address: Vec<FieldSpec>,
}

impl DetailLocators {
    /// Locators matching the chamber-of-commerce directory markup
    pub fn directory_defaults() -> Result<Self> {
        let name = FieldSpec::new("Name")
            .with_locator(AttributeLocator::style("sup", "top:-0.2em;")?)
            .with_locator(CssLocator::new(r#"[selector-type="Name"]"#)?);

        let phone =
            FieldSpec::new("Phone").with_locator(AttributeLocator::new("a", SELECTOR_TYPE, "Phone")?);

        let mut address = Vec::new();
        for part in ["Address1", "Address2", "City", "State", "Zip"] {
            address.push(
                FieldSpec::new(part).with_locator(AttributeLocator::new("span", SELECTOR_TYPE, part)?),
            );
        }

        Ok(Self {
            name,
            phone,
            address,
        })
    }

    /// Extract a record from a business profile page
    pub fn extract(&self, url: &str, html: &str) -> BusinessRecord {
        let document = Html::parse_document(html);

        let name = find_field(&document, &self.name);
        let phone = find_field(&document, &self.phone);

        let parts: Vec<String> = self
            .address
            .iter()
            .filter_map(|spec| find_field(&document, spec))
            .collect();
        let address = if parts.is_empty() {
            None
        } else {
            Some(parts.join(" "))
        };

        BusinessRecord::new(url.to_string(), name, phone, address)
    }
}
