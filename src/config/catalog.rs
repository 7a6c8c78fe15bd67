//! Item catalog (items.yaml / items.json) data structures
//!
//! The catalog is the list of items the split command can price. Each item has
//! a Grand Exchange price and, optionally, a wiki price.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, catalog_invalid, catalog_parse_failed, catalog_read_failed};

/// Item catalog file
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ItemCatalog {
    #[serde(default)]
    pub items: Vec<CatalogItem>,
}

/// A single priced item
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogItem {
    /// Item name as shown in game
    pub name: String,

    /// Grand Exchange price
    pub price: i64,

    /// Price reported by the wiki, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wiki_price: Option<i64>,
}

impl CatalogItem {
    pub fn new(name: impl Into<String>, price: i64) -> Self {
        Self {
            name: name.into(),
            price,
            wiki_price: None,
        }
    }

    #[must_use]
    pub fn with_wiki_price(mut self, wiki_price: i64) -> Self {
        self.wiki_price = Some(wiki_price);
        self
    }
}

/// Serialization format of a catalog file, chosen by extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CatalogFormat {
    Yaml,
    Json,
}

impl CatalogFormat {
    fn for_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => CatalogFormat::Json,
            _ => CatalogFormat::Yaml,
        }
    }
}

impl ItemCatalog {
    pub fn new(items: Vec<CatalogItem>) -> Self {
        Self { items }
    }

    /// Parse a catalog from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Self::parse(yaml, CatalogFormat::Yaml, "<yaml>")
    }

    /// Parse a catalog from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        Self::parse(json, CatalogFormat::Json, "<json>")
    }

    /// Load and validate a catalog file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| catalog_read_failed(path.display().to_string(), e.to_string()))?;

        let catalog = Self::parse(
            &content,
            CatalogFormat::for_path(path),
            &path.display().to_string(),
        )?;
        tracing::debug!(
            path = %path.display(),
            items = catalog.len(),
            "Loaded item catalog"
        );
        Ok(catalog)
    }

    fn parse(content: &str, format: CatalogFormat, label: &str) -> Result<Self> {
        let catalog: Self = match format {
            CatalogFormat::Yaml => serde_yaml::from_str(content)
                .map_err(|e| catalog_parse_failed(label, e.to_string()))?,
            CatalogFormat::Json => serde_json::from_str(content)
                .map_err(|e| catalog_parse_failed(label, e.to_string()))?,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Check that every item has a name and non-negative prices
    pub fn validate(&self) -> Result<()> {
        for (index, item) in self.items.iter().enumerate() {
            if item.name.trim().is_empty() {
                return Err(catalog_invalid(format!("item #{} has no name", index + 1)));
            }
            if item.price < 0 {
                return Err(catalog_invalid(format!(
                    "item '{}' has a negative price",
                    item.name
                )));
            }
            if item.wiki_price.is_some_and(|p| p < 0) {
                return Err(catalog_invalid(format!(
                    "item '{}' has a negative wiki price",
                    item.name
                )));
            }
        }
        Ok(())
    }

    /// Items whose name contains `phrase`, ignoring case, in catalog order
    ///
    /// A blank phrase matches nothing.
    pub fn search(&self, phrase: &str) -> Vec<&CatalogItem> {
        let needle = phrase.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        self.items
            .iter()
            .filter(|item| item.name.to_lowercase().contains(&needle))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
