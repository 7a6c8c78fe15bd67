//! Catalog-backed item lookup

use crate::config::catalog::{CatalogItem, ItemCatalog};

use super::{ItemLookup, ItemMatch, LookupResult, best_match};

/// Which price an item is valued at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PriceSource {
    #[default]
    GrandExchange,
    /// Wiki price, falling back to the Grand Exchange price when unknown
    Wiki,
}

impl PriceSource {
    pub fn from_wiki_flag(use_wiki_prices: bool) -> Self {
        if use_wiki_prices {
            PriceSource::Wiki
        } else {
            PriceSource::GrandExchange
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PriceSource::GrandExchange => "Grand Exchange",
            PriceSource::Wiki => "Wiki",
        }
    }

    pub fn price_of(self, item: &CatalogItem) -> i64 {
        match self {
            PriceSource::GrandExchange => item.price,
            PriceSource::Wiki => item.wiki_price.unwrap_or(item.price),
        }
    }
}

/// [`ItemLookup`] over an in-memory [`ItemCatalog`]
#[derive(Debug, Clone, Default)]
pub struct CatalogLookup {
    catalog: ItemCatalog,
    price_source: PriceSource,
}

impl CatalogLookup {
    pub fn new(catalog: ItemCatalog, price_source: PriceSource) -> Self {
        Self {
            catalog,
            price_source,
        }
    }
}

impl ItemLookup for CatalogLookup {
    fn search(&self, phrase: &str) -> LookupResult {
        let candidates = self.catalog.search(phrase);
        let item = best_match(candidates.iter().copied(), phrase, |item| item.name.as_str())?;

        tracing::debug!(
            phrase,
            candidates = candidates.len(),
            matched = %item.name,
            "Resolved item lookup"
        );
        Some(ItemMatch::new(
            item.name.clone(),
            self.price_source.price_of(item),
        ))
    }
}
