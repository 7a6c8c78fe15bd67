//! Item lookup
//!
//! The split command can divide the value of an item instead of currency. Items
//! are found by a free-text phrase through the [`ItemLookup`] trait; how the
//! candidates are produced is up to the implementation, but picking the winner
//! among them always goes through [`best_match`].

pub mod catalog;

pub use catalog::{CatalogLookup, PriceSource};

/// An item matched by a lookup phrase
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemMatch {
    /// Display name of the item
    pub name: String,

    /// Value of one item
    pub value: i64,
}

impl ItemMatch {
    pub fn new(name: impl Into<String>, value: i64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Result of a lookup: the best match, or `None` when nothing matched
pub type LookupResult = Option<ItemMatch>;

/// Capability to resolve a phrase to a single item
pub trait ItemLookup {
    fn search(&self, phrase: &str) -> LookupResult;
}

impl<L: ItemLookup + ?Sized> ItemLookup for &L {
    fn search(&self, phrase: &str) -> LookupResult {
        (**self).search(phrase)
    }
}

/// Pick the best candidate for `phrase`
///
/// A candidate whose name equals the phrase ignoring case wins immediately.
/// Otherwise the candidate with the shortest name is taken as a guess; on equal
/// lengths the earlier candidate is kept. Length is counted in `char`s, so a
/// name outside the Basic Multilingual Plane is not weighed by its UTF-16 units.
pub fn best_match<'a, T>(
    candidates: impl IntoIterator<Item = &'a T>,
    phrase: &str,
    name_of: impl Fn(&T) -> &str,
) -> Option<&'a T>
where
    T: 'a + ?Sized,
{
    let wanted = phrase.to_lowercase();
    let mut shortest: Option<(&'a T, usize)> = None;

    for candidate in candidates {
        let name = name_of(candidate);
        if name.to_lowercase() == wanted {
            return Some(candidate);
        }

        let len = name.chars().count();
        if shortest.is_none_or(|(_, best)| len < best) {
            shortest = Some((candidate, len));
        }
    }

    // Take a guess
    shortest.map(|(candidate, _)| candidate)
}
