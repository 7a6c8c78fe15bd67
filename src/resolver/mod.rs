//! Split resolution
//!
//! This module turns the raw arguments of a split command into a
//! [`SplitOutcome`]:
//! - No arguments: split the currency in the inventory by the default size
//! - One argument: a split size for the currency, or else an item phrase
//! - More arguments: an item phrase with an optional split size at either end
//!
//! The lookup is called at most once per resolution and nothing here keeps
//! state between calls.

pub mod extraction;

pub use extraction::{SplitSizeExtraction, SplitSizePosition, join_phrase, parse_split_size};

use crate::domain::{InventorySnapshot, ResolvedSplit, SplitFailure, SplitOutcome, Subject};
use crate::lookup::ItemLookup;

/// Resolve a split command
///
/// `default_split_size` is used whenever the arguments do not carry one. A zero
/// split size (given or default) fails with [`SplitFailure::DivideByZero`]
/// before any division happens.
pub fn resolve<S, L>(
    args: &[S],
    default_split_size: i64,
    inventory: &InventorySnapshot,
    lookup: &L,
) -> SplitOutcome
where
    S: AsRef<str>,
    L: ItemLookup + ?Sized,
{
    let resolved = match args {
        [] => resolve_inventory(default_split_size, inventory),
        [single] => resolve_single(single.as_ref(), default_split_size, inventory, lookup),
        _ => resolve_phrase(args, default_split_size, lookup),
    };

    match resolved {
        Ok(split) => {
            let outcome = SplitOutcome::divide(split);
            match &outcome {
                SplitOutcome::Success { per_share, .. } => {
                    tracing::debug!(per_share, "Split: {}", per_share);
                }
                SplitOutcome::Failure(reason) => {
                    tracing::debug!(%reason, "Invalid split size");
                }
            }
            outcome
        }
        Err(reason) => reason.into(),
    }
}

/// Split the inventory currency by the default split size
fn resolve_inventory(
    default_split_size: i64,
    inventory: &InventorySnapshot,
) -> Result<ResolvedSplit, SplitFailure> {
    if !inventory.is_loaded() {
        tracing::debug!("Inventory is empty and hasn't loaded.");
        return Err(SplitFailure::InventoryNotLoaded);
    }

    currency_split(default_split_size, inventory)
}

/// A lone token is a split size if it parses, an item phrase otherwise
fn resolve_single<L>(
    token: &str,
    default_split_size: i64,
    inventory: &InventorySnapshot,
    lookup: &L,
) -> Result<ResolvedSplit, SplitFailure>
where
    L: ItemLookup + ?Sized,
{
    match parse_split_size(token) {
        Some(split_size) => currency_split(split_size, inventory),
        None => item_split(token.to_string(), default_split_size, lookup),
    }
}

/// Several tokens always name an item; a number at either end is the split size
fn resolve_phrase<S, L>(
    args: &[S],
    default_split_size: i64,
    lookup: &L,
) -> Result<ResolvedSplit, SplitFailure>
where
    S: AsRef<str>,
    L: ItemLookup + ?Sized,
{
    let extraction = SplitSizeExtraction::scan(args);
    let split_size = if extraction.found() {
        extraction.split_size
    } else {
        default_split_size
    };

    tracing::debug!(
        position = ?extraction.position,
        split_size,
        "Extracted split size"
    );
    item_split(extraction.phrase(), split_size, lookup)
}

fn currency_split(
    split_size: i64,
    inventory: &InventorySnapshot,
) -> Result<ResolvedSplit, SplitFailure> {
    let (subject, quantity) = inventory.currency_amount();
    if quantity <= 0 {
        tracing::debug!("No money in the inventory.");
        return Err(SplitFailure::NoCash);
    }

    Ok(ResolvedSplit::new(quantity, split_size, subject))
}

fn item_split<L>(phrase: String, split_size: i64, lookup: &L) -> Result<ResolvedSplit, SplitFailure>
where
    L: ItemLookup + ?Sized,
{
    match lookup.search(&phrase) {
        Some(item) => Ok(ResolvedSplit::new(
            item.value.max(0),
            split_size,
            Subject::item(item.name),
        )),
        None => {
            tracing::debug!(%phrase, "Unable to find item");
            Err(SplitFailure::ItemNotFound(phrase))
        }
    }
}
