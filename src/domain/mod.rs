//! Domain models for Splitter
//!
//! This module contains pure domain objects: what the player carries and what a
//! split resolves to. These types are free of I/O and hold the split invariants.

pub mod inventory;
pub mod split;

pub use inventory::{InventorySnapshot, Purse};
pub use split::{ResolvedSplit, SplitFailure, SplitOutcome, Subject};
