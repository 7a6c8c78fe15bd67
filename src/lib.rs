//! Splitter - split loot evenly
//!
//! Works out how to divide coins, platinum tokens or the value of an item
//! among a group, from the loosely typed arguments of a `split` command.
//!
//! ```
//! use splitter::domain::{InventorySnapshot, Purse};
//! use splitter::lookup::CatalogLookup;
//! use splitter::{resolver, ui};
//!
//! let inventory = InventorySnapshot::Loaded(Purse::new(1_000_000, 0));
//! let outcome = resolver::resolve(&["4"], 2, &inventory, &CatalogLookup::default());
//! assert_eq!(ui::format(&outcome), "Splitting Coins 250,000, ( 1,000,000 / 4 )");
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod lookup;
pub mod plugin;
pub mod resolver;
pub mod ui;

pub use domain::{InventorySnapshot, Purse, ResolvedSplit, SplitFailure, SplitOutcome, Subject};
pub use error::{Result, SplitterError};
pub use plugin::Splitter;
