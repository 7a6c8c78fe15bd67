//! Inventory domain types
//!
//! The split command only cares about the two currencies a player can carry:
//! coins and platinum tokens. Platinum tokens win whenever they are present.

use super::split::Subject;

/// Currency counts read from the player's inventory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Purse {
    /// Number of coins
    pub coins: i64,

    /// Number of platinum tokens
    pub platinum_tokens: i64,

    /// Whether the inventory holds platinum tokens at all
    pub has_platinum: bool,
}

impl Purse {
    /// Create a purse; platinum counts as present when there is at least one token
    pub fn new(coins: i64, platinum_tokens: i64) -> Self {
        Self {
            coins,
            platinum_tokens,
            has_platinum: platinum_tokens > 0,
        }
    }

    /// The currency a bare split divides
    pub fn currency(&self) -> Subject {
        if self.has_platinum {
            Subject::PlatinumTokens
        } else {
            Subject::Coins
        }
    }

    /// Amount of the currency a bare split divides
    pub fn amount(&self) -> i64 {
        if self.has_platinum {
            self.platinum_tokens
        } else {
            self.coins
        }
    }
}

/// Snapshot of the inventory at the time of the command
///
/// `Unavailable` means the inventory has not been loaded yet (e.g. logged out),
/// which is different from a loaded inventory that happens to be empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InventorySnapshot {
    #[default]
    Unavailable,
    Loaded(Purse),
}

impl InventorySnapshot {
    /// Build a snapshot from optional counts; no counts at all means not loaded
    pub fn from_counts(coins: Option<i64>, platinum_tokens: Option<i64>) -> Self {
        if coins.is_none() && platinum_tokens.is_none() {
            return InventorySnapshot::Unavailable;
        }
        InventorySnapshot::Loaded(Purse::new(
            coins.unwrap_or(0),
            platinum_tokens.unwrap_or(0),
        ))
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, InventorySnapshot::Loaded(_))
    }

    /// Currency and amount to split, treating an unloaded inventory as empty coins
    pub fn currency_amount(&self) -> (Subject, i64) {
        match self {
            InventorySnapshot::Loaded(purse) => (purse.currency(), purse.amount()),
            InventorySnapshot::Unavailable => (Subject::Coins, 0),
        }
    }
}
