//! Split domain types
//!
//! A split is either resolved into a quantity, a split size and the thing being
//! split, or it fails for a reason the player should see.

use thiserror::Error;

/// What is being split
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Subject {
    Coins,
    PlatinumTokens,
    /// A looked-up item, valued at its price
    Item { name: String },
}

impl Subject {
    pub fn item(name: impl Into<String>) -> Self {
        Subject::Item { name: name.into() }
    }

    /// Singular display label
    pub fn label(&self) -> &str {
        match self {
            Subject::Coins => "Coin",
            Subject::PlatinumTokens => "Platinum token",
            Subject::Item { name } => name,
        }
    }

    pub fn is_currency(&self) -> bool {
        !matches!(self, Subject::Item { .. })
    }
}

/// Quantity, split size and subject of a split that can be carried out
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSplit {
    /// Total amount being divided (never negative)
    pub quantity: i64,

    /// Number of shares
    pub split_size: i64,

    pub subject: Subject,
}

impl ResolvedSplit {
    pub fn new(quantity: i64, split_size: i64, subject: Subject) -> Self {
        Self {
            quantity,
            split_size,
            subject,
        }
    }
}

/// Reasons a split cannot be carried out
///
/// The display text of each variant is exactly what the player is shown.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SplitFailure {
    #[error("No Coin(s) or Platinum token(s) in the inventory.")]
    InventoryNotLoaded,

    #[error("No Coin(s) or Platinum token(s) in the inventory.")]
    NoCash,

    #[error("Unable to find item '{0}'.")]
    ItemNotFound(String),

    #[error("Unable to split by 0.")]
    DivideByZero,

    #[error("Unable to split by {0}.")]
    InvalidSplitSize(i64),
}

/// Final result of a split invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SplitOutcome {
    Success { split: ResolvedSplit, per_share: i64 },
    Failure(SplitFailure),
}

impl SplitOutcome {
    /// Divide a resolved split, refusing zero and negative split sizes
    pub fn divide(split: ResolvedSplit) -> Self {
        match split.split_size {
            0 => SplitOutcome::Failure(SplitFailure::DivideByZero),
            n if n < 0 => SplitOutcome::Failure(SplitFailure::InvalidSplitSize(n)),
            n => {
                let per_share = split.quantity.div_euclid(n);
                SplitOutcome::Success { split, per_share }
            }
        }
    }

    pub fn failure(&self) -> Option<&SplitFailure> {
        match self {
            SplitOutcome::Failure(reason) => Some(reason),
            SplitOutcome::Success { .. } => None,
        }
    }

    pub fn per_share(&self) -> Option<i64> {
        match self {
            SplitOutcome::Success { per_share, .. } => Some(*per_share),
            SplitOutcome::Failure(_) => None,
        }
    }
}

impl From<SplitFailure> for SplitOutcome {
    fn from(reason: SplitFailure) -> Self {
        SplitOutcome::Failure(reason)
    }
}
