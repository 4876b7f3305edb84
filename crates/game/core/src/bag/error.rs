//! Bag operation errors.

use super::grid::Slot;
use crate::error::{ErrorSeverity, GameError};

/// Reasons a bag mutation was rejected. A rejected call never changes the bag.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BagError {
    #[error("slot {0} is outside the bag")]
    OutOfBounds(Slot),

    #[error("item footprint must be at least 1x1")]
    InvalidFootprint,

    #[error("quantity must be positive")]
    ZeroQuantity,

    #[error("no item anchored at {0}")]
    NoItemAt(Slot),

    #[error("an item is already anchored at {0}")]
    AnchorOccupied(Slot),

    #[error("region at {0} is not free")]
    RegionUnavailable(Slot),

    #[error("requested {requested}, only {available} available")]
    InsufficientQuantity { requested: u32, available: u32 },

    #[error("quantity {quantity} exceeds stack limit {max_stack}")]
    ExceedsStackLimit { quantity: u16, max_stack: u16 },

    #[error("bag invariant violated: {0}")]
    Corrupted(&'static str),
}

impl GameError for BagError {
    fn severity(&self) -> ErrorSeverity {
        use BagError::*;
        match self {
            OutOfBounds(_) | InvalidFootprint | ZeroQuantity | ExceedsStackLimit { .. } => {
                ErrorSeverity::Validation
            }
            NoItemAt(_) | AnchorOccupied(_) | RegionUnavailable(_) => ErrorSeverity::Recoverable,
            InsufficientQuantity { .. } => ErrorSeverity::Recoverable,
            Corrupted(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        use BagError::*;
        match self {
            OutOfBounds(_) => "BAG_OUT_OF_BOUNDS",
            InvalidFootprint => "BAG_INVALID_FOOTPRINT",
            ZeroQuantity => "BAG_ZERO_QUANTITY",
            NoItemAt(_) => "BAG_NO_ITEM",
            AnchorOccupied(_) => "BAG_ANCHOR_OCCUPIED",
            RegionUnavailable(_) => "BAG_REGION_UNAVAILABLE",
            InsufficientQuantity { .. } => "BAG_INSUFFICIENT_QUANTITY",
            ExceedsStackLimit { .. } => "BAG_EXCEEDS_STACK_LIMIT",
            Corrupted(_) => "BAG_CORRUPTED",
        }
    }
}
