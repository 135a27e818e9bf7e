//! Errors reported by rule operations.
//!
//! Every reported error leaves game state exactly as it was before the call.
//! Out-of-range seats or board indices are programmer errors and panic instead.

use serde::{Deserialize, Serialize};

/// Kind of building held in the bank's supply.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Building {
    House,
    Hotel,
}

impl std::fmt::Display for Building {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Building::House => f.write_str("houses"),
            Building::Hotel => f.write_str("hotels"),
        }
    }
}

/// Operations refused because the game is not in a state that allows them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, thiserror::Error)]
pub enum InvalidOperation {
    #[error("property is already owned")]
    AlreadyOwned,

    #[error("property is not owned by this participant")]
    NotOwner,

    #[error("property is already mortgaged")]
    AlreadyMortgaged,

    #[error("property is not mortgaged")]
    NotMortgaged,

    #[error("property is mortgaged")]
    Mortgaged,

    #[error("property has buildings")]
    HasBuildings,

    #[error("only streets can be improved")]
    NotBuildable,

    #[error("property already has four houses")]
    MaxHouses,

    #[error("property already has a hotel")]
    HotelPresent,

    #[error("a hotel needs four houses first")]
    NeedsFourHouses,

    #[error("participant does not hold the whole color group")]
    IncompleteGroup,

    #[error("participant is not in jail")]
    NotConfined,

    #[error("participant holds no release card")]
    NoReleaseCard,

    #[error("no purchase offer is pending")]
    NoPendingOffer,

    #[error("game is over")]
    GameOver,
}

/// Error returned by rule operations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum GameError {
    /// The operation is not allowed right now.
    #[error("invalid operation: {0}")]
    InvalidOperation(#[from] InvalidOperation),

    /// The participant cannot cover the cost. Kept apart from
    /// `InvalidOperation` because a fuller game escalates it to liquidation.
    #[error("insufficient funds: needed ${needed}, available ${available}")]
    InsufficientFunds { needed: i64, available: i64 },

    /// The bank has no buildings of this kind left.
    #[error("no {0} available")]
    SupplyExhausted(Building),
}

impl GameError {
    #[must_use]
    pub fn is_insufficient_funds(&self) -> bool {
        matches!(self, GameError::InsufficientFunds { .. })
    }

    /// Amount missing for an `InsufficientFunds` error.
    #[must_use]
    pub fn shortfall(&self) -> Option<i64> {
        match self {
            GameError::InsufficientFunds { needed, available } => Some(needed - available),
            _ => None,
        }
    }
}

/// Fail with `InsufficientFunds` unless `available` covers `needed`.
pub(crate) fn ensure_funds(needed: i64, available: i64) -> Result<(), GameError> {
    if available < needed {
        Err(GameError::InsufficientFunds { needed, available })
    } else {
        Ok(())
    }
}
