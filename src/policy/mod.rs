//! Decisions for automated participants.
//!
//! The engine consults an [`AutomatedPolicy`] at two points of a computer
//! participant's turn: before rolling while confined (`jail_choice`) and
//! after landing on an unowned deed (`decide`). Calls are synchronous.

use serde::{Deserialize, Serialize};

use crate::board::Space;
use crate::core::{GameState, PlayerId};

/// Answer to a purchase offer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decision {
    Buy,
    Decline,
}

/// How a confined participant tries to get out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum JailChoice {
    /// Try for doubles.
    Roll,
    UseCard,
    PayFine,
}

/// Decision maker for computer seats.
pub trait AutomatedPolicy: Send + Sync {
    /// Buy or decline the deed on `space`, which is unowned.
    fn decide(&self, state: &GameState, player: PlayerId, space: &Space) -> Decision;

    /// Called before a confined participant rolls. Defaults to spending a
    /// release card when one is held, otherwise rolling.
    fn jail_choice(&self, state: &GameState, player: PlayerId) -> JailChoice {
        if state.participant(player).release_cards > 0 {
            JailChoice::UseCard
        } else {
            JailChoice::Roll
        }
    }
}

/// Buys whenever the price leaves at least `reserve` in hand.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BuyIfAffordable {
    pub reserve: i64,
}

impl BuyIfAffordable {
    #[must_use]
    pub fn with_reserve(reserve: i64) -> Self {
        Self { reserve }
    }
}

impl AutomatedPolicy for BuyIfAffordable {
    fn decide(&self, state: &GameState, player: PlayerId, space: &Space) -> Decision {
        let Some(id) = space.kind.property() else {
            return Decision::Decline;
        };
        let price = state.board().property(id).price;
        if state.participant(player).cash - price >= self.reserve {
            Decision::Buy
        } else {
            Decision::Decline
        }
    }
}

/// Never buys; useful for isolating rent and jail behavior.
#[derive(Clone, Copy, Debug, Default)]
pub struct NeverBuy;

impl AutomatedPolicy for NeverBuy {
    fn decide(&self, _state: &GameState, _player: PlayerId, _space: &Space) -> Decision {
        Decision::Decline
    }
}
