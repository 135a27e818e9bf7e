//! What a roll did, for presentation.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::bank::AuctionOutcome;
use crate::board::PropertyId;
use crate::cards::{CardEffect, DeckKind};
use crate::core::{Building, DiceRoll, GameError, PlayerId};

/// One cash or ownership change made while resolving a roll.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Settlement {
    /// Bank paid the pass-start bonus.
    StartBonus { player: PlayerId, amount: i64 },
    Rent {
        payer: PlayerId,
        owner: PlayerId,
        property: PropertyId,
        amount: i64,
    },
    Tax { player: PlayerId, amount: i64 },
    CardDrawn { player: PlayerId, deck: DeckKind, effect: CardEffect },
    /// Bank paid a card amount.
    BankPaid { player: PlayerId, amount: i64 },
    /// Bank collected a card amount.
    BankCollected { player: PlayerId, amount: i64 },
    /// Participant-to-participant card payment.
    Transfer { from: PlayerId, to: PlayerId, amount: i64 },
    ReleaseCardKept { player: PlayerId },
    JailFine { player: PlayerId, amount: i64 },
    /// Deed bought at list price, by policy or through an accepted offer.
    Purchase {
        player: PlayerId,
        property: PropertyId,
        price: i64,
    },
    Auction(AuctionOutcome),
    Mortgage {
        player: PlayerId,
        property: PropertyId,
        amount: i64,
    },
    Unmortgage {
        player: PlayerId,
        property: PropertyId,
        cost: i64,
    },
    Build {
        player: PlayerId,
        property: PropertyId,
        building: Building,
        cost: i64,
    },
}

/// Why a participant was confined.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum JailReason {
    TripleDoubles,
    GoToJailSpace,
    Card,
}

/// Release attempt made by a confined participant during a roll.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum JailOutcome {
    /// Released before rolling by spending a card.
    ReleasedByCard,
    /// Released before rolling by paying the fine voluntarily.
    PaidFine { amount: i64 },
    ReleasedByDoubles,
    StillConfined { attempts: u8 },
    /// Attempts ran out and the fine was taken.
    ForcedFine { amount: i64 },
    /// Attempts ran out but the fine could not be covered; nothing changed.
    FineUnpaid(GameError),
}

/// Unowned deed a human participant may buy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseOffer {
    pub player: PlayerId,
    pub property: PropertyId,
    pub price: i64,
}

/// Result of one `roll`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnEvent {
    pub turn_number: u32,
    pub player: PlayerId,
    pub roll: DiceRoll,
    pub old_position: u8,
    pub new_position: u8,
    pub settlements: SmallVec<[Settlement; 4]>,
    pub doubles: bool,
    /// Participant is confined once the roll is resolved.
    pub confined: bool,
    /// Same participant rolls again.
    pub extra_roll: bool,
    /// Who rolls next.
    pub next_player: PlayerId,
    pub offer: Option<PurchaseOffer>,
    /// How a participant who started the roll confined fared.
    pub jail: Option<JailOutcome>,
    /// The roll ended with the participant sent to jail.
    pub sent_to_jail: Option<JailReason>,
    /// Participants with negative cash after the roll.
    pub insolvent: SmallVec<[PlayerId; 2]>,
}

impl TurnEvent {
    pub(crate) fn new(turn_number: u32, player: PlayerId, roll: DiceRoll, position: u8) -> Self {
        Self {
            turn_number,
            player,
            roll,
            old_position: position,
            new_position: position,
            settlements: SmallVec::new(),
            doubles: roll.is_doubles(),
            confined: false,
            extra_roll: false,
            next_player: player,
            offer: None,
            jail: None,
            sent_to_jail: None,
            insolvent: SmallVec::new(),
        }
    }

    /// Someone ended the roll below zero.
    #[must_use]
    pub fn has_insolvency(&self) -> bool {
        !self.insolvent.is_empty()
    }

    /// Net cash change for `player` across the settlements.
    ///
    /// Summed over the whole history this matches each participant's cash
    /// minus the starting cash, as long as every change went through the
    /// engine.
    #[must_use]
    pub fn net_cash(&self, player: PlayerId) -> i64 {
        self.settlements
            .iter()
            .map(|s| match *s {
                Settlement::StartBonus { player: p, amount }
                | Settlement::BankPaid { player: p, amount }
                | Settlement::Mortgage { player: p, amount, .. }
                    if p == player =>
                {
                    amount
                }
                Settlement::Tax { player: p, amount }
                | Settlement::BankCollected { player: p, amount }
                | Settlement::JailFine { player: p, amount }
                    if p == player =>
                {
                    -amount
                }
                Settlement::Purchase { player: p, price: cost, .. }
                | Settlement::Unmortgage { player: p, cost, .. }
                | Settlement::Build { player: p, cost, .. }
                    if p == player =>
                {
                    -cost
                }
                Settlement::Rent { payer, owner, amount, .. } => {
                    if payer == player {
                        -amount
                    } else if owner == player {
                        amount
                    } else {
                        0
                    }
                }
                Settlement::Transfer { from, to, amount } => {
                    if from == player {
                        -amount
                    } else if to == player {
                        amount
                    } else {
                        0
                    }
                }
                Settlement::Auction(outcome) if outcome.winner == Some(player) => -outcome.price,
                _ => 0,
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_net_cash() {
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);
        let mut event = TurnEvent::new(1, p0, DiceRoll::new(4, 2), 35);
        event.settlements.push(Settlement::StartBonus { player: p0, amount: 200 });
        event.settlements.push(Settlement::Rent {
            payer: p0,
            owner: p1,
            property: PropertyId::new(0),
            amount: 2,
        });
        event.settlements.push(Settlement::Tax { player: p0, amount: 100 });

        assert_eq!(event.net_cash(p0), 98);
        assert_eq!(event.net_cash(p1), 2);
    }

    #[test]
    fn test_net_cash_between_roll_settlements() {
        let p0 = PlayerId::new(0);
        let deed = PropertyId::new(3);
        let mut event = TurnEvent::new(1, p0, DiceRoll::new(1, 2), 0);
        event.settlements.push(Settlement::Mortgage { player: p0, property: deed, amount: 100 });
        event.settlements.push(Settlement::Unmortgage { player: p0, property: deed, cost: 110 });
        event.settlements.push(Settlement::Build {
            player: p0,
            property: deed,
            building: Building::House,
            cost: 50,
        });

        assert_eq!(event.net_cash(p0), -60);
    }

    #[test]
    fn test_new_event_defaults() {
        let event = TurnEvent::new(3, PlayerId::new(1), DiceRoll::new(5, 5), 12);
        assert!(event.doubles);
        assert_eq!(event.old_position, 12);
        assert_eq!(event.new_position, 12);
        assert!(!event.has_insolvency());
        assert_eq!(event.next_player, PlayerId::new(1));
    }
}
