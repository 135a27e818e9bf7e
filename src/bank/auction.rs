//! Auction bids and results.

use serde::{Deserialize, Serialize};

use crate::board::{Property, PropertyId};
use crate::core::{Participant, PlayerId};

/// Supplies bids during an auction.
///
/// Called once per participant with positive cash, in seat order. Returning
/// zero, or anything not above `high_bid`, passes.
pub trait Bidder {
    fn bid(&mut self, bidder: &Participant, property: &Property, high_bid: i64) -> i64;
}

impl<F> Bidder for F
where
    F: FnMut(&Participant, &Property, i64) -> i64,
{
    fn bid(&mut self, bidder: &Participant, property: &Property, high_bid: i64) -> i64 {
        self(bidder, property, high_bid)
    }
}

/// Bids a fixed amount per seat; seats without an entry pass.
#[derive(Clone, Debug, Default)]
pub struct SealedBids {
    bids: Vec<(PlayerId, i64)>,
}

impl SealedBids {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a seat's sealed bid.
    #[must_use]
    pub fn with_bid(mut self, player: PlayerId, amount: i64) -> Self {
        self.bids.push((player, amount));
        self
    }
}

impl Bidder for SealedBids {
    fn bid(&mut self, bidder: &Participant, _property: &Property, _high_bid: i64) -> i64 {
        self.bids
            .iter()
            .find(|(player, _)| *player == bidder.id)
            .map_or(0, |&(_, amount)| amount)
    }
}

/// Result of an auction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuctionOutcome {
    pub property: PropertyId,
    /// Winning seat; `None` when the deed went back to the bank.
    pub winner: Option<PlayerId>,
    /// Price paid by the winner, 0 when unsold.
    pub price: i64,
}

impl AuctionOutcome {
    pub(crate) fn sold(property: PropertyId, winner: PlayerId, price: i64) -> Self {
        Self {
            property,
            winner: Some(winner),
            price,
        }
    }

    pub(crate) fn unsold(property: PropertyId) -> Self {
        Self {
            property,
            winner: None,
            price: 0,
        }
    }

    #[must_use]
    pub fn is_sold(&self) -> bool {
        self.winner.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank::Bank;
    use crate::board::Board;
    use crate::core::error::{GameError, InvalidOperation};
    use crate::core::{ParticipantKind, PlayerMap, RulesConfig};

    fn table(cash: &[i64]) -> (Bank, Board, PlayerMap<Participant>) {
        let board = Board::standard();
        let bank = Bank::new(&board, &RulesConfig::default());
        let players = PlayerMap::new(cash.len(), |id| {
            Participant::new(id, format!("P{}", id.0), "Cat", ParticipantKind::Human, cash[id.index()])
        });
        (bank, board, players)
    }

    #[test]
    fn test_highest_bid_wins_and_only_winner_pays() {
        let (mut bank, mut board, mut players) = table(&[500, 500, 500]);
        let id = board.space(1).kind.property().unwrap();
        let mut bids = SealedBids::new()
            .with_bid(PlayerId::new(0), 40)
            .with_bid(PlayerId::new(1), 90)
            .with_bid(PlayerId::new(2), 70);

        let outcome = bank.auction(&mut board, &mut players, id, &mut bids).unwrap();

        assert_eq!(outcome, AuctionOutcome::sold(id, PlayerId::new(1), 90));
        assert_eq!(players[PlayerId::new(0)].cash, 500);
        assert_eq!(players[PlayerId::new(1)].cash, 410);
        assert_eq!(players[PlayerId::new(2)].cash, 500);
        assert!(players[PlayerId::new(1)].owns(id));
        assert!(!bank.is_unowned(id));
    }

    #[test]
    fn test_tie_goes_to_earlier_bidder() {
        let (mut bank, mut board, mut players) = table(&[500, 500]);
        let id = board.space(3).kind.property().unwrap();
        let mut bids = SealedBids::new()
            .with_bid(PlayerId::new(0), 80)
            .with_bid(PlayerId::new(1), 80);

        let outcome = bank.auction(&mut board, &mut players, id, &mut bids).unwrap();
        assert_eq!(outcome.winner, Some(PlayerId::new(0)));
    }

    #[test]
    fn test_bid_above_cash_does_not_count() {
        let (mut bank, mut board, mut players) = table(&[50, 500]);
        let id = board.space(1).kind.property().unwrap();
        let mut bids = SealedBids::new()
            .with_bid(PlayerId::new(0), 100)
            .with_bid(PlayerId::new(1), 20);

        let outcome = bank.auction(&mut board, &mut players, id, &mut bids).unwrap();
        assert_eq!(outcome, AuctionOutcome::sold(id, PlayerId::new(1), 20));
        assert_eq!(players[PlayerId::new(0)].cash, 50);
    }

    #[test]
    fn test_no_bids_returns_deed_to_pool() {
        let (mut bank, mut board, mut players) = table(&[500, 500]);
        let id = board.space(39).kind.property().unwrap();
        let mut nobody = |_: &Participant, _: &Property, _: i64| -> i64 { 0 };

        let outcome = bank.auction(&mut board, &mut players, id, &mut nobody).unwrap();
        assert!(!outcome.is_sold());
        assert!(bank.is_unowned(id));
        assert!(!board.property(id).is_owned());
    }

    #[test]
    fn test_broke_participants_are_not_asked() {
        let (mut bank, mut board, mut players) = table(&[0, 300]);
        let id = board.space(1).kind.property().unwrap();
        let mut asked = Vec::new();
        let mut bidder = |p: &Participant, _: &Property, high: i64| {
            asked.push(p.id);
            high + 10
        };

        bank.auction(&mut board, &mut players, id, &mut bidder).unwrap();
        assert_eq!(asked, vec![PlayerId::new(1)]);
    }

    #[test]
    fn test_auction_of_owned_deed_rejected() {
        let (mut bank, mut board, mut players) = table(&[500, 500]);
        let id = board.space(1).kind.property().unwrap();
        bank.sell(&mut board, &mut players[PlayerId::new(0)], id).unwrap();

        let err = bank
            .auction(&mut board, &mut players, id, &mut SealedBids::new())
            .unwrap_err();
        assert_eq!(err, GameError::from(InvalidOperation::AlreadyOwned));
    }
}
