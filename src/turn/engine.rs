//! The turn engine: one `roll` call resolves one roll completely.
//!
//! ## Free participant
//!
//! 1. Roll.
//! 2. A doubles streak reaching `max_consecutive_doubles` sends the
//!    participant to jail and passes the turn without moving.
//! 3. Advance by the total, paying the pass-start bonus on wrap.
//! 4. Resolve the landing, following card moves.
//! 5. Computer seats answer any purchase offer through the policy; human
//!    seats get a [`PurchaseOffer`] that stays open until the next roll.
//! 6. Doubles roll again unless the landing sent the participant to jail;
//!    otherwise the turn passes.
//!
//! ## Confined participant
//!
//! Computer seats first ask the policy whether to spend a card or pay the
//! fine; a release before rolling is followed by a normal roll. Otherwise
//! the roll is a release attempt. Every release-attempt outcome passes the
//! turn, including release by doubles.
//!
//! Each roll produces a [`TurnEvent`], which is also appended to the state
//! history. Cash and deed changes made between rolls (accepted offers,
//! auctions, fines, mortgages, buildings) are added to the latest recorded
//! event, or to the first event if nothing has been rolled yet.

use smallvec::SmallVec;
use tracing::{debug, info, warn};

use super::cursor::Phase;
use super::event::{JailOutcome, JailReason, PurchaseOffer, Settlement, TurnEvent};
use crate::bank::{AuctionOutcome, Bidder};
use crate::board::{resolve_landing, Landing, PropertyId};
use crate::cards::{CardSource, StandardDecks};
use crate::core::{Building, DiceRoll, Dice, GameError, GameState, InvalidOperation, PlayerId, RollSource};
use crate::jail::ReleaseAttempt;
use crate::policy::{AutomatedPolicy, BuyIfAffordable, Decision, JailChoice};

/// Drives a game: owns the state, the dice, the card piles and the policy
/// for computer seats.
pub struct TurnEngine<R: RollSource = Dice, C: CardSource = StandardDecks> {
    state: GameState,
    dice: R,
    cards: C,
    policy: Box<dyn AutomatedPolicy>,
    offer: Option<PurchaseOffer>,
    /// Settlements made before the first roll.
    carried: SmallVec<[Settlement; 4]>,
}

impl<R: RollSource, C: CardSource> TurnEngine<R, C> {
    /// Engine over an existing state. Computer seats buy whatever they can
    /// afford unless another policy is set.
    pub fn new(state: GameState, dice: R, cards: C) -> Self {
        Self {
            state,
            dice,
            cards,
            policy: Box::new(BuyIfAffordable::default()),
            offer: None,
            carried: SmallVec::new(),
        }
    }

    /// Replace the policy used for computer seats.
    #[must_use]
    pub fn with_policy(mut self, policy: impl AutomatedPolicy + 'static) -> Self {
        self.policy = Box::new(policy);
        self
    }

    pub(crate) fn set_policy(&mut self, policy: Box<dyn AutomatedPolicy>) {
        self.policy = policy;
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn into_state(self) -> GameState {
        self.state
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.cursor().phase()
    }

    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.state.current_player()
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.state.cursor().game_over
    }

    /// Open purchase offer for a human seat, if any.
    #[must_use]
    pub fn pending_offer(&self) -> Option<PurchaseOffer> {
        self.offer
    }

    #[must_use]
    pub fn dice(&self) -> &R {
        &self.dice
    }

    /// Stop the game. Every later operation reports `GameOver`.
    pub fn end_game(&mut self) {
        if !self.state.cursor.game_over {
            self.state.cursor.game_over = true;
            self.offer = None;
            info!(turn = self.state.cursor().turn_number, "game over");
        }
    }

    // === Rolling ===

    /// Roll for the current participant and resolve everything that follows.
    pub fn roll(&mut self) -> Result<TurnEvent, GameError> {
        self.ensure_running()?;
        if let Some(offer) = self.offer.take() {
            debug!(player = %offer.player, property = %offer.property, "purchase offer lapsed");
        }

        let player = self.state.current_player();
        let mut released = None;
        if self.state.is_confined(player) && self.state.participant(player).is_computer() {
            released = self.computer_jail_release(player);
        }

        let event = if self.state.is_confined(player) {
            self.confined_roll(player)
        } else {
            self.free_roll(player, released)
        };
        Ok(event)
    }

    fn free_roll(&mut self, player: PlayerId, released: Option<JailOutcome>) -> TurnEvent {
        let roll = self.dice.roll();
        let mut event = self.open_event(player, roll);
        if let Some(JailOutcome::PaidFine { amount }) = released {
            event.settlements.push(Settlement::JailFine { player, amount });
        }
        event.jail = released;

        if roll.is_doubles() {
            let streak = self.state.cursor.record_doubles();
            if streak >= self.state.rules().max_consecutive_doubles {
                self.state.send_to_jail(player);
                event.sent_to_jail = Some(JailReason::TripleDoubles);
                info!(player = %self.state.participant(player).name, streak, "too many doubles");
                return self.finish(event, false);
            }
        }

        let landing = self.move_and_land(player, roll, &mut event);
        let again = roll.is_doubles() && landing.jailed.is_none();
        self.finish(event, again)
    }

    fn confined_roll(&mut self, player: PlayerId) -> TurnEvent {
        let roll = self.dice.roll();
        let mut event = self.open_event(player, roll);

        match self.state.jail_mut().attempt_release(player, roll) {
            Some(ReleaseAttempt::Doubles) => {
                event.jail = Some(JailOutcome::ReleasedByDoubles);
                self.move_and_land(player, roll, &mut event);
            }
            Some(ReleaseAttempt::StillConfined { attempts }) => {
                event.jail = Some(JailOutcome::StillConfined { attempts });
            }
            Some(ReleaseAttempt::FineDue { .. }) => match self.state.pay_jail_fine(player) {
                Ok(amount) => {
                    event.settlements.push(Settlement::JailFine { player, amount });
                    event.jail = Some(JailOutcome::ForcedFine { amount });
                    self.move_and_land(player, roll, &mut event);
                }
                Err(err) => {
                    warn!(player = %self.state.participant(player).name, %err, "cannot pay jail fine");
                    event.jail = Some(JailOutcome::FineUnpaid(err));
                }
            },
            None => {}
        }

        self.finish(event, false)
    }

    /// Policy-driven release before a computer seat rolls.
    fn computer_jail_release(&mut self, player: PlayerId) -> Option<JailOutcome> {
        match self.policy.jail_choice(&self.state, player) {
            JailChoice::Roll => None,
            JailChoice::UseCard => match self.state.use_release_card(player) {
                Ok(()) => Some(JailOutcome::ReleasedByCard),
                Err(err) => {
                    debug!(%player, %err, "release card refused");
                    None
                }
            },
            JailChoice::PayFine => match self.state.pay_jail_fine(player) {
                Ok(amount) => Some(JailOutcome::PaidFine { amount }),
                Err(err) => {
                    debug!(%player, %err, "fine refused");
                    None
                }
            },
        }
    }

    fn open_event(&mut self, player: PlayerId, roll: DiceRoll) -> TurnEvent {
        let position = self.state.participant(player).position;
        debug!(%player, %roll, position, "roll");
        let mut event = TurnEvent::new(self.state.cursor().turn_number, player, roll, position);
        event.settlements.extend(self.carried.drain(..));
        event
    }

    /// Advance by the roll, resolve the landing and fold it into `event`.
    fn move_and_land(&mut self, player: PlayerId, roll: DiceRoll, event: &mut TurnEvent) -> Landing {
        let movement = self.state.advance(player, roll.total());
        if movement.passed_start {
            event.settlements.push(Settlement::StartBonus {
                player,
                amount: movement.bonus,
            });
        }

        let mut landing = resolve_landing(&mut self.state, player, roll, &mut self.cards);
        event.settlements.extend(landing.settlements.drain(..));
        event.sent_to_jail = landing.jailed;
        if let Some(id) = landing.offer {
            self.handle_offer(player, id, event);
        }
        landing
    }

    fn handle_offer(&mut self, player: PlayerId, id: PropertyId, event: &mut TurnEvent) {
        if !self.state.participant(player).is_computer() {
            let offer = PurchaseOffer {
                player,
                property: id,
                price: self.state.board().property(id).price,
            };
            event.offer = Some(offer);
            self.offer = Some(offer);
            return;
        }

        let position = self.state.participant(player).position;
        let decision = self.policy.decide(&self.state, player, self.state.board().space(position));
        if decision == Decision::Buy {
            match self.state.sell(player, id) {
                Ok(price) => event.settlements.push(Settlement::Purchase {
                    player,
                    property: id,
                    price,
                }),
                Err(err) => debug!(%player, %err, "purchase refused"),
            }
        }
    }

    /// Settle who rolls next, stamp the final state onto the event and
    /// record it.
    fn finish(&mut self, mut event: TurnEvent, again: bool) -> TurnEvent {
        let player = event.player;
        event.new_position = self.state.participant(player).position;
        event.confined = self.state.is_confined(player);
        event.extra_roll = again;
        event.next_player = if again {
            player
        } else {
            let count = self.state.player_count();
            self.state.cursor.pass(count)
        };

        event.insolvent = self.state.insolvent().collect();
        for debtor in &event.insolvent {
            let participant = self.state.participant(*debtor);
            warn!(player = %participant.name, cash = participant.cash, "insolvent");
        }

        self.state.record(event.clone());
        event
    }

    // === Presentation operations ===

    /// Record a settlement made between rolls.
    fn note(&mut self, settlement: Settlement) {
        if !self.state.amend_last(settlement) {
            self.carried.push(settlement);
        }
    }

    /// Buy the deed on offer at list price. The offer stays open if the
    /// purchase is refused.
    pub fn accept_offer(&mut self) -> Result<i64, GameError> {
        self.ensure_running()?;
        let offer = self.offer.ok_or(GameError::from(InvalidOperation::NoPendingOffer))?;
        let price = self.state.sell(offer.player, offer.property)?;
        self.offer = None;
        self.note(Settlement::Purchase {
            player: offer.player,
            property: offer.property,
            price,
        });
        Ok(price)
    }

    /// Drop the open offer; the deed stays with the bank.
    pub fn decline_offer(&mut self) -> Result<PurchaseOffer, GameError> {
        self.ensure_running()?;
        self.offer
            .take()
            .ok_or(GameError::from(InvalidOperation::NoPendingOffer))
    }

    /// Auction the deed on offer instead of buying it.
    pub fn auction_offer(&mut self, bidder: &mut dyn Bidder) -> Result<AuctionOutcome, GameError> {
        self.ensure_running()?;
        let offer = self
            .offer
            .take()
            .ok_or(GameError::from(InvalidOperation::NoPendingOffer))?;
        let outcome = self.state.auction(offer.property, bidder)?;
        self.note(Settlement::Auction(outcome));
        Ok(outcome)
    }

    pub fn pay_jail_fine(&mut self, player: PlayerId) -> Result<i64, GameError> {
        self.ensure_running()?;
        let amount = self.state.pay_jail_fine(player)?;
        self.note(Settlement::JailFine { player, amount });
        Ok(amount)
    }

    pub fn use_release_card(&mut self, player: PlayerId) -> Result<(), GameError> {
        self.ensure_running()?;
        self.state.use_release_card(player)
    }

    pub fn mortgage(&mut self, player: PlayerId, id: PropertyId) -> Result<i64, GameError> {
        self.ensure_running()?;
        let amount = self.state.mortgage(player, id)?;
        self.note(Settlement::Mortgage {
            player,
            property: id,
            amount,
        });
        Ok(amount)
    }

    pub fn unmortgage(&mut self, player: PlayerId, id: PropertyId) -> Result<i64, GameError> {
        self.ensure_running()?;
        let cost = self.state.unmortgage(player, id)?;
        self.note(Settlement::Unmortgage {
            player,
            property: id,
            cost,
        });
        Ok(cost)
    }

    pub fn build_house(&mut self, player: PlayerId, id: PropertyId) -> Result<i64, GameError> {
        self.ensure_running()?;
        let cost = self.state.build_house(player, id)?;
        self.note(Settlement::Build {
            player,
            property: id,
            building: Building::House,
            cost,
        });
        Ok(cost)
    }

    pub fn build_hotel(&mut self, player: PlayerId, id: PropertyId) -> Result<i64, GameError> {
        self.ensure_running()?;
        let cost = self.state.build_hotel(player, id)?;
        self.note(Settlement::Build {
            player,
            property: id,
            building: Building::Hotel,
            cost,
        });
        Ok(cost)
    }

    fn ensure_running(&self) -> Result<(), GameError> {
        if self.state.cursor().game_over {
            Err(GameError::from(InvalidOperation::GameOver))
        } else {
            Ok(())
        }
    }
}
