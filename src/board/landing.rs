//! Landing resolution: what a space does to the participant standing on it.
//!
//! `on_land` is the single dispatch over [`SpaceKind`]. Card effects that
//! move the token come back as a [`Relocation`]; `resolve_landing` applies
//! those and resolves the destination in turn, up to a fixed chain length.

use smallvec::SmallVec;
use tracing::{debug, warn};

use super::{PropertyId, SpaceKind};
use crate::cards::{CardEffect, CardSource, DeckKind};
use crate::core::{DiceRoll, GameState, PlayerId};
use crate::turn::{JailReason, Settlement};

/// Longest chain of card-driven moves resolved from one roll.
const MAX_RELOCATIONS: usize = 4;

/// Token move requested by a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Relocation {
    /// Advance to a board index.
    To(u8),
    Forward(u8),
    /// Never pays the pass-start bonus.
    Back(u8),
}

/// Outcome of resolving one or more spaces.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Landing {
    pub settlements: SmallVec<[Settlement; 4]>,
    /// Unowned deed the participant may buy.
    pub offer: Option<PropertyId>,
    /// Pending card move, consumed by `resolve_landing`.
    pub relocation: Option<Relocation>,
    pub jailed: Option<JailReason>,
}

impl Landing {
    fn absorb(&mut self, next: Landing) {
        self.settlements.extend(next.settlements);
        self.offer = next.offer;
        self.relocation = next.relocation;
        self.jailed = self.jailed.or(next.jailed);
    }
}

/// Resolve the space under `player`'s token once.
pub fn on_land(state: &mut GameState, player: PlayerId, roll: DiceRoll, cards: &mut dyn CardSource) -> Landing {
    let mut landing = Landing::default();
    let position = state.participant(player).position;
    let kind = state.board().space(position).kind;
    debug!(%player, position, ?kind, "landed");

    match kind {
        SpaceKind::Start | SpaceKind::Jail | SpaceKind::FreeParking => {}
        SpaceKind::Property(id) | SpaceKind::Railroad(id) | SpaceKind::Utility(id) => {
            land_on_deed(state, player, id, roll, &mut landing);
        }
        SpaceKind::Tax { amount } => {
            state.collect(player, amount);
            landing.settlements.push(Settlement::Tax { player, amount });
        }
        SpaceKind::Chance => draw(state, player, DeckKind::Chance, cards, &mut landing),
        SpaceKind::CommunityChest => draw(state, player, DeckKind::CommunityChest, cards, &mut landing),
        SpaceKind::GoToJail => {
            state.send_to_jail(player);
            landing.jailed = Some(JailReason::GoToJailSpace);
        }
    }
    landing
}

/// Resolve the landing and follow any card moves it triggers.
pub fn resolve_landing(
    state: &mut GameState,
    player: PlayerId,
    roll: DiceRoll,
    cards: &mut dyn CardSource,
) -> Landing {
    let mut landing = on_land(state, player, roll, cards);

    for _ in 0..MAX_RELOCATIONS {
        let Some(relocation) = landing.relocation.take() else {
            break;
        };
        let movement = match relocation {
            Relocation::To(target) => state.move_to(player, target),
            Relocation::Forward(steps) => state.advance(player, steps),
            Relocation::Back(steps) => state.move_back(player, steps),
        };
        if movement.passed_start {
            landing.settlements.push(Settlement::StartBonus {
                player,
                amount: movement.bonus,
            });
        }
        let next = on_land(state, player, roll, cards);
        landing.absorb(next);
    }

    if let Some(relocation) = landing.relocation.take() {
        warn!(%player, ?relocation, "relocation chain cut short");
    }
    landing
}

fn land_on_deed(state: &mut GameState, player: PlayerId, id: PropertyId, roll: DiceRoll, landing: &mut Landing) {
    let owner = match state.board().property(id).owner {
        None => {
            landing.offer = Some(id);
            return;
        }
        Some(owner) if owner == player => return,
        Some(owner) => owner,
    };

    let rent = state.board().rent_due(id, roll.total(), state.rules().group_rules);
    if rent > 0 {
        state.transfer(player, owner, rent);
        landing.settlements.push(Settlement::Rent {
            payer: player,
            owner,
            property: id,
            amount: rent,
        });
    }
}

fn draw(state: &mut GameState, player: PlayerId, deck: DeckKind, cards: &mut dyn CardSource, landing: &mut Landing) {
    let effect = cards.draw_next(deck);
    debug!(%player, %deck, %effect, "card drawn");
    landing.settlements.push(Settlement::CardDrawn { player, deck, effect });

    match effect {
        CardEffect::Collect(amount) => {
            state.pay(player, amount);
            landing.settlements.push(Settlement::BankPaid { player, amount });
        }
        CardEffect::Pay(amount) => {
            state.collect(player, amount);
            landing.settlements.push(Settlement::BankCollected { player, amount });
        }
        CardEffect::MoveTo(target) => landing.relocation = Some(Relocation::To(target)),
        CardEffect::MoveBy(steps) if steps < 0 => {
            landing.relocation = Some(Relocation::Back(steps.unsigned_abs()));
        }
        CardEffect::MoveBy(steps) => landing.relocation = Some(Relocation::Forward(steps as u8)),
        CardEffect::NearestRailroad => {
            let position = state.participant(player).position;
            landing.relocation = Some(Relocation::To(state.board().nearest_railroad(position)));
        }
        CardEffect::GoToJail => {
            state.send_to_jail(player);
            landing.jailed = Some(JailReason::Card);
        }
        CardEffect::ReleaseCard => {
            state.grant_release_card(player);
            landing.settlements.push(Settlement::ReleaseCardKept { player });
        }
        CardEffect::CollectFromEach(amount) => {
            for other in others(state, player) {
                state.transfer(other, player, amount);
                landing.settlements.push(Settlement::Transfer { from: other, to: player, amount });
            }
        }
        CardEffect::PayEach(amount) => {
            for other in others(state, player) {
                state.transfer(player, other, amount);
                landing.settlements.push(Settlement::Transfer { from: player, to: other, amount });
            }
        }
        CardEffect::Repairs { per_house, per_hotel } => {
            let (houses, hotels) = state.building_counts(player);
            let amount = houses * per_house + hotels * per_hotel;
            if amount > 0 {
                state.collect(player, amount);
                landing.settlements.push(Settlement::BankCollected { player, amount });
            }
        }
    }
}

fn others(state: &GameState, player: PlayerId) -> Vec<PlayerId> {
    state.participants().player_ids().filter(|&p| p != player).collect()
}
