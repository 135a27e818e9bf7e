//! Card piles that never run out.
//!
//! ## CardSource
//!
//! The collaborator the landing code draws from. [`StandardDecks`] is the
//! seeded classic pair; [`ScriptedCards`] replays a fixed list for tests.
//!
//! ## Cycling
//!
//! A `Deck` deals its cards in shuffled order. Once every card has been
//! dealt, the pile is reshuffled from its own RNG stream and dealing starts
//! over. Release cards are not removed from the pile when kept.

use tracing::debug;

use super::effect::{CardEffect, DeckKind};
use crate::core::GameRng;

/// Source of drawn cards.
pub trait CardSource {
    /// Draw the next card of `deck`.
    fn draw_next(&mut self, deck: DeckKind) -> CardEffect;
}

/// One shuffled, cycling pile.
#[derive(Clone, Debug)]
pub struct Deck {
    kind: DeckKind,
    cards: Vec<CardEffect>,
    next: usize,
    rng: GameRng,
}

impl Deck {
    /// Shuffle `cards` into a pile. Panics on an empty pile.
    pub fn new(kind: DeckKind, cards: Vec<CardEffect>, mut rng: GameRng) -> Self {
        assert!(!cards.is_empty(), "{kind} deck needs at least one card");
        let mut cards = cards;
        rng.shuffle(&mut cards);
        Self {
            kind,
            cards,
            next: 0,
            rng,
        }
    }

    #[must_use]
    pub fn kind(&self) -> DeckKind {
        self.kind
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards left before the next reshuffle.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len() - self.next
    }

    /// Deal the next card, reshuffling first if the pile is spent.
    pub fn draw(&mut self) -> CardEffect {
        if self.next >= self.cards.len() {
            self.rng.shuffle(&mut self.cards);
            self.next = 0;
            debug!(deck = %self.kind, "reshuffled");
        }
        let card = self.cards[self.next];
        self.next += 1;
        card
    }
}

/// Classic 16-card Chance pile.
#[must_use]
pub fn chance_cards() -> Vec<CardEffect> {
    vec![
        CardEffect::MoveTo(39),
        CardEffect::MoveTo(0),
        CardEffect::MoveTo(24),
        CardEffect::MoveTo(11),
        CardEffect::NearestRailroad,
        CardEffect::NearestRailroad,
        CardEffect::MoveTo(12),
        CardEffect::Collect(50),
        CardEffect::ReleaseCard,
        CardEffect::MoveBy(-3),
        CardEffect::GoToJail,
        CardEffect::Repairs { per_house: 25, per_hotel: 100 },
        CardEffect::Pay(15),
        CardEffect::MoveTo(5),
        CardEffect::PayEach(50),
        CardEffect::Collect(150),
    ]
}

/// Classic 16-card Community Chest pile.
#[must_use]
pub fn community_chest_cards() -> Vec<CardEffect> {
    vec![
        CardEffect::MoveTo(0),
        CardEffect::Collect(200),
        CardEffect::Pay(50),
        CardEffect::Collect(50),
        CardEffect::ReleaseCard,
        CardEffect::GoToJail,
        CardEffect::Collect(100),
        CardEffect::Collect(20),
        CardEffect::CollectFromEach(10),
        CardEffect::Collect(100),
        CardEffect::Pay(100),
        CardEffect::Pay(50),
        CardEffect::Collect(25),
        CardEffect::Repairs { per_house: 40, per_hotel: 115 },
        CardEffect::Collect(10),
        CardEffect::Collect(100),
    ]
}

/// The two classic piles, each shuffled on its own stream of one seed.
#[derive(Clone, Debug)]
pub struct StandardDecks {
    pub chance: Deck,
    pub community_chest: Deck,
}

impl StandardDecks {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let rng = GameRng::new(seed);
        Self {
            chance: Deck::new(DeckKind::Chance, chance_cards(), rng.for_context("chance")),
            community_chest: Deck::new(
                DeckKind::CommunityChest,
                community_chest_cards(),
                rng.for_context("community_chest"),
            ),
        }
    }
}

impl CardSource for StandardDecks {
    fn draw_next(&mut self, deck: DeckKind) -> CardEffect {
        match deck {
            DeckKind::Chance => self.chance.draw(),
            DeckKind::CommunityChest => self.community_chest.draw(),
        }
    }
}

/// Deals a fixed cycle of cards regardless of the pile asked for.
#[derive(Clone, Debug)]
pub struct ScriptedCards {
    cards: Vec<CardEffect>,
    next: usize,
}

impl ScriptedCards {
    /// Panics on an empty script.
    pub fn new(cards: &[CardEffect]) -> Self {
        assert!(!cards.is_empty(), "scripted cards need at least one card");
        Self {
            cards: cards.to_vec(),
            next: 0,
        }
    }
}

impl CardSource for ScriptedCards {
    fn draw_next(&mut self, _deck: DeckKind) -> CardEffect {
        let card = self.cards[self.next % self.cards.len()];
        self.next += 1;
        card
    }
}
