//! Chance and Community Chest.
//!
//! ## Key Types
//!
//! - `DeckKind`: which pile
//! - `CardEffect`: closed set of card effects
//! - `CardSource`: draw collaborator used by landing resolution
//! - `Deck` / `StandardDecks`: seeded cycling piles
//!
//! Card wording is left to presentation; the engine only sees effects.

pub mod deck;
pub mod effect;

pub use deck::{chance_cards, community_chest_cards, CardSource, Deck, ScriptedCards, StandardDecks};
pub use effect::{CardEffect, DeckKind};
