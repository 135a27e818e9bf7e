//! # rust-monopoly
//!
//! A deterministic rules engine for a turn-based property-trading board game
//! with 2-8 human or automated participants.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: Dice and card piles are seeded ChaCha8 streams, so
//!    the same seed and the same decisions replay the same game.
//!
//! 2. **Fixed resolution order**: Movement, payment, ownership transfer and
//!    jail state are resolved in one order per roll; see `turn::engine`.
//!
//! 3. **Errors leave no trace**: A refused operation reports a `GameError`
//!    and changes nothing. Bad seats or board indices are programmer errors
//!    and panic.
//!
//! ## Architecture
//!
//! - **Single owner**: `TurnEngine` owns the `GameState`; presentation reads
//!   `TurnEvent`s and mutates only through engine operations.
//!
//! - **Persistent Data Structures**: Owned-deed sets, the bank pool and the
//!   event history use `im-rs`, so state snapshots clone in O(1).
//!
//! ## Modules
//!
//! - `core`: Participants, dice, RNG, configuration, errors, game state
//! - `board`: Spaces, deeds, rent, the classic layout and landing resolution
//! - `bank`: Ledger, deed sales, mortgages, buildings, auctions
//! - `jail`: Imprisonment tracking
//! - `cards`: Chance and Community Chest piles
//! - `policy`: Decisions for automated participants
//! - `turn`: Turn cursor, events, the engine and the game builder

pub mod bank;
pub mod board;
pub mod cards;
pub mod core;
pub mod jail;
pub mod policy;
pub mod turn;

// Re-export commonly used types
pub use crate::core::{
    Building, Dice, DiceRoll, GameConfig, GameError, GameRng, GameState, InvalidOperation,
    Participant, ParticipantKind, ParticipantSpec, PlayerId, PlayerMap, RollSource, RulesConfig,
    ScriptedDice,
};

pub use crate::board::{Board, ColorGroup, Property, PropertyId, RentSchedule, Space, SpaceKind};

pub use crate::bank::{AuctionOutcome, Bank, Bidder, SealedBids};

pub use crate::jail::{JailTracker, ReleaseAttempt};

pub use crate::cards::{CardEffect, CardSource, DeckKind, ScriptedCards, StandardDecks};

pub use crate::policy::{AutomatedPolicy, BuyIfAffordable, Decision, JailChoice, NeverBuy};

pub use crate::turn::{
    GameBuilder, JailOutcome, JailReason, Phase, PurchaseOffer, Settlement, TurnEngine, TurnEvent,
};
