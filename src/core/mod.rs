//! Core engine types: participants, dice, RNG, configuration, errors, state.
//!
//! Everything else in the crate builds on these. Rule constants are read
//! from `RulesConfig` rather than hardcoded.

pub mod config;
pub mod dice;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use config::{GameConfig, ParticipantSpec, RulesConfig, MAX_PLAYERS, MIN_PLAYERS};
pub use dice::{Dice, DiceRoll, RollSource, ScriptedDice};
pub use error::{Building, GameError, InvalidOperation};
pub use player::{Participant, ParticipantKind, PlayerId, PlayerMap, TOKENS};
pub use rng::GameRng;
pub use state::{GameState, Movement};
