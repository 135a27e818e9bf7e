//! Turn sequencing.
//!
//! - `cursor`: whose turn, doubles streak, game-over flag
//! - `event`: per-roll report for presentation
//! - `engine`: the roll/resolve cycle and presentation operations
//! - `builder`: game setup

pub mod builder;
pub mod cursor;
pub mod engine;
pub mod event;

pub use builder::GameBuilder;
pub use cursor::{Phase, TurnCursor};
pub use engine::TurnEngine;
pub use event::{JailOutcome, JailReason, PurchaseOffer, Settlement, TurnEvent};
