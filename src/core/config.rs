//! Rule constants and game setup.
//!
//! - `RulesConfig`: the numeric rules (bonus, fine, supply, limits)
//! - `ParticipantSpec`: who sits at each seat
//! - `GameConfig`: combines both
//!
//! `RulesConfig::default()` carries the classic values; the engine reads every
//! constant from here rather than hardcoding it.

use serde::{Deserialize, Serialize};

use super::player::{ParticipantKind, TOKENS};

/// Fewest participants a game accepts.
pub const MIN_PLAYERS: usize = 2;
/// Most participants a game accepts.
pub const MAX_PLAYERS: usize = 8;

/// Numeric rules of the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Number of spaces around the board.
    pub board_size: u8,

    /// Board index of the jail.
    pub jail_position: u8,

    /// Paid by the bank whenever a move wraps past the start space.
    pub pass_start_bonus: i64,

    /// Fine to leave jail.
    pub jail_fine: i64,

    /// Failed doubles attempts before the fine becomes mandatory.
    pub max_jail_attempts: u8,

    /// Consecutive doubles in one turn that send a participant to jail.
    pub max_consecutive_doubles: u8,

    /// Houses in the bank at game start.
    pub initial_houses: u32,

    /// Hotels in the bank at game start.
    pub initial_hotels: u32,

    /// Interest charged on top of the mortgage value when lifting a mortgage,
    /// in percent.
    pub unmortgage_interest_percent: i64,

    /// Cash each participant starts with.
    pub starting_cash: i64,

    /// Classic color-group rules: building needs the whole unmortgaged group,
    /// and an unimproved street in a complete group charges double rent.
    pub group_rules: bool,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            board_size: 40,
            jail_position: 10,
            pass_start_bonus: 200,
            jail_fine: 50,
            max_jail_attempts: 3,
            max_consecutive_doubles: 3,
            initial_houses: 32,
            initial_hotels: 12,
            unmortgage_interest_percent: 10,
            starting_cash: 1500,
            group_rules: false,
        }
    }
}

impl RulesConfig {
    /// Set the starting cash.
    #[must_use]
    pub fn with_starting_cash(mut self, cash: i64) -> Self {
        self.starting_cash = cash;
        self
    }

    /// Set the building supply.
    #[must_use]
    pub fn with_supply(mut self, houses: u32, hotels: u32) -> Self {
        self.initial_houses = houses;
        self.initial_hotels = hotels;
        self
    }

    /// Turn the color-group rules on or off.
    #[must_use]
    pub fn with_group_rules(mut self, enabled: bool) -> Self {
        self.group_rules = enabled;
        self
    }
}

/// Setup for one seat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantSpec {
    pub name: String,
    /// `None` takes the first unclaimed token from [`TOKENS`].
    pub token: Option<String>,
    pub kind: ParticipantKind,
}

impl ParticipantSpec {
    pub fn human(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            token: None,
            kind: ParticipantKind::Human,
        }
    }

    pub fn computer(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            token: None,
            kind: ParticipantKind::Computer,
        }
    }

    /// Pick a token explicitly.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }
}

/// Complete game setup.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub rules: RulesConfig,
    pub participants: Vec<ParticipantSpec>,
}

impl GameConfig {
    /// Create a configuration with the default rules and no seats.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the rules.
    #[must_use]
    pub fn with_rules(mut self, rules: RulesConfig) -> Self {
        self.rules = rules;
        self
    }

    /// Add a seat.
    #[must_use]
    pub fn with_participant(mut self, spec: ParticipantSpec) -> Self {
        self.participants.push(spec);
        self
    }

    /// Number of seats configured.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.participants.len()
    }

    /// Resolve every seat's token.
    ///
    /// Explicit picks are kept; the rest take the first token from [`TOKENS`]
    /// that nobody has claimed, in seat order.
    #[must_use]
    pub fn resolved_tokens(&self) -> Vec<String> {
        let mut taken: Vec<String> = self
            .participants
            .iter()
            .filter_map(|p| p.token.clone())
            .collect();

        self.participants
            .iter()
            .enumerate()
            .map(|(seat, spec)| match &spec.token {
                Some(token) => token.clone(),
                None => {
                    let token = TOKENS
                        .iter()
                        .find(|t| !taken.iter().any(|held| held == *t))
                        .map(|t| t.to_string())
                        .unwrap_or_else(|| format!("Token {seat}"));
                    taken.push(token.clone());
                    token
                }
            })
            .collect()
    }

    /// Panics unless the seat count is within 2..=8.
    pub fn validate(&self) {
        let count = self.player_count();
        assert!(
            (MIN_PLAYERS..=MAX_PLAYERS).contains(&count),
            "Player count must be {MIN_PLAYERS}-{MAX_PLAYERS}, got {count}"
        );
    }
}
