//! Whose turn it is.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Externally visible engine phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for this participant to roll.
    AwaitingRoll(PlayerId),
    /// `end_game` was called; nothing else happens.
    GameOver,
}

/// Turn position within the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnCursor {
    pub current: PlayerId,
    /// Consecutive doubles rolled in the current turn.
    pub doubles: u8,
    pub game_over: bool,
    /// Starts at 1; goes up each time the turn passes.
    pub turn_number: u32,
}

impl Default for TurnCursor {
    fn default() -> Self {
        Self::new()
    }
}

impl TurnCursor {
    #[must_use]
    pub fn new() -> Self {
        Self {
            current: PlayerId::new(0),
            doubles: 0,
            game_over: false,
            turn_number: 1,
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.game_over {
            Phase::GameOver
        } else {
            Phase::AwaitingRoll(self.current)
        }
    }

    /// Count a doubles roll; returns the new streak.
    pub fn record_doubles(&mut self) -> u8 {
        self.doubles += 1;
        self.doubles
    }

    /// Hand the turn to the next seat and clear the doubles streak.
    pub fn pass(&mut self, player_count: usize) -> PlayerId {
        self.current = self.current.next(player_count);
        self.doubles = 0;
        self.turn_number += 1;
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_phase() {
        let cursor = TurnCursor::new();
        assert_eq!(cursor.phase(), Phase::AwaitingRoll(PlayerId::new(0)));
        assert_eq!(cursor.turn_number, 1);
    }

    #[test]
    fn test_pass_resets_doubles() {
        let mut cursor = TurnCursor::new();
        assert_eq!(cursor.record_doubles(), 1);
        assert_eq!(cursor.record_doubles(), 2);

        assert_eq!(cursor.pass(3), PlayerId::new(1));
        assert_eq!(cursor.doubles, 0);
        assert_eq!(cursor.turn_number, 2);

        cursor.pass(3);
        assert_eq!(cursor.pass(3), PlayerId::new(0));
    }

    #[test]
    fn test_game_over_phase() {
        let mut cursor = TurnCursor::new();
        cursor.game_over = true;
        assert_eq!(cursor.phase(), Phase::GameOver);
    }
}
