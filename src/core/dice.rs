//! Dice rolls and roll sources.
//!
//! The turn engine only sees the [`RollSource`] trait. [`Dice`] is the seeded
//! production source; [`ScriptedDice`] replays a fixed cycle of rolls, which
//! makes scenario tests and replays exact.

use serde::{Deserialize, Serialize};

use super::rng::GameRng;

/// Two six-sided dice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiceRoll {
    pub d1: u8,
    pub d2: u8,
}

impl DiceRoll {
    /// Create a roll from two die faces.
    ///
    /// Panics if either face is outside 1..=6.
    #[must_use]
    pub fn new(d1: u8, d2: u8) -> Self {
        assert!((1..=6).contains(&d1), "die value {d1} out of range 1..=6");
        assert!((1..=6).contains(&d2), "die value {d2} out of range 1..=6");
        Self { d1, d2 }
    }

    /// Sum of both dice (2..=12).
    #[must_use]
    pub const fn total(self) -> u8 {
        self.d1 + self.d2
    }

    /// Both dice show the same face.
    #[must_use]
    pub const fn is_doubles(self) -> bool {
        self.d1 == self.d2
    }
}

impl std::fmt::Display for DiceRoll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.d1, self.d2)
    }
}

/// Anything that can produce dice rolls for the turn engine.
pub trait RollSource {
    /// Roll both dice.
    fn roll(&mut self) -> DiceRoll;
}

/// Seeded pair of fair dice.
#[derive(Clone, Debug)]
pub struct Dice {
    rng: GameRng,
}

impl Dice {
    /// Create dice seeded from the game seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::from_rng(GameRng::new(seed).for_context("dice"))
    }

    /// Create dice drawing from an existing RNG stream.
    #[must_use]
    pub fn from_rng(rng: GameRng) -> Self {
        Self { rng }
    }
}

impl RollSource for Dice {
    fn roll(&mut self) -> DiceRoll {
        let d1 = self.rng.roll_die();
        let d2 = self.rng.roll_die();
        DiceRoll::new(d1, d2)
    }
}

/// Replays a fixed sequence of rolls, starting over when exhausted.
#[derive(Clone, Debug)]
pub struct ScriptedDice {
    rolls: Vec<DiceRoll>,
    next: usize,
}

impl ScriptedDice {
    /// Create a scripted source from `(d1, d2)` pairs.
    ///
    /// Panics if `rolls` is empty or contains a face outside 1..=6.
    #[must_use]
    pub fn new(rolls: &[(u8, u8)]) -> Self {
        assert!(!rolls.is_empty(), "ScriptedDice needs at least one roll");
        Self {
            rolls: rolls.iter().map(|&(a, b)| DiceRoll::new(a, b)).collect(),
            next: 0,
        }
    }

    /// Number of rolls handed out so far.
    #[must_use]
    pub fn rolls_taken(&self) -> usize {
        self.next
    }
}

impl RollSource for ScriptedDice {
    fn roll(&mut self) -> DiceRoll {
        let roll = self.rolls[self.next % self.rolls.len()];
        self.next += 1;
        roll
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roll_bounds() {
        let mut dice = Dice::new(42);

        for _ in 0..1000 {
            let roll = dice.roll();
            assert!((1..=6).contains(&roll.d1));
            assert!((1..=6).contains(&roll.d2));
            assert!((2..=12).contains(&roll.total()));
        }
    }

    #[test]
    fn test_doubles() {
        assert!(DiceRoll::new(3, 3).is_doubles());
        assert!(!DiceRoll::new(3, 4).is_doubles());
        assert_eq!(DiceRoll::new(6, 6).total(), 12);
    }

    #[test]
    fn test_seeded_dice_are_deterministic() {
        let mut a = Dice::new(9);
        let mut b = Dice::new(9);

        for _ in 0..50 {
            assert_eq!(a.roll(), b.roll());
        }
    }

    #[test]
    fn test_scripted_dice_cycle() {
        let mut dice = ScriptedDice::new(&[(1, 2), (6, 6)]);

        assert_eq!(dice.roll(), DiceRoll::new(1, 2));
        assert_eq!(dice.roll(), DiceRoll::new(6, 6));
        assert_eq!(dice.roll(), DiceRoll::new(1, 2));
        assert_eq!(dice.rolls_taken(), 3);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_invalid_face_panics() {
        let _ = DiceRoll::new(0, 7);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", DiceRoll::new(4, 2)), "(4, 2)");
    }
}
