//! What a drawn card does.

use serde::{Deserialize, Serialize};

/// Which pile a card comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeckKind {
    Chance,
    CommunityChest,
}

impl std::fmt::Display for DeckKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeckKind::Chance => f.write_str("Chance"),
            DeckKind::CommunityChest => f.write_str("Community Chest"),
        }
    }
}

/// Effect of a card, applied with the same primitives as board spaces.
///
/// Relocating effects (`MoveTo`, `MoveBy`, `NearestRailroad`) cause the
/// destination space to be resolved as a landing of its own.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardEffect {
    /// Bank pays the drawer.
    Collect(i64),
    /// Drawer pays the bank.
    Pay(i64),
    /// Advance to a board index; passing the start pays the bonus.
    MoveTo(u8),
    /// Move a signed number of steps. Backward moves never pay the bonus.
    MoveBy(i8),
    /// Advance to the next railroad ahead.
    NearestRailroad,
    GoToJail,
    /// Keep a "get out of jail free" card.
    ReleaseCard,
    /// Every other participant pays the drawer.
    CollectFromEach(i64),
    /// Drawer pays every other participant.
    PayEach(i64),
    /// Pay per house and per hotel owned.
    Repairs { per_house: i64, per_hotel: i64 },
}

impl std::fmt::Display for CardEffect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CardEffect::Collect(n) => write!(f, "collect ${n}"),
            CardEffect::Pay(n) => write!(f, "pay ${n}"),
            CardEffect::MoveTo(pos) => write!(f, "advance to {pos}"),
            CardEffect::MoveBy(steps) if *steps < 0 => write!(f, "go back {}", -steps),
            CardEffect::MoveBy(steps) => write!(f, "move {steps}"),
            CardEffect::NearestRailroad => f.write_str("advance to the nearest railroad"),
            CardEffect::GoToJail => f.write_str("go to jail"),
            CardEffect::ReleaseCard => f.write_str("get out of jail free"),
            CardEffect::CollectFromEach(n) => write!(f, "collect ${n} from each player"),
            CardEffect::PayEach(n) => write!(f, "pay each player ${n}"),
            CardEffect::Repairs { per_house, per_hotel } => {
                write!(f, "repairs: ${per_house} per house, ${per_hotel} per hotel")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(CardEffect::MoveBy(-3).to_string(), "go back 3");
        assert_eq!(CardEffect::PayEach(50).to_string(), "pay each player $50");
        assert_eq!(DeckKind::CommunityChest.to_string(), "Community Chest");
    }
}
