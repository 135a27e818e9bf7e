//! Board spaces.
//!
//! Space behavior is a closed set of variants; `board::landing::on_land` is
//! the single place that dispatches on them.

use serde::{Deserialize, Serialize};

use super::property::PropertyId;

/// What happens on a space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpaceKind {
    /// The start space; passing it pays the bonus.
    Start,
    /// A street deed.
    Property(PropertyId),
    Railroad(PropertyId),
    Utility(PropertyId),
    /// Flat amount collected by the bank.
    Tax { amount: i64 },
    Chance,
    CommunityChest,
    /// Jail, or "just visiting" for anyone who merely lands here.
    Jail,
    GoToJail,
    FreeParking,
}

impl SpaceKind {
    /// Deed attached to this space, if it is purchasable.
    #[must_use]
    pub fn property(self) -> Option<PropertyId> {
        match self {
            SpaceKind::Property(id) | SpaceKind::Railroad(id) | SpaceKind::Utility(id) => Some(id),
            _ => None,
        }
    }
}

/// One of the board's fixed positions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Space {
    pub index: u8,
    pub name: String,
    pub kind: SpaceKind,
}

impl Space {
    pub fn new(index: u8, name: impl Into<String>, kind: SpaceKind) -> Self {
        Self {
            index,
            name: name.into(),
            kind,
        }
    }

    #[must_use]
    pub fn is_purchasable(&self) -> bool {
        self.kind.property().is_some()
    }
}

impl std::fmt::Display for Space {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.index)
    }
}
