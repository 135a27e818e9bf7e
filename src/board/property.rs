//! Deeds: streets, railroads and utilities.
//!
//! A `Property` is the ownership-bearing part of a board space. Its rent
//! schedule decides how rent is computed:
//!
//! - **Street**: fixed table indexed by improvement level
//!   (no house, 1–4 houses, hotel)
//! - **Railroad**: 25, 50, 100, 200 for 1–4 railroads held by the owner
//! - **Utility**: 4× the dice total with one utility held, 10× with both

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Index of a deed in the board's property list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PropertyId(pub u8);

impl PropertyId {
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for PropertyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Property({})", self.0)
    }
}

/// Set of deeds that share a color (railroads and utilities form their own).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorGroup {
    Brown,
    LightBlue,
    Pink,
    Orange,
    Red,
    Yellow,
    Green,
    DarkBlue,
    Railroad,
    Utility,
}

/// Rent charged by a railroad when its owner holds one of them.
pub const RAILROAD_BASE_RENT: i64 = 25;

/// Dice multiplier for a utility whose owner holds one utility.
pub const UTILITY_SINGLE_MULTIPLIER: i64 = 4;

/// Dice multiplier for a utility whose owner holds both.
pub const UTILITY_PAIR_MULTIPLIER: i64 = 10;

/// Highest house count before a hotel.
pub const MAX_HOUSES: u8 = 4;

/// How a deed computes rent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RentSchedule {
    Street {
        /// Rent for no house, 1–4 houses, hotel.
        rents: [i64; 6],
        /// Price of one house (a hotel costs the same).
        house_cost: i64,
    },
    Railroad,
    Utility,
}

/// A purchasable deed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    pub id: PropertyId,
    pub name: String,
    /// Board index of the space this deed belongs to.
    pub position: u8,
    pub price: i64,
    pub group: ColorGroup,
    pub rent: RentSchedule,
    /// `None` while the bank holds the deed.
    pub owner: Option<PlayerId>,
    pub mortgaged: bool,
    /// 0..=4; reset to 0 once a hotel is built.
    pub houses: u8,
    pub hotel: bool,
}

impl Property {
    fn new(id: PropertyId, name: &str, position: u8, price: i64, group: ColorGroup, rent: RentSchedule) -> Self {
        Self {
            id,
            name: name.to_string(),
            position,
            price,
            group,
            rent,
            owner: None,
            mortgaged: false,
            houses: 0,
            hotel: false,
        }
    }

    /// Create an unowned street.
    pub fn street(
        id: PropertyId,
        name: &str,
        position: u8,
        group: ColorGroup,
        price: i64,
        rents: [i64; 6],
        house_cost: i64,
    ) -> Self {
        Self::new(id, name, position, price, group, RentSchedule::Street { rents, house_cost })
    }

    /// Create an unowned railroad.
    pub fn railroad(id: PropertyId, name: &str, position: u8, price: i64) -> Self {
        Self::new(id, name, position, price, ColorGroup::Railroad, RentSchedule::Railroad)
    }

    /// Create an unowned utility.
    pub fn utility(id: PropertyId, name: &str, position: u8, price: i64) -> Self {
        Self::new(id, name, position, price, ColorGroup::Utility, RentSchedule::Utility)
    }

    #[must_use]
    pub fn is_owned(&self) -> bool {
        self.owner.is_some()
    }

    #[must_use]
    pub fn is_owned_by(&self, player: PlayerId) -> bool {
        self.owner == Some(player)
    }

    #[must_use]
    pub fn is_street(&self) -> bool {
        matches!(self.rent, RentSchedule::Street { .. })
    }

    /// Cash paid to the owner when mortgaging: half the list price.
    #[must_use]
    pub fn mortgage_value(&self) -> i64 {
        self.price / 2
    }

    /// Price of a house or hotel; `None` for railroads and utilities.
    #[must_use]
    pub fn house_cost(&self) -> Option<i64> {
        match self.rent {
            RentSchedule::Street { house_cost, .. } => Some(house_cost),
            _ => None,
        }
    }

    /// Row of the rent table in effect: house count, or 5 with a hotel.
    #[must_use]
    pub fn improvement_level(&self) -> usize {
        if self.hotel {
            5
        } else {
            self.houses as usize
        }
    }

    #[must_use]
    pub fn has_buildings(&self) -> bool {
        self.hotel || self.houses > 0
    }

    /// Table rent of a street at its current improvement level.
    #[must_use]
    pub fn street_rent(&self) -> Option<i64> {
        match self.rent {
            RentSchedule::Street { rents, .. } => Some(rents[self.improvement_level()]),
            _ => None,
        }
    }
}

/// Railroad rent when the owner holds `owned` railroads.
#[must_use]
pub fn railroad_rent(owned: usize) -> i64 {
    match owned {
        0 => 0,
        n => RAILROAD_BASE_RENT << (n.min(4) - 1),
    }
}

/// Utility rent for a `dice_total` when the owner holds `owned` utilities.
#[must_use]
pub fn utility_rent(owned: usize, dice_total: u8) -> i64 {
    let multiplier = match owned {
        0 => 0,
        1 => UTILITY_SINGLE_MULTIPLIER,
        _ => UTILITY_PAIR_MULTIPLIER,
    };
    multiplier * i64::from(dice_total)
}
