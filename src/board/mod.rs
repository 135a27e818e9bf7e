//! The board: 40 fixed spaces and the deeds attached to them.
//!
//! - `space`: space variants
//! - `property`: deeds and rent schedules
//! - `layout`: the classic board
//! - `landing`: what happens when a token arrives on a space

pub mod landing;
pub mod layout;
pub mod property;
pub mod space;

pub use landing::{on_land, resolve_landing, Landing, Relocation};
pub use property::{ColorGroup, Property, PropertyId, RentSchedule};
pub use space::{Space, SpaceKind};

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;
use property::{railroad_rent, utility_rent};

/// Board positions of the four railroads.
pub const RAILROAD_POSITIONS: [u8; 4] = [5, 15, 25, 35];

/// Spaces in board order plus the deed list they refer to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    spaces: Vec<Space>,
    properties: Vec<Property>,
}

impl Board {
    /// Assemble a board.
    ///
    /// Panics unless there are exactly 40 spaces with indices 0..40 in order,
    /// and every deed is referenced by the space at its position.
    pub fn new(spaces: Vec<Space>, properties: Vec<Property>) -> Self {
        assert_eq!(spaces.len(), 40, "board must have exactly 40 spaces");
        for (i, space) in spaces.iter().enumerate() {
            assert_eq!(space.index as usize, i, "space indices must be contiguous");
        }
        for (i, prop) in properties.iter().enumerate() {
            assert_eq!(prop.id.index(), i, "property ids must match list order");
            assert_eq!(
                spaces[prop.position as usize].kind.property(),
                Some(prop.id),
                "deed {} is not attached to space {}",
                prop.name,
                prop.position
            );
        }

        Self { spaces, properties }
    }

    /// Number of spaces.
    #[must_use]
    pub fn len(&self) -> usize {
        self.spaces.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.spaces.is_empty()
    }

    /// Space at a board index. Panics when `index >= 40`.
    #[must_use]
    pub fn space(&self, index: u8) -> &Space {
        &self.spaces[index as usize]
    }

    #[must_use]
    pub fn spaces(&self) -> &[Space] {
        &self.spaces
    }

    /// Deed by id. Panics on an unknown id.
    #[must_use]
    pub fn property(&self, id: PropertyId) -> &Property {
        &self.properties[id.index()]
    }

    pub(crate) fn property_mut(&mut self, id: PropertyId) -> &mut Property {
        &mut self.properties[id.index()]
    }

    #[must_use]
    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    /// Deed on the space at `index`, if any.
    #[must_use]
    pub fn property_at(&self, index: u8) -> Option<&Property> {
        self.space(index).kind.property().map(|id| self.property(id))
    }

    /// Deeds of one color group, in board order.
    pub fn group_members(&self, group: ColorGroup) -> impl Iterator<Item = &Property> {
        self.properties.iter().filter(move |p| p.group == group)
    }

    /// How many deeds of `group` belong to `owner`.
    #[must_use]
    pub fn owned_in_group(&self, owner: PlayerId, group: ColorGroup) -> usize {
        self.group_members(group).filter(|p| p.is_owned_by(owner)).count()
    }

    /// `owner` holds every deed of `group`.
    #[must_use]
    pub fn owns_whole_group(&self, owner: PlayerId, group: ColorGroup) -> bool {
        self.group_members(group).all(|p| p.is_owned_by(owner))
    }

    /// Rent owed for landing on `id` with a roll totalling `dice_total`.
    ///
    /// Zero when the deed is unowned or mortgaged. With `group_rules`, an
    /// unimproved street whose owner holds the whole group charges double.
    #[must_use]
    pub fn rent_due(&self, id: PropertyId, dice_total: u8, group_rules: bool) -> i64 {
        let prop = self.property(id);
        let Some(owner) = prop.owner else {
            return 0;
        };
        if prop.mortgaged {
            return 0;
        }

        match prop.rent {
            RentSchedule::Street { rents, .. } => {
                let base = rents[prop.improvement_level()];
                if group_rules && !prop.has_buildings() && self.owns_whole_group(owner, prop.group) {
                    base * 2
                } else {
                    base
                }
            }
            RentSchedule::Railroad => railroad_rent(self.owned_in_group(owner, ColorGroup::Railroad)),
            RentSchedule::Utility => {
                utility_rent(self.owned_in_group(owner, ColorGroup::Utility), dice_total)
            }
        }
    }

    /// First railroad strictly ahead of `position`, wrapping past the start.
    #[must_use]
    pub fn nearest_railroad(&self, position: u8) -> u8 {
        RAILROAD_POSITIONS
            .iter()
            .copied()
            .find(|&pos| pos > position)
            .unwrap_or(RAILROAD_POSITIONS[0])
    }
}
