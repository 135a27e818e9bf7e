//! The classic 40-space board.

use super::property::{ColorGroup, Property, PropertyId};
use super::space::{Space, SpaceKind};
use super::Board;

use ColorGroup::*;

/// Layout entry for one board index.
enum Slot {
    Plain(&'static str, SpaceKind),
    Street(&'static str, ColorGroup, i64, [i64; 6], i64),
    Railroad(&'static str),
    Utility(&'static str),
}

const RAILROAD_PRICE: i64 = 200;
const UTILITY_PRICE: i64 = 150;

const LAYOUT: [Slot; 40] = [
    Slot::Plain("Go", SpaceKind::Start),
    Slot::Street("Mediterranean Avenue", Brown, 60, [2, 10, 30, 90, 160, 250], 50),
    Slot::Plain("Community Chest", SpaceKind::CommunityChest),
    Slot::Street("Baltic Avenue", Brown, 60, [4, 20, 60, 180, 320, 450], 50),
    Slot::Plain("Income Tax", SpaceKind::Tax { amount: 200 }),
    Slot::Railroad("Reading Railroad"),
    Slot::Street("Oriental Avenue", LightBlue, 100, [6, 30, 90, 270, 400, 550], 50),
    Slot::Plain("Chance", SpaceKind::Chance),
    Slot::Street("Vermont Avenue", LightBlue, 100, [6, 30, 90, 270, 400, 550], 50),
    Slot::Street("Connecticut Avenue", LightBlue, 120, [8, 40, 100, 300, 450, 600], 50),
    Slot::Plain("Jail", SpaceKind::Jail),
    Slot::Street("St. Charles Place", Pink, 140, [10, 50, 150, 450, 625, 750], 100),
    Slot::Utility("Electric Company"),
    Slot::Street("States Avenue", Pink, 140, [10, 50, 150, 450, 625, 750], 100),
    Slot::Street("Virginia Avenue", Pink, 160, [12, 60, 180, 500, 700, 900], 100),
    Slot::Railroad("Pennsylvania Railroad"),
    Slot::Street("St. James Place", Orange, 180, [14, 70, 200, 550, 750, 950], 100),
    Slot::Plain("Community Chest", SpaceKind::CommunityChest),
    Slot::Street("Tennessee Avenue", Orange, 180, [14, 70, 200, 550, 750, 950], 100),
    Slot::Street("New York Avenue", Orange, 200, [16, 80, 220, 600, 800, 1000], 100),
    Slot::Plain("Free Parking", SpaceKind::FreeParking),
    Slot::Street("Kentucky Avenue", Red, 220, [18, 90, 250, 700, 875, 1050], 150),
    Slot::Plain("Chance", SpaceKind::Chance),
    Slot::Street("Indiana Avenue", Red, 220, [18, 90, 250, 700, 875, 1050], 150),
    Slot::Street("Illinois Avenue", Red, 240, [20, 100, 300, 750, 925, 1100], 150),
    Slot::Railroad("B. & O. Railroad"),
    Slot::Street("Atlantic Avenue", Yellow, 260, [22, 110, 330, 800, 975, 1150], 150),
    Slot::Street("Ventnor Avenue", Yellow, 260, [22, 110, 330, 800, 975, 1150], 150),
    Slot::Utility("Water Works"),
    Slot::Street("Marvin Gardens", Yellow, 280, [24, 120, 360, 850, 1025, 1200], 150),
    Slot::Plain("Go To Jail", SpaceKind::GoToJail),
    Slot::Street("Pacific Avenue", Green, 300, [26, 130, 390, 900, 1100, 1275], 200),
    Slot::Street("North Carolina Avenue", Green, 300, [26, 130, 390, 900, 1100, 1275], 200),
    Slot::Plain("Community Chest", SpaceKind::CommunityChest),
    Slot::Street("Pennsylvania Avenue", Green, 320, [28, 150, 450, 1000, 1200, 1400], 200),
    Slot::Railroad("Short Line"),
    Slot::Plain("Chance", SpaceKind::Chance),
    Slot::Street("Park Place", DarkBlue, 350, [35, 175, 500, 1100, 1300, 1500], 200),
    Slot::Plain("Luxury Tax", SpaceKind::Tax { amount: 100 }),
    Slot::Street("Boardwalk", DarkBlue, 400, [50, 200, 600, 1400, 1700, 2000], 200),
];

impl Board {
    /// Build the classic board with every deed held by the bank.
    #[must_use]
    pub fn standard() -> Self {
        let mut spaces = Vec::with_capacity(LAYOUT.len());
        let mut properties = Vec::new();

        for (index, slot) in LAYOUT.iter().enumerate() {
            let index = index as u8;
            let id = PropertyId::new(properties.len() as u8);

            let space = match *slot {
                Slot::Plain(name, kind) => Space::new(index, name, kind),
                Slot::Street(name, group, price, rents, house_cost) => {
                    properties.push(Property::street(id, name, index, group, price, rents, house_cost));
                    Space::new(index, name, SpaceKind::Property(id))
                }
                Slot::Railroad(name) => {
                    properties.push(Property::railroad(id, name, index, RAILROAD_PRICE));
                    Space::new(index, name, SpaceKind::Railroad(id))
                }
                Slot::Utility(name) => {
                    properties.push(Property::utility(id, name, index, UTILITY_PRICE));
                    Space::new(index, name, SpaceKind::Utility(id))
                }
            };
            spaces.push(space);
        }

        Board::new(spaces, properties)
    }
}
