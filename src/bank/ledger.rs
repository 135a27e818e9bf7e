//! The bank: unowned deeds, building supply, and every cash movement.
//!
//! Preconditions are checked before anything is touched, so a refused
//! operation never leaves a partial update behind.

use im::OrdSet;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::board::{Board, PropertyId};
use crate::core::error::{ensure_funds, Building, GameError, InvalidOperation};
use crate::core::{Participant, PlayerId, PlayerMap, RulesConfig};

use super::auction::{AuctionOutcome, Bidder};

/// Central clearing authority of the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bank {
    houses_remaining: u32,
    hotels_remaining: u32,
    unowned: OrdSet<PropertyId>,
    unmortgage_interest_percent: i64,
    group_rules: bool,
}

impl Bank {
    /// Create the bank holding every deed of `board` that has no owner.
    pub fn new(board: &Board, rules: &RulesConfig) -> Self {
        Self {
            houses_remaining: rules.initial_houses,
            hotels_remaining: rules.initial_hotels,
            unowned: board
                .properties()
                .iter()
                .filter(|p| !p.is_owned())
                .map(|p| p.id)
                .collect(),
            unmortgage_interest_percent: rules.unmortgage_interest_percent,
            group_rules: rules.group_rules,
        }
    }

    #[must_use]
    pub fn houses_remaining(&self) -> u32 {
        self.houses_remaining
    }

    #[must_use]
    pub fn hotels_remaining(&self) -> u32 {
        self.hotels_remaining
    }

    /// Deeds the bank still holds.
    #[must_use]
    pub fn unowned(&self) -> &OrdSet<PropertyId> {
        &self.unowned
    }

    #[must_use]
    pub fn is_unowned(&self, id: PropertyId) -> bool {
        self.unowned.contains(&id)
    }

    /// Cost of lifting a mortgage worth `value`.
    #[must_use]
    pub fn unmortgage_cost(&self, value: i64) -> i64 {
        value * (100 + self.unmortgage_interest_percent) / 100
    }

    // === Cash ===

    /// Give money to a participant. Non-positive amounts are ignored.
    pub fn pay(&self, participant: &mut Participant, amount: i64) {
        if amount > 0 {
            participant.cash += amount;
            debug!(player = %participant.name, amount, cash = participant.cash, "bank pays");
        }
    }

    /// Take money from a participant, even past zero. Non-positive amounts
    /// are ignored.
    pub fn collect(&self, participant: &mut Participant, amount: i64) {
        if amount > 0 {
            participant.cash -= amount;
            debug!(player = %participant.name, amount, cash = participant.cash, "bank collects");
        }
    }

    /// Move money between two participants through the bank.
    pub fn transfer(&self, players: &mut PlayerMap<Participant>, from: PlayerId, to: PlayerId, amount: i64) {
        if from == to {
            return;
        }
        self.collect(&mut players[from], amount);
        self.pay(&mut players[to], amount);
    }

    // === Deeds ===

    /// Sell an unowned deed at list price. Returns the price paid.
    pub fn sell(&mut self, board: &mut Board, buyer: &mut Participant, id: PropertyId) -> Result<i64, GameError> {
        if !self.is_unowned(id) {
            return Err(GameError::from(InvalidOperation::AlreadyOwned));
        }
        let price = board.property(id).price;
        ensure_funds(price, buyer.cash)?;

        self.collect(buyer, price);
        self.grant(board, buyer, id);
        info!(player = %buyer.name, property = %board.property(id).name, price, "property sold");
        Ok(price)
    }

    /// Auction an unowned deed among all participants with cash.
    ///
    /// The deed leaves the pool right away. Each participant is asked once, in
    /// seat order; a bid counts if it beats the current high bid and the
    /// bidder can cover it, so ties go to the earlier bidder. Only the winner
    /// pays. Without a qualifying bid the deed goes back to the pool.
    pub fn auction(
        &mut self,
        board: &mut Board,
        players: &mut PlayerMap<Participant>,
        id: PropertyId,
        bidder: &mut dyn Bidder,
    ) -> Result<AuctionOutcome, GameError> {
        if !self.unowned.contains(&id) {
            return Err(GameError::from(InvalidOperation::AlreadyOwned));
        }
        self.unowned.remove(&id);
        debug!(property = %board.property(id).name, "auction opened");

        let mut high_bid = 0;
        let mut winner = None;
        for (seat, participant) in players.iter() {
            if participant.cash <= 0 {
                continue;
            }
            let bid = bidder.bid(participant, board.property(id), high_bid);
            if bid > high_bid && bid <= participant.cash {
                high_bid = bid;
                winner = Some(seat);
            }
        }

        match winner {
            Some(seat) => {
                let participant = &mut players[seat];
                self.collect(participant, high_bid);
                self.grant(board, participant, id);
                info!(player = %participant.name, property = %board.property(id).name, price = high_bid, "auction won");
                Ok(AuctionOutcome::sold(id, seat, high_bid))
            }
            None => {
                self.unowned.insert(id);
                info!(property = %board.property(id).name, "auction closed without bids");
                Ok(AuctionOutcome::unsold(id))
            }
        }
    }

    /// Mortgage a deed. Pays the owner half the list price.
    pub fn mortgage(&mut self, board: &mut Board, owner: &mut Participant, id: PropertyId) -> Result<i64, GameError> {
        let prop = board.property(id);
        if !prop.is_owned_by(owner.id) {
            return Err(GameError::from(InvalidOperation::NotOwner));
        }
        if prop.mortgaged {
            return Err(GameError::from(InvalidOperation::AlreadyMortgaged));
        }
        if prop.has_buildings() {
            return Err(GameError::from(InvalidOperation::HasBuildings));
        }

        let value = prop.mortgage_value();
        board.property_mut(id).mortgaged = true;
        self.pay(owner, value);
        info!(player = %owner.name, property = %board.property(id).name, value, "property mortgaged");
        Ok(value)
    }

    /// Lift a mortgage. Charges the mortgage value plus interest.
    pub fn unmortgage(&mut self, board: &mut Board, owner: &mut Participant, id: PropertyId) -> Result<i64, GameError> {
        let prop = board.property(id);
        if !prop.is_owned_by(owner.id) {
            return Err(GameError::from(InvalidOperation::NotOwner));
        }
        if !prop.mortgaged {
            return Err(GameError::from(InvalidOperation::NotMortgaged));
        }
        let cost = self.unmortgage_cost(prop.mortgage_value());
        ensure_funds(cost, owner.cash)?;

        board.property_mut(id).mortgaged = false;
        self.collect(owner, cost);
        info!(player = %owner.name, property = %board.property(id).name, cost, "mortgage lifted");
        Ok(cost)
    }

    // === Buildings ===

    /// Build one house on a street. Returns the price paid.
    pub fn build_house(&mut self, board: &mut Board, owner: &mut Participant, id: PropertyId) -> Result<i64, GameError> {
        let cost = self.check_buildable(board, owner, id)?;
        let prop = board.property(id);
        if prop.hotel {
            return Err(GameError::from(InvalidOperation::HotelPresent));
        }
        if prop.houses >= crate::board::property::MAX_HOUSES {
            return Err(GameError::from(InvalidOperation::MaxHouses));
        }
        if self.houses_remaining == 0 {
            return Err(GameError::SupplyExhausted(Building::House));
        }
        ensure_funds(cost, owner.cash)?;

        self.houses_remaining -= 1;
        self.collect(owner, cost);
        let prop = board.property_mut(id);
        prop.houses += 1;
        info!(player = %owner.name, property = %prop.name, houses = prop.houses, cost, "house built");
        Ok(cost)
    }

    /// Replace four houses with a hotel. The houses go back to the supply.
    pub fn build_hotel(&mut self, board: &mut Board, owner: &mut Participant, id: PropertyId) -> Result<i64, GameError> {
        let cost = self.check_buildable(board, owner, id)?;
        let prop = board.property(id);
        if prop.hotel {
            return Err(GameError::from(InvalidOperation::HotelPresent));
        }
        if prop.houses < crate::board::property::MAX_HOUSES {
            return Err(GameError::from(InvalidOperation::NeedsFourHouses));
        }
        if self.hotels_remaining == 0 {
            return Err(GameError::SupplyExhausted(Building::Hotel));
        }
        ensure_funds(cost, owner.cash)?;

        self.hotels_remaining -= 1;
        self.houses_remaining += u32::from(prop.houses);
        self.collect(owner, cost);
        let prop = board.property_mut(id);
        prop.houses = 0;
        prop.hotel = true;
        info!(player = %owner.name, property = %prop.name, cost, "hotel built");
        Ok(cost)
    }

    /// Checks shared by house and hotel construction; returns the unit cost.
    fn check_buildable(&self, board: &Board, owner: &Participant, id: PropertyId) -> Result<i64, GameError> {
        let prop = board.property(id);
        if !prop.is_owned_by(owner.id) {
            return Err(GameError::from(InvalidOperation::NotOwner));
        }
        let Some(cost) = prop.house_cost() else {
            return Err(GameError::from(InvalidOperation::NotBuildable));
        };
        if prop.mortgaged {
            return Err(GameError::from(InvalidOperation::Mortgaged));
        }
        if self.group_rules {
            let whole = board.owns_whole_group(owner.id, prop.group);
            let clear = board.group_members(prop.group).all(|p| !p.mortgaged);
            if !whole || !clear {
                return Err(GameError::from(InvalidOperation::IncompleteGroup));
            }
        }
        Ok(cost)
    }

    /// Hand a deed to a participant and drop it from the pool.
    fn grant(&mut self, board: &mut Board, participant: &mut Participant, id: PropertyId) {
        self.unowned.remove(&id);
        board.property_mut(id).owner = Some(participant.id);
        participant.properties.insert(id);
    }
}
