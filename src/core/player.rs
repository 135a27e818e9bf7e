//! Participant identification and per-participant data.
//!
//! ## PlayerId
//!
//! Seat index of a participant, 0-based. Turn order follows seat order.
//!
//! ## PlayerMap
//!
//! Per-seat storage backed by `Vec` for O(1) access. Indexing with a seat
//! that does not exist is a programmer error and panics.
//!
//! ## Participant
//!
//! Everything the rules track about one seat: position, cash, deeds held and
//! release cards. Whether a participant is confined is *not* stored here; the
//! jail tracker is the authority for that.

use im::OrdSet;
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use crate::board::PropertyId;

/// Seat identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Seat that plays after this one in a game of `player_count` seats.
    #[must_use]
    pub fn next(self, player_count: usize) -> Self {
        Self(((self.index() + 1) % player_count) as u8)
    }

    /// Iterate over all seats for a game with `player_count` participants.
    ///
    /// ```
    /// use rust_monopoly::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[3], PlayerId::new(3));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-seat data storage with O(1) access.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Build from a factory called once per seat.
    pub fn new(player_count: usize, factory: impl FnMut(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        Self {
            data: PlayerId::all(player_count).map(factory).collect(),
        }
    }

    /// Number of seats.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over all seats.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        PlayerId::all(self.data.len())
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

/// Who makes decisions for a seat.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParticipantKind {
    /// Decisions arrive through the engine's public operations.
    #[default]
    Human,
    /// Decisions come from the engine's automated policy.
    Computer,
}

/// Classic token set, handed out in seat order to participants that did not
/// pick one.
pub const TOKENS: [&str; 15] = [
    "Top Hat",
    "Battleship",
    "Thimble",
    "Cannon",
    "Cat",
    "Iron",
    "Scottie dog",
    "The Shoe",
    "Boot",
    "Ducky",
    "Horse & Rider",
    "Penguin",
    "Race car",
    "Train",
    "Wheelbarrow",
];

/// One participant's game data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: PlayerId,
    pub name: String,
    pub token: String,
    pub kind: ParticipantKind,
    /// Board index 0..40.
    pub position: u8,
    /// May go negative after a mandatory payment; see `is_insolvent`.
    pub cash: i64,
    /// Deeds held, ordered by `PropertyId`.
    pub properties: OrdSet<PropertyId>,
    /// "Get out of jail free" cards held.
    pub release_cards: u8,
}

impl Participant {
    /// Create a participant on the start space.
    pub fn new(
        id: PlayerId,
        name: impl Into<String>,
        token: impl Into<String>,
        kind: ParticipantKind,
        cash: i64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            token: token.into(),
            kind,
            position: 0,
            cash,
            properties: OrdSet::new(),
            release_cards: 0,
        }
    }

    #[must_use]
    pub fn is_computer(&self) -> bool {
        self.kind == ParticipantKind::Computer
    }

    #[must_use]
    pub fn owns(&self, property: PropertyId) -> bool {
        self.properties.contains(&property)
    }

    /// Cash went below zero and has not been restored.
    #[must_use]
    pub fn is_insolvent(&self) -> bool {
        self.cash < 0
    }
}

impl std::fmt::Display for Participant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [{}] @{:02} ${}",
            self.name, self.token, self.position, self.cash
        )
    }
}
