//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Seat index of a participant, assigned in join order.
//!
//! ## PlayerMap
//!
//! Per-player storage backed by `Vec` for O(1) access. Players join one at a
//! time during setup, so the map grows with `push` instead of being sized up
//! front.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Most seats a session can hold: every `u8` is a valid `PlayerId`.
pub const MAX_PLAYERS: usize = u8::MAX as usize + 1;

/// Player identifier supporting up to `MAX_PLAYERS` seats.
///
/// Player indices are 0-based: the first player to join is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a session with `player_count` players.
    ///
    /// ```
    /// use spirit_tracker::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[3], PlayerId::new(3));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..=u8::MAX).take(player_count).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Growable per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use spirit_tracker::core::{PlayerId, PlayerMap};
///
/// let mut energy: PlayerMap<u32> = PlayerMap::new();
/// let first = energy.push(3).unwrap();
/// let second = energy.push(5).unwrap();
///
/// assert_eq!(first, PlayerId::new(0));
/// assert_eq!(energy[second], 5);
/// assert!(energy.get(PlayerId::new(2)).is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> Default for PlayerMap<T> {
    fn default() -> Self {
        Self { data: Vec::new() }
    }
}

impl<T> PlayerMap<T> {
    /// Create an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a player's data and return the seat it was assigned.
    ///
    /// Returns `None` (and drops `value`) once every seat is taken.
    pub fn push(&mut self, value: T) -> Option<PlayerId> {
        let id = PlayerId(u8::try_from(self.data.len()).ok()?);
        self.data.push(value);
        Some(id)
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Check if no player has joined yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> Option<&T> {
        self.data.get(player.index())
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> Option<&mut T> {
        self.data.get_mut(player.index())
    }

    /// Remove every player.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::all(self.data.len()).zip(&self.data)
    }

    /// Iterate over (PlayerId, &mut T) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        PlayerId::all(self.data.len()).zip(&mut self.data)
    }

    /// Iterate over all player IDs.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        PlayerId::all(self.data.len())
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.data[player.index()]
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        &mut self.data[player.index()]
    }
}
