//! Player card store.
//!
//! `PlayerCardStore` owns every participant's `PlayerRecord`, the card
//! lookup, and the notification sink. Per-player operations go through
//! `PlayerHandle`s; `clean_up` is the one operation that touches every
//! player at once.
//!
//! ## Snapshots
//!
//! The player list is plain data and can be saved with `snapshot()` as JSON
//! or compact binary, then loaded back with `restore()`.

pub mod handle;
pub mod record;

pub use handle::{PlayerHandle, PlayerView};
pub use record::{AspectMode, PlayerRecord};

use serde::{Deserialize, Serialize};

use crate::cards::CardLookup;
use crate::core::config::GameData;
use crate::core::error::{StoreError, StoreResult};
use crate::core::notify::{MessageLog, NotificationSink};
use crate::core::{PlayerId, PlayerMap, MAX_PLAYERS};
use crate::zones::Zone;

/// Zones and resources of every participant.
///
/// ## Usage
///
/// ```
/// use spirit_tracker::cards::{CardKey, CardRegistry, PowerCard, Speed};
/// use spirit_tracker::core::{GameData, SpiritDefinition};
/// use spirit_tracker::store::PlayerCardStore;
///
/// let data = GameData::new().with_spirit(
///     SpiritDefinition::new("Shadows Flicker Like Flame")
///         .with_card(PowerCard::new("Concealing Shadows", 0, Speed::Fast)),
/// );
/// let mut store = PlayerCardStore::new(CardRegistry::from_game_data(&data));
/// let shadows = store.add_player(0, &data).unwrap();
///
/// let mut player = store.player_mut(shadows).unwrap();
/// assert!(player.play_card(&CardKey::unique(0, 0), None).unwrap());
/// assert_eq!(player.play(), [CardKey::unique(0, 0)]);
/// ```
#[derive(Clone, Debug)]
pub struct PlayerCardStore<L, N = MessageLog> {
    lookup: L,
    players: PlayerMap<PlayerRecord>,
    sink: N,
}

impl<L: CardLookup> PlayerCardStore<L, MessageLog> {
    /// Create an empty store that collects notifications in a `MessageLog`.
    #[must_use]
    pub fn new(lookup: L) -> Self {
        Self::with_sink(lookup, MessageLog::new())
    }
}

impl<L: CardLookup, N: NotificationSink> PlayerCardStore<L, N> {
    /// Create an empty store with a custom notification sink.
    #[must_use]
    pub fn with_sink(lookup: L, sink: N) -> Self {
        Self {
            lookup,
            players: PlayerMap::new(),
            sink,
        }
    }

    /// Add a participant playing spirit `spirit_index` of `data`.
    ///
    /// The new player starts with the spirit's cards in hand and its panel
    /// values in the ledger. Fails with `TooManyPlayers` once all
    /// `MAX_PLAYERS` seats are taken.
    pub fn add_player(&mut self, spirit_index: usize, data: &GameData) -> StoreResult<PlayerId> {
        let spirit = data
            .spirit(spirit_index)
            .ok_or(StoreError::UnknownSpirit(spirit_index))?;
        let id = self
            .players
            .push(PlayerRecord::new(spirit_index, spirit))
            .ok_or(StoreError::TooManyPlayers(self.players.player_count()))?;
        log::info!("{id} joined as {}", spirit.name);
        Ok(id)
    }

    /// Drop every participant.
    pub fn reset(&mut self) {
        self.players.clear();
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        self.players.player_ids()
    }

    /// Read one player.
    pub fn player(&self, id: PlayerId) -> StoreResult<PlayerView<'_, L>> {
        let record = self.players.get(id).ok_or(StoreError::UnknownPlayer(id))?;
        Ok(PlayerView::new(id, record, &self.lookup))
    }

    /// Operate on one player.
    pub fn player_mut(&mut self, id: PlayerId) -> StoreResult<PlayerHandle<'_, L, N>> {
        let record = self
            .players
            .get_mut(id)
            .ok_or(StoreError::UnknownPlayer(id))?;
        Ok(PlayerHandle::new(id, record, &self.lookup, &mut self.sink))
    }

    /// Read every player, in seat order.
    pub fn players(&self) -> impl Iterator<Item = PlayerView<'_, L>> {
        self.players
            .iter()
            .map(|(id, record)| PlayerView::new(id, record, &self.lookup))
    }

    /// End-of-turn cleanup for every player.
    ///
    /// Cards in play go to the end of the discard, used marks are cleared,
    /// and the per-turn energy and income flags reset.
    pub fn clean_up(&mut self) {
        for (id, record) in self.players.iter_mut() {
            let discarded = record.zones.move_all(Zone::Play, Zone::Discard);
            record.ledger.end_turn();
            log::debug!("{id}: cleanup discarded {discarded} cards");
        }
        log::info!("cleanup done for {} players", self.players.player_count());
    }

    #[must_use]
    pub fn lookup(&self) -> &L {
        &self.lookup
    }

    #[must_use]
    pub fn sink(&self) -> &N {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut N {
        &mut self.sink
    }

    /// Capture every player record.
    #[must_use]
    pub fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            players: self.players.clone(),
        }
    }

    /// Replace every player record with a snapshot's.
    ///
    /// Rejects snapshots where a card sits in two zones, a used card is out
    /// of play, or a disk track does not match its totals; the store is left
    /// unchanged in that case.
    pub fn restore(&mut self, snapshot: StoreSnapshot) -> StoreResult<()> {
        if snapshot.players.player_count() > MAX_PLAYERS {
            return Err(StoreError::TooManyPlayers(snapshot.players.player_count()));
        }
        if let Some((id, _)) = snapshot.players.iter().find(|(_, r)| !r.is_consistent()) {
            return Err(StoreError::CorruptSnapshot(id));
        }
        self.players = snapshot.players;
        log::info!("restored {} players", self.players.player_count());
        Ok(())
    }
}

/// Saved player list.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreSnapshot {
    pub players: PlayerMap<PlayerRecord>,
}

impl StoreSnapshot {
    pub fn to_json(&self) -> StoreResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> StoreResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_bytes(&self) -> StoreResult<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    pub fn from_bytes(bytes: &[u8]) -> StoreResult<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}
