//! # spirit-tracker
//!
//! Per-player card and resource tracking for a cooperative spirit card game
//! played around a shared table.
//!
//! ## Design Principles
//!
//! 1. **Explicit Players**: Every operation is called on a `PlayerHandle`
//!    obtained for a specific `PlayerId`. There is no selected player.
//!
//! 2. **Silent No-ops**: Moving a card that is not where the caller expected
//!    changes nothing and reports `false`. Only the energy guard, unknown
//!    identifiers, and decoding failures are errors.
//!
//! 3. **Plain Data**: Player records hold no references and serialize as-is,
//!    to JSON or compact binary.
//!
//! ## Modules
//!
//! - `core`: Players, game data, errors, notifications, RNG
//! - `cards`: Card keys, definitions, elements, lookup
//! - `zones`: Ordered zones and card movement
//! - `resources`: Energy, elements, presence disk track
//! - `deck`: Shared minor/major power decks and forgotten cards
//! - `store`: `PlayerCardStore` and its player handles

pub mod cards;
pub mod core;
pub mod deck;
pub mod resources;
pub mod store;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{
    GameData, GameRng, GameRngState, MessageLog, NotificationSink, PanelCell, PanelTemplate,
    PlayerId, PlayerMap, SpiritDefinition, StoreError, StoreResult,
};

pub use crate::cards::{
    CardCategory, CardKey, CardLookup, CardRegistry, Element, ElementCounts, PowerCard, Speed,
};

pub use crate::zones::{PositionHint, Zone, ZoneSet};

pub use crate::resources::{DiskCell, DiskRow, DiskToggle, DiskTrack, ResourceLedger, ResourcePanel};

pub use crate::deck::{ForgottenPool, PowerDeck, PowerDeckState, PowerKind};

pub use crate::store::{
    AspectMode, PlayerCardStore, PlayerHandle, PlayerRecord, PlayerView, StoreSnapshot,
};
