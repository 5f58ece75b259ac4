//! Core building blocks: players, configuration, errors, notifications, RNG.
//!
//! Nothing here knows about zones or the store; the other modules are built
//! on top of these types.

pub mod config;
pub mod error;
pub mod notify;
pub mod player;
pub mod rng;

pub use config::{GameData, PanelCell, PanelTemplate, SpiritDefinition};
pub use error::{StoreError, StoreResult};
pub use notify::{MessageLog, NotificationSink};
pub use player::{PlayerId, PlayerMap, MAX_PLAYERS};
pub use rng::{GameRng, GameRngState};
