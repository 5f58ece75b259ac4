//! Zone system for card locations.
//!
//! Each player owns four ordered zones (hand, discard, play, picking) and a
//! `used` marker list over play. Order is meaningful: it is the player's
//! manual arrangement for play timing and reclaim priority.
//!
//! ## Key Types
//!
//! - `Zone`: Zone selector
//! - `ZoneSet`: One player's zones and card movement
//! - `PositionHint`: Drop position relative to another card

pub mod manager;
pub mod ordering;

pub use manager::{Zone, ZoneSet};
pub use ordering::{change_position, insert_after, insert_before, remove_card, PositionHint};
