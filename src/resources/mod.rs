//! Resource tracking: energy, elements, and the presence disk track.

pub mod disk;
pub mod ledger;

pub use disk::{DiskCell, DiskRow, DiskToggle, DiskTrack};
pub use ledger::{ResourceLedger, ResourcePanel};
