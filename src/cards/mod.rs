//! Card system: identifiers, definitions, elements, and lookup.
//!
//! ## Key Types
//!
//! - `CardKey`: Opaque card identifier (`unique0-1`, `minor-12`, ...)
//! - `PowerCard`: Static card data (cost, speed, elements)
//! - `Element` / `ElementCounts`: Elemental tags and counters
//! - `CardLookup`: Read-only key to definition oracle
//! - `CardRegistry`: In-memory `CardLookup` built from `GameData`

pub mod definition;
pub mod element;
pub mod key;
pub mod registry;

pub use definition::{PowerCard, Speed};
pub use element::{Element, ElementCounts};
pub use key::{CardCategory, CardKey};
pub use registry::{CardLookup, CardRegistry};
