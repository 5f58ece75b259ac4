//! Card lookup.
//!
//! `CardLookup` is the read-only oracle the store consults for card costs
//! and elements. `CardRegistry` is the in-memory implementation built from
//! the static `GameData` tables.

use rustc_hash::FxHashMap;

use super::definition::PowerCard;
use super::key::CardKey;
use crate::core::config::GameData;
use crate::core::error::{StoreError, StoreResult};

/// Resolves card keys to their static definitions.
pub trait CardLookup {
    /// Get a card definition, or `None` if the key is unknown.
    fn card(&self, key: &CardKey) -> Option<&PowerCard>;

    /// Get a card definition, reporting unknown keys as an error.
    fn require(&self, key: &CardKey) -> StoreResult<&PowerCard> {
        self.card(key)
            .ok_or_else(|| StoreError::UnknownCard(key.clone()))
    }
}

impl<L: CardLookup + ?Sized> CardLookup for &L {
    fn card(&self, key: &CardKey) -> Option<&PowerCard> {
        (**self).card(key)
    }
}

impl<L: CardLookup + ?Sized> CardLookup for std::sync::Arc<L> {
    fn card(&self, key: &CardKey) -> Option<&PowerCard> {
        (**self).card(key)
    }
}

/// Registry of card definitions keyed by `CardKey`.
///
/// ## Example
///
/// ```
/// use spirit_tracker::cards::{CardKey, CardLookup, CardRegistry, PowerCard, Speed};
///
/// let mut registry = CardRegistry::new();
/// registry.register(CardKey::minor(0), PowerCard::new("Rain of Blood", 0, Speed::Slow));
///
/// let found = registry.card(&CardKey::minor(0)).unwrap();
/// assert_eq!(found.name, "Rain of Blood");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardRegistry {
    cards: FxHashMap<CardKey, PowerCard>,
}

impl CardRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register every card of the static tables under its canonical key.
    ///
    /// Spirit `s` contributes `unique{s}-{i}` for each starting card; the
    /// power lists contribute `minor-{i}` and `major-{i}`.
    #[must_use]
    pub fn from_game_data(data: &GameData) -> Self {
        let mut registry = Self::new();
        for (s, spirit) in data.spirits.iter().enumerate() {
            for (i, card) in spirit.cards.iter().enumerate() {
                registry.register(CardKey::unique(s, i), card.clone());
            }
        }
        for (i, card) in data.minor.iter().enumerate() {
            registry.register(CardKey::minor(i), card.clone());
        }
        for (i, card) in data.major.iter().enumerate() {
            registry.register(CardKey::major(i), card.clone());
        }
        log::debug!("registered {} cards", registry.len());
        registry
    }

    /// Register a card definition.
    ///
    /// Replaces and returns any definition already stored under `key`.
    pub fn register(&mut self, key: CardKey, card: PowerCard) -> Option<PowerCard> {
        self.cards.insert(key, card)
    }

    /// Check if a key is registered.
    #[must_use]
    pub fn contains(&self, key: &CardKey) -> bool {
        self.cards.contains_key(key)
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all (key, definition) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&CardKey, &PowerCard)> {
        self.cards.iter()
    }

    /// Find cards matching a predicate.
    pub fn find<F>(&self, predicate: F) -> impl Iterator<Item = (&CardKey, &PowerCard)>
    where
        F: Fn(&PowerCard) -> bool,
    {
        self.cards.iter().filter(move |(_, c)| predicate(c))
    }
}

impl CardLookup for CardRegistry {
    fn card(&self, key: &CardKey) -> Option<&PowerCard> {
        self.cards.get(key)
    }
}
