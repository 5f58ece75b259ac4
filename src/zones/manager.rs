//! Per-player card zones.
//!
//! A `ZoneSet` holds the four zones a card can sit in (hand, discard, play,
//! picking) plus the `used` marker list over play. It supports:
//! - Moving a card between two zones, only if it is where the caller says
//! - Position hints for manual reordering
//! - The display views (used cards first, newest picks first)
//!
//! A card key is in at most one zone at a time, and every used card is in
//! play. Each method here keeps both properties.

use serde::{Deserialize, Serialize};

use super::ordering::{change_position, remove_card, PositionHint};
use crate::cards::CardKey;

/// Zone a card can sit in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    Hand,
    Discard,
    Play,
    /// Cards offered for selection before they go to hand or away.
    Picking,
}

impl Zone {
    pub const ALL: [Zone; 4] = [Zone::Hand, Zone::Discard, Zone::Play, Zone::Picking];
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}

/// Ordered zones of one player.
///
/// ## Usage
///
/// ```
/// use spirit_tracker::cards::CardKey;
/// use spirit_tracker::zones::{Zone, ZoneSet};
///
/// let mut zones = ZoneSet::with_hand([CardKey::unique(0, 0), CardKey::unique(0, 1)]);
///
/// assert!(zones.move_card(&CardKey::unique(0, 0), Zone::Hand, Zone::Play, None));
/// assert_eq!(zones.zone_of(&CardKey::unique(0, 0)), Some(Zone::Play));
///
/// // Not in hand any more: no-op
/// assert!(!zones.move_card(&CardKey::unique(0, 0), Zone::Hand, Zone::Discard, None));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneSet {
    pub(crate) hand: Vec<CardKey>,
    pub(crate) discard: Vec<CardKey>,
    pub(crate) play: Vec<CardKey>,
    /// Cards in play already resolved this turn, in marking order.
    pub(crate) used: Vec<CardKey>,
    pub(crate) picking: Vec<CardKey>,
}

impl ZoneSet {
    /// Create empty zones.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create zones with a starting hand.
    #[must_use]
    pub fn with_hand(hand: impl IntoIterator<Item = CardKey>) -> Self {
        Self {
            hand: hand.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Cards of a zone, in stored order.
    #[must_use]
    pub fn cards(&self, zone: Zone) -> &[CardKey] {
        match zone {
            Zone::Hand => &self.hand,
            Zone::Discard => &self.discard,
            Zone::Play => &self.play,
            Zone::Picking => &self.picking,
        }
    }

    fn cards_mut(&mut self, zone: Zone) -> &mut Vec<CardKey> {
        match zone {
            Zone::Hand => &mut self.hand,
            Zone::Discard => &mut self.discard,
            Zone::Play => &mut self.play,
            Zone::Picking => &mut self.picking,
        }
    }

    /// Used cards, in marking order.
    #[must_use]
    pub fn used(&self) -> &[CardKey] {
        &self.used
    }

    /// Zone holding `card`, if any.
    #[must_use]
    pub fn zone_of(&self, card: &CardKey) -> Option<Zone> {
        Zone::ALL
            .into_iter()
            .find(|&zone| self.cards(zone).contains(card))
    }

    /// Check if any zone holds `card`.
    #[must_use]
    pub fn contains(&self, card: &CardKey) -> bool {
        self.zone_of(card).is_some()
    }

    #[must_use]
    pub fn is_used(&self, card: &CardKey) -> bool {
        self.used.contains(card)
    }

    /// Add a card that is in no zone yet.
    ///
    /// Returns false (no-op) if the card already sits in one of the zones.
    pub fn insert(&mut self, card: CardKey, zone: Zone) -> bool {
        if self.contains(&card) {
            log::debug!("{card} already in {:?}, not adding to {zone}", self.zone_of(&card));
            return false;
        }
        self.cards_mut(zone).push(card);
        true
    }

    /// Drop a card from a zone without putting it anywhere else.
    pub fn remove(&mut self, card: &CardKey, zone: Zone) -> bool {
        let removed = remove_card(self.cards_mut(zone), card);
        if removed && zone == Zone::Play {
            remove_card(&mut self.used, card);
        }
        removed
    }

    /// Move `card` from `from` to the end of `to`, then apply `hint`.
    ///
    /// Returns false (and changes nothing) if `card` is not in `from`.
    /// Leaving play also clears the used mark.
    pub fn move_card(
        &mut self,
        card: &CardKey,
        from: Zone,
        to: Zone,
        hint: Option<&PositionHint>,
    ) -> bool {
        if !self.remove(card, from) {
            log::debug!("{card} not in {from}, move to {to} skipped");
            return false;
        }
        let dest = self.cards_mut(to);
        dest.push(card.clone());
        if let Some(hint) = hint {
            change_position(dest, card, hint);
        }
        log::debug!("{card}: {from} -> {to}");
        true
    }

    /// Move every card of `from` to the end of `to`, keeping their order.
    ///
    /// Returns the number of cards moved.
    pub fn move_all(&mut self, from: Zone, to: Zone) -> usize {
        if from == to {
            return 0;
        }
        let moved = std::mem::take(self.cards_mut(from));
        if from == Zone::Play {
            self.used.clear();
        }
        let count = moved.len();
        self.cards_mut(to).extend(moved);
        count
    }

    /// Reorder a card within its zone.
    pub fn reposition(&mut self, card: &CardKey, zone: Zone, hint: &PositionHint) -> bool {
        change_position(self.cards_mut(zone), card, hint)
    }

    /// Empty a zone, returning its cards.
    pub fn clear(&mut self, zone: Zone) -> Vec<CardKey> {
        if zone == Zone::Play {
            self.used.clear();
        }
        std::mem::take(self.cards_mut(zone))
    }

    /// Flip the used mark of a card in play.
    ///
    /// Cards outside play are never marked; returns false for them.
    pub fn toggle_used(&mut self, card: &CardKey) -> bool {
        if !self.play.contains(card) {
            log::debug!("{card} is not in play, used mark unchanged");
            return false;
        }
        if !remove_card(&mut self.used, card) {
            self.used.push(card.clone());
        }
        true
    }

    /// Play area as displayed: used cards first, then the rest in play order.
    #[must_use]
    pub fn play_view(&self) -> Vec<CardKey> {
        let unused = self.play.iter().filter(|c| !self.used.contains(c));
        self.used.iter().chain(unused).cloned().collect()
    }

    /// Picking buffer as displayed: most recently added first.
    #[must_use]
    pub fn picking_view(&self) -> Vec<CardKey> {
        self.picking.iter().rev().cloned().collect()
    }
}
