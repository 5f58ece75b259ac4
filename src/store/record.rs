//! Player record: zones, ledger, and display preferences of one participant.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::cards::{CardCategory, CardKey, CardLookup, ElementCounts};
use crate::core::config::SpiritDefinition;
use crate::resources::{DiskTrack, ResourceLedger};
use crate::zones::{Zone, ZoneSet};

/// Card art size for aspect cards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AspectMode {
    #[default]
    #[serde(rename = "1x")]
    Single,
    #[serde(rename = "2x")]
    Double,
}

/// Everything tracked for one participant.
///
/// Plain nested data: serializes without references to the lookup or any
/// other collaborator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRecord {
    /// Index of the chosen spirit in `GameData::spirits`.
    pub spirit: usize,
    pub(crate) zones: ZoneSet,
    pub(crate) ledger: ResourceLedger,
    pub(crate) show_aspect: bool,
    pub(crate) aspect_mode: AspectMode,
}

impl PlayerRecord {
    /// Seed a record from a spirit: its starting cards in hand, its panel in
    /// the ledger.
    #[must_use]
    pub fn new(spirit_index: usize, spirit: &SpiritDefinition) -> Self {
        let hand = (0..spirit.cards.len()).map(|i| CardKey::unique(spirit_index, i));
        Self {
            spirit: spirit_index,
            zones: ZoneSet::with_hand(hand),
            ledger: ResourceLedger::new(spirit.panel.as_ref()),
            show_aspect: true,
            aspect_mode: AspectMode::default(),
        }
    }

    #[must_use]
    pub fn zones(&self) -> &ZoneSet {
        &self.zones
    }

    #[must_use]
    pub fn ledger(&self) -> &ResourceLedger {
        &self.ledger
    }

    #[must_use]
    pub fn hand(&self) -> &[CardKey] {
        self.zones.cards(Zone::Hand)
    }

    #[must_use]
    pub fn discard(&self) -> &[CardKey] {
        self.zones.cards(Zone::Discard)
    }

    /// Play area as displayed: used cards first, then the others.
    #[must_use]
    pub fn play(&self) -> Vec<CardKey> {
        self.zones.play_view()
    }

    /// Play area in the order cards were put there.
    #[must_use]
    pub fn play_order(&self) -> &[CardKey] {
        self.zones.cards(Zone::Play)
    }

    #[must_use]
    pub fn used(&self) -> &[CardKey] {
        self.zones.used()
    }

    /// Picking buffer as displayed: newest first.
    #[must_use]
    pub fn picking(&self) -> Vec<CardKey> {
        self.zones.picking_view()
    }

    #[must_use]
    pub fn is_picking(&self) -> bool {
        !self.zones.cards(Zone::Picking).is_empty()
    }

    /// Category of the first card staged for picking (minor, major, ...).
    #[must_use]
    pub fn picking_category(&self) -> Option<CardCategory> {
        self.zones.cards(Zone::Picking).first().map(CardKey::category)
    }

    #[must_use]
    pub fn energy(&self) -> u32 {
        self.ledger.energy()
    }

    #[must_use]
    pub fn energy_this_turn(&self) -> u32 {
        self.ledger.energy_this_turn()
    }

    #[must_use]
    pub fn permanent_elements(&self) -> &ElementCounts {
        self.ledger.permanent_elements()
    }

    #[must_use]
    pub fn income(&self) -> i32 {
        self.ledger.income()
    }

    #[must_use]
    pub fn total_card_play(&self) -> i32 {
        self.ledger.total_card_play()
    }

    #[must_use]
    pub fn has_take_income(&self) -> bool {
        self.ledger.has_take_income()
    }

    /// Disk track, if the spirit has a panel.
    #[must_use]
    pub fn disk(&self) -> Option<&DiskTrack> {
        self.ledger.panel().track()
    }

    #[must_use]
    pub fn show_aspect(&self) -> bool {
        self.show_aspect
    }

    #[must_use]
    pub fn aspect_mode(&self) -> AspectMode {
        self.aspect_mode
    }

    /// True when nothing is left to play but the discard holds cards.
    #[must_use]
    pub fn can_reclaim(&self) -> bool {
        self.hand().is_empty() && self.play_order().is_empty() && !self.discard().is_empty()
    }

    /// Card plays left this turn, never below zero.
    #[must_use]
    pub fn card_plays_remaining(&self) -> u32 {
        let played = i32::try_from(self.play_order().len()).unwrap_or(i32::MAX);
        u32::try_from(self.total_card_play().saturating_sub(played)).unwrap_or(0)
    }

    /// Elements of every card in play plus the permanent bonuses.
    ///
    /// Cards the lookup does not know contribute nothing.
    #[must_use]
    pub fn elements<L: CardLookup + ?Sized>(&self, lookup: &L) -> ElementCounts {
        let mut counts = ElementCounts::new();
        for key in self.play_order() {
            match lookup.card(key) {
                Some(card) => counts.add(&card.element_counts()),
                None => log::warn!("{key} in play is not in the card lookup"),
            }
        }
        counts.add(self.permanent_elements());
        counts
    }

    /// Hand cards whose cost fits the current energy, in hand order.
    #[must_use]
    pub fn playable_cards<L: CardLookup + ?Sized>(&self, lookup: &L) -> Vec<CardKey> {
        let energy = self.energy();
        self.hand()
            .iter()
            .filter(|key| lookup.card(key).is_some_and(|card| card.cost <= energy))
            .cloned()
            .collect()
    }

    /// Check that no card sits in two zones, that every used card is in
    /// play, and that the resource panel matches its disk track.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let mut seen = FxHashSet::default();
        let unique = Zone::ALL
            .into_iter()
            .flat_map(|zone| self.zones.cards(zone))
            .all(|key| seen.insert(key));
        let mut used_seen = FxHashSet::default();
        let used_ok = self
            .used()
            .iter()
            .all(|key| self.play_order().contains(key) && used_seen.insert(key));
        unique && used_ok && self.ledger.is_consistent()
    }
}
