//! Player-scoped access to the store.
//!
//! `PlayerView` reads one player's record; `PlayerHandle` also mutates it.
//! Every operation names its player through the handle it is called on, so
//! there is no "current player" to switch between calls.

use std::ops::Deref;

use crate::cards::{CardKey, CardLookup, Element, ElementCounts};
use crate::core::error::{StoreError, StoreResult};
use crate::core::notify::{
    NotificationSink, FORGET_CARD, NOT_ENOUGH_ENERGY, PUT_CARD_IN_DISCARD, RECLAIM_CARDS,
};
use crate::core::PlayerId;
use crate::deck::{ForgottenPool, PowerDeck, PowerKind};
use crate::resources::{DiskRow, DiskToggle};
use crate::zones::{PositionHint, Zone};

use super::record::{AspectMode, PlayerRecord};

/// Read-only view of one player.
///
/// Dereferences to `PlayerRecord` for the plain accessors.
pub struct PlayerView<'a, L: ?Sized> {
    id: PlayerId,
    record: &'a PlayerRecord,
    lookup: &'a L,
}

impl<'a, L: CardLookup + ?Sized> PlayerView<'a, L> {
    pub(crate) fn new(id: PlayerId, record: &'a PlayerRecord, lookup: &'a L) -> Self {
        Self { id, record, lookup }
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[must_use]
    pub fn record(&self) -> &'a PlayerRecord {
        self.record
    }

    /// Elements available for thresholds: cards in play plus permanent ones.
    #[must_use]
    pub fn elements(&self) -> ElementCounts {
        self.record.elements(self.lookup)
    }

    /// Hand cards affordable with the current energy.
    #[must_use]
    pub fn playable_cards(&self) -> Vec<CardKey> {
        self.record.playable_cards(self.lookup)
    }
}

impl<L: ?Sized> Deref for PlayerView<'_, L> {
    type Target = PlayerRecord;

    fn deref(&self) -> &PlayerRecord {
        self.record
    }
}

/// Mutable access to one player.
///
/// Zone moves return `true` if the card moved and `false` if it was not in
/// the expected zone, in which case nothing changes.
pub struct PlayerHandle<'a, L: ?Sized, N: ?Sized> {
    id: PlayerId,
    record: &'a mut PlayerRecord,
    lookup: &'a L,
    sink: &'a mut N,
}

impl<'a, L, N> PlayerHandle<'a, L, N>
where
    L: CardLookup + ?Sized,
    N: NotificationSink + ?Sized,
{
    pub(crate) fn new(
        id: PlayerId,
        record: &'a mut PlayerRecord,
        lookup: &'a L,
        sink: &'a mut N,
    ) -> Self {
        Self {
            id,
            record,
            lookup,
            sink,
        }
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[must_use]
    pub fn record(&self) -> &PlayerRecord {
        &*self.record
    }

    /// Read-only view with the same lookup.
    #[must_use]
    pub fn view(&self) -> PlayerView<'_, L> {
        PlayerView::new(self.id, &*self.record, self.lookup)
    }

    #[must_use]
    pub fn elements(&self) -> ElementCounts {
        self.record.elements(self.lookup)
    }

    #[must_use]
    pub fn playable_cards(&self) -> Vec<CardKey> {
        self.record.playable_cards(self.lookup)
    }

    // === Playing ===

    /// Pay for a hand card and put it into play.
    ///
    /// If the card costs more than the current energy nothing changes, a
    /// "Not enough energy" notification is sent, and `InsufficientEnergy` is
    /// returned. A card that is not in hand is a no-op (`Ok(false)`).
    pub fn play_card(&mut self, card: &CardKey, hint: Option<&PositionHint>) -> StoreResult<bool> {
        if self.record.zones.zone_of(card) != Some(Zone::Hand) {
            log::debug!("{}: {card} not in hand, cannot play", self.id);
            return Ok(false);
        }
        let cost = self.lookup.require(card)?.cost;
        let available = self.record.ledger.energy();
        if !self.record.ledger.spend(cost) {
            log::warn!("{}: {card} costs {cost}, only {available} energy", self.id);
            self.sink.notify(NOT_ENOUGH_ENERGY);
            return Err(StoreError::InsufficientEnergy {
                card: card.clone(),
                cost,
                available,
            });
        }
        Ok(self.record.zones.move_card(card, Zone::Hand, Zone::Play, hint))
    }

    /// Take a card back from play into hand and refund its cost.
    pub fn return_card_from_play(
        &mut self,
        card: &CardKey,
        hint: Option<&PositionHint>,
    ) -> StoreResult<bool> {
        if self.record.zones.zone_of(card) != Some(Zone::Play) {
            return Ok(false);
        }
        let cost = self.lookup.require(card)?.cost;
        self.record.ledger.refund(cost);
        Ok(self.record.zones.move_card(card, Zone::Play, Zone::Hand, hint))
    }

    /// Put a card into play without paying for it.
    ///
    /// Refused if the card already sits in one of this player's zones.
    pub fn add_card_to_play(&mut self, card: CardKey) -> bool {
        self.record.zones.insert(card, Zone::Play)
    }

    /// Flip the "resolved this turn" mark of a card in play.
    pub fn toggle_used(&mut self, card: &CardKey) -> bool {
        self.record.zones.toggle_used(card)
    }

    // === Discarding and forgetting ===

    /// Discard a hand card without playing it.
    pub fn put_card_in_discard(&mut self, card: &CardKey) -> bool {
        self.record.zones.move_card(card, Zone::Hand, Zone::Discard, None)
    }

    /// Discard a card from play.
    pub fn put_from_play_to_discard(&mut self, card: &CardKey) -> bool {
        let moved = self.record.zones.move_card(card, Zone::Play, Zone::Discard, None);
        if moved {
            self.sink.notify(PUT_CARD_IN_DISCARD);
        }
        moved
    }

    /// Remove a hand card from the game, handing it to `pool`.
    pub fn forget_card_from_hand(&mut self, card: &CardKey, pool: &mut impl ForgottenPool) -> bool {
        self.forget_from(card, Zone::Hand, pool)
    }

    /// Remove a discarded card from the game, handing it to `pool`.
    pub fn forget_card_from_discard(
        &mut self,
        card: &CardKey,
        pool: &mut impl ForgottenPool,
    ) -> bool {
        self.forget_from(card, Zone::Discard, pool)
    }

    fn forget_from(&mut self, card: &CardKey, zone: Zone, pool: &mut impl ForgottenPool) -> bool {
        if !self.record.zones.remove(card, zone) {
            return false;
        }
        log::debug!("{}: forgot {card} from {zone}", self.id);
        pool.forget(card.clone());
        self.sink.notify(FORGET_CARD);
        true
    }

    /// Drop a hand card without sending it anywhere.
    pub fn remove_card_from_hand(&mut self, card: &CardKey) -> bool {
        self.record.zones.remove(card, Zone::Hand)
    }

    // === Hand ===

    /// Gain a card into hand.
    ///
    /// Refused if the card already sits in one of this player's zones.
    pub fn take(&mut self, card: CardKey) -> bool {
        self.record.zones.insert(card, Zone::Hand)
    }

    /// Reorder a hand card next to another hand card.
    pub fn change_hand_position(&mut self, card: &CardKey, hint: &PositionHint) -> bool {
        self.record.zones.reposition(card, Zone::Hand, hint)
    }

    /// Return the whole discard to hand, keeping its order.
    ///
    /// Returns the number of cards reclaimed.
    pub fn reclaim(&mut self) -> usize {
        let count = self.record.zones.move_all(Zone::Discard, Zone::Hand);
        log::debug!("{}: reclaimed {count} cards", self.id);
        self.sink.notify(RECLAIM_CARDS);
        count
    }

    /// Return a single discarded card to the end of the hand.
    pub fn reclaim_one_card(&mut self, card: &CardKey) -> bool {
        self.record.zones.move_card(card, Zone::Discard, Zone::Hand, None)
    }

    // === Picking buffer ===

    /// Stage a card that is in none of this player's zones.
    pub fn add_to_picking(&mut self, card: CardKey) -> bool {
        self.record.zones.insert(card, Zone::Picking)
    }

    /// Draw cards from a shared deck straight into the picking buffer.
    ///
    /// Cards this player already holds are sent back to the deck's discard.
    /// Returns the number of cards staged.
    pub fn draw_to_picking(
        &mut self,
        deck: &mut PowerDeck,
        kind: PowerKind,
        count: usize,
    ) -> usize {
        let mut staged = 0;
        for card in deck.draw(kind, count) {
            if self.record.zones.contains(&card) {
                deck.discard(card);
            } else {
                self.record.zones.insert(card, Zone::Picking);
                staged += 1;
            }
        }
        staged
    }

    /// Move a hand card into the picking buffer.
    pub fn put_card_to_picking(&mut self, card: &CardKey) -> bool {
        self.record.zones.move_card(card, Zone::Hand, Zone::Picking, None)
    }

    /// Keep a staged card: picking buffer to hand.
    pub fn take_card_from_picking(&mut self, card: &CardKey) -> bool {
        self.record.zones.move_card(card, Zone::Picking, Zone::Hand, None)
    }

    /// Drop a staged card without sending it anywhere.
    pub fn remove_card_from_picking(&mut self, card: &CardKey) -> bool {
        self.record.zones.remove(card, Zone::Picking)
    }

    /// Empty the picking buffer, returning what it held (oldest first).
    pub fn reset_picking(&mut self) -> Vec<CardKey> {
        self.record.zones.clear(Zone::Picking)
    }

    // === Resources ===

    pub fn add_energy(&mut self) {
        self.record.ledger.add_energy();
    }

    /// Returns false if energy was already zero.
    pub fn reduce_energy(&mut self) -> bool {
        self.record.ledger.reduce_energy()
    }

    pub fn increase_element(&mut self, element: Element) {
        self.record.ledger.increase_element(element);
    }

    /// Returns false if the counter was already zero.
    pub fn decrease_element(&mut self, element: Element) -> bool {
        self.record.ledger.decrease_element(element)
    }

    /// Claim or unclaim a disk slot.
    pub fn disk_click(&mut self, row: DiskRow, position: usize) -> StoreResult<DiskToggle> {
        self.record.ledger.disk_click(row, position)
    }

    /// Collect income. Callers gate on `has_take_income` to avoid collecting
    /// twice in a turn.
    pub fn take_income(&mut self) -> u32 {
        self.record.ledger.take_income()
    }

    // === Display preferences ===

    pub fn set_show_aspect(&mut self, show: bool) {
        self.record.show_aspect = show;
    }

    pub fn set_aspect_mode(&mut self, mode: AspectMode) {
        self.record.aspect_mode = mode;
    }
}

impl<L: ?Sized, N: ?Sized> Deref for PlayerHandle<'_, L, N> {
    type Target = PlayerRecord;

    fn deref(&self) -> &PlayerRecord {
        &*self.record
    }
}
