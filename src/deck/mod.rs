//! Shared power decks and the pool of removed cards.
//!
//! Players draw minor and major powers into their picking buffer, keep one,
//! and send the rest away. Forgotten cards and rejected picks land in the
//! deck's shared discard; when a draw pile runs dry, the discarded cards of
//! that kind are shuffled back in.

use serde::{Deserialize, Serialize};

use crate::cards::{CardCategory, CardKey};
use crate::core::config::GameData;
use crate::core::rng::{GameRng, GameRngState};

/// Receiver for cards removed from a player's zones for good.
pub trait ForgottenPool {
    fn forget(&mut self, card: CardKey);
}

impl ForgottenPool for Vec<CardKey> {
    fn forget(&mut self, card: CardKey) {
        self.push(card);
    }
}

impl<P: ForgottenPool + ?Sized> ForgottenPool for &mut P {
    fn forget(&mut self, card: CardKey) {
        (**self).forget(card);
    }
}

/// Which shared deck to draw from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PowerKind {
    Minor,
    Major,
}

impl PowerKind {
    fn matches(self, card: &CardKey) -> bool {
        matches!(
            (self, card.category()),
            (PowerKind::Minor, CardCategory::Minor) | (PowerKind::Major, CardCategory::Major)
        )
    }
}

/// Saved deck contents and RNG position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PowerDeckState {
    pub minor: Vec<CardKey>,
    pub major: Vec<CardKey>,
    pub discard: Vec<CardKey>,
    pub rng: GameRngState,
}

/// Minor and major draw piles (top = end of vec) with a shared discard.
#[derive(Clone, Debug)]
pub struct PowerDeck {
    minor: Vec<CardKey>,
    major: Vec<CardKey>,
    discard: Vec<CardKey>,
    rng: GameRng,
}

impl PowerDeck {
    /// Build shuffled piles holding every minor and major power of `data`.
    #[must_use]
    pub fn new(data: &GameData, seed: u64) -> Self {
        let mut rng = GameRng::new(seed);
        let mut minor: Vec<CardKey> = (0..data.minor.len()).map(CardKey::minor).collect();
        let mut major: Vec<CardKey> = (0..data.major.len()).map(CardKey::major).collect();
        rng.shuffle(&mut minor);
        rng.shuffle(&mut major);
        Self {
            minor,
            major,
            discard: Vec::new(),
            rng,
        }
    }

    fn pile_mut(&mut self, kind: PowerKind) -> &mut Vec<CardKey> {
        match kind {
            PowerKind::Minor => &mut self.minor,
            PowerKind::Major => &mut self.major,
        }
    }

    /// Cards left in a draw pile.
    #[must_use]
    pub fn remaining(&self, kind: PowerKind) -> usize {
        match kind {
            PowerKind::Minor => self.minor.len(),
            PowerKind::Major => self.major.len(),
        }
    }

    /// The shared discard, oldest first.
    #[must_use]
    pub fn discard_pile(&self) -> &[CardKey] {
        &self.discard
    }

    /// Put a card on the shared discard.
    pub fn discard(&mut self, card: CardKey) {
        self.discard.push(card);
    }

    /// Draw up to `count` cards of one kind.
    ///
    /// An empty pile is refilled from the discarded cards of the same kind.
    /// Returns fewer cards only when both are exhausted.
    pub fn draw(&mut self, kind: PowerKind, count: usize) -> Vec<CardKey> {
        let mut drawn = Vec::with_capacity(count);
        while drawn.len() < count {
            if self.remaining(kind) == 0 && !self.reshuffle(kind) {
                log::warn!("{kind:?} deck exhausted after {} cards", drawn.len());
                break;
            }
            if let Some(card) = self.pile_mut(kind).pop() {
                drawn.push(card);
            }
        }
        drawn
    }

    /// Shuffle discarded cards of `kind` back into its pile.
    fn reshuffle(&mut self, kind: PowerKind) -> bool {
        let (returned, kept): (Vec<_>, Vec<_>) =
            self.discard.drain(..).partition(|c| kind.matches(c));
        self.discard = kept;
        if returned.is_empty() {
            return false;
        }
        log::debug!("reshuffling {} {kind:?} cards", returned.len());
        let mut pile = returned;
        self.rng.shuffle(&mut pile);
        *self.pile_mut(kind) = pile;
        true
    }

    #[must_use]
    pub fn state(&self) -> PowerDeckState {
        PowerDeckState {
            minor: self.minor.clone(),
            major: self.major.clone(),
            discard: self.discard.clone(),
            rng: self.rng.state(),
        }
    }

    #[must_use]
    pub fn from_state(state: &PowerDeckState) -> Self {
        Self {
            minor: state.minor.clone(),
            major: state.major.clone(),
            discard: state.discard.clone(),
            rng: GameRng::from_state(&state.rng),
        }
    }
}

impl ForgottenPool for PowerDeck {
    fn forget(&mut self, card: CardKey) {
        self.discard(card);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{PowerCard, Speed};

    fn data(minors: usize, majors: usize) -> GameData {
        let mut data = GameData::new();
        for i in 0..minors {
            data = data.with_minor(PowerCard::new(format!("Minor {i}"), 0, Speed::Fast));
        }
        for i in 0..majors {
            data = data.with_major(PowerCard::new(format!("Major {i}"), 4, Speed::Slow));
        }
        data
    }

    #[test]
    fn test_new_holds_every_card() {
        let deck = PowerDeck::new(&data(10, 4), 42);

        assert_eq!(deck.remaining(PowerKind::Minor), 10);
        assert_eq!(deck.remaining(PowerKind::Major), 4);
        assert!(deck.discard_pile().is_empty());
    }

    #[test]
    fn test_draw_is_deterministic() {
        let mut a = PowerDeck::new(&data(20, 0), 7);
        let mut b = PowerDeck::new(&data(20, 0), 7);

        assert_eq!(a.draw(PowerKind::Minor, 4), b.draw(PowerKind::Minor, 4));
        assert_eq!(a.remaining(PowerKind::Minor), 16);
    }

    #[test]
    fn test_draw_only_returns_requested_kind() {
        let mut deck = PowerDeck::new(&data(5, 5), 1);
        let drawn = deck.draw(PowerKind::Major, 3);

        assert_eq!(drawn.len(), 3);
        assert!(drawn.iter().all(|c| c.category() == CardCategory::Major));
    }

    #[test]
    fn test_reshuffle_discard_when_empty() {
        let mut deck = PowerDeck::new(&data(2, 1), 3);
        let first = deck.draw(PowerKind::Minor, 2);
        for card in first {
            deck.forget(card);
        }
        deck.discard(CardKey::major(0));

        let again = deck.draw(PowerKind::Minor, 2);
        assert_eq!(again.len(), 2);
        assert_eq!(deck.discard_pile(), &[CardKey::major(0)]);
    }

    #[test]
    fn test_draw_exhausted() {
        let mut deck = PowerDeck::new(&data(1, 0), 3);

        assert_eq!(deck.draw(PowerKind::Minor, 4).len(), 1);
        assert!(deck.draw(PowerKind::Minor, 1).is_empty());
    }

    #[test]
    fn test_state_round_trip_keeps_draw_order() {
        let mut deck = PowerDeck::new(&data(12, 0), 11);
        deck.draw(PowerKind::Minor, 3);

        let mut restored = PowerDeck::from_state(&deck.state());
        assert_eq!(
            deck.draw(PowerKind::Minor, 5),
            restored.draw(PowerKind::Minor, 5)
        );
    }

    #[test]
    fn test_vec_pool() {
        let mut pool: Vec<CardKey> = Vec::new();
        pool.forget(CardKey::minor(3));
        assert_eq!(pool, vec![CardKey::minor(3)]);
    }
}
