//! Deterministic random number generation.
//!
//! - **Deterministic**: Same seed produces identical shuffles
//! - **Serializable**: O(1) state capture and restore, so a saved session
//!   keeps drawing the same cards after reload
//!
//! ```
//! use spirit_tracker::core::GameRng;
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::from_state(&a.state());
//!
//! let mut x = [1, 2, 3, 4, 5, 6];
//! let mut y = x;
//! a.shuffle(&mut x);
//! b.shuffle(&mut y);
//! assert_eq!(x, y);
//! ```

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Deterministic RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Serializable RNG state for checkpointing.
///
/// Uses the ChaCha8 word position, so capture cost does not grow with the
/// number of values drawn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shuffled(rng: &mut GameRng) -> Vec<u32> {
        let mut items: Vec<u32> = (0..20).collect();
        rng.shuffle(&mut items);
        items
    }

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..10 {
            assert_eq!(shuffled(&mut rng1), shuffled(&mut rng2));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        assert_ne!(shuffled(&mut rng1), shuffled(&mut rng2));
    }

    #[test]
    fn test_shuffle_keeps_elements() {
        let mut rng = GameRng::new(7);
        let mut items: Vec<u32> = (0..30).collect();
        rng.shuffle(&mut items);

        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..30).collect::<Vec<_>>());
        assert_ne!(items, sorted);
    }

    #[test]
    fn test_state_restore_continues_sequence() {
        let mut rng = GameRng::new(99);
        for _ in 0..5 {
            shuffled(&mut rng);
        }

        let mut restored = GameRng::from_state(&rng.state());
        for _ in 0..5 {
            assert_eq!(shuffled(&mut rng), shuffled(&mut restored));
        }
    }

    #[test]
    fn test_state_serialization() {
        let rng = GameRng::new(5);
        let json = serde_json::to_string(&rng.state()).unwrap();
        let back: GameRngState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, rng.state());
    }
}
