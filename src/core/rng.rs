//! Deterministic random number generation for board setup.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces the identical board
//! - **Entropy-seeded play**: `from_entropy()` for real games, still replayable
//!   because the drawn seed is kept
//! - **Serializable**: O(1) state capture and restore
//!
//! ## Usage
//!
//! ```
//! use flag_pairs::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//! let picks = rng.sample_distinct(32, 8);
//! assert_eq!(picks.len(), 8);
//!
//! // Same seed, same draw
//! let mut again = GameRng::new(42);
//! assert_eq!(again.sample_distinct(32, 8), picks);
//! ```

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Deterministic RNG used for image selection and shuffling.
///
/// Uses ChaCha8 for speed while keeping uniform, well-mixed output.
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

    /// Create an RNG seeded from OS entropy.
    ///
    /// The seed is drawn once and remembered, so `seed()` can be logged and
    /// the game replayed with `GameRng::new`.
    #[must_use]
    pub fn from_entropy() -> Self {
        let seed = ChaCha8Rng::from_entropy().next_u64();
        Self::new(seed)
    }

    /// The seed this generator started from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Draw `amount` distinct values from `0..length`, uniformly and without
    /// replacement, in draw order.
    ///
    /// Callers must ensure `amount <= length`.
    pub fn sample_distinct(&mut self, length: usize, amount: usize) -> Vec<usize> {
        rand::seq::index::sample(&mut self.inner, length, amount).into_vec()
    }

    /// Shuffle a slice in place (Fisher-Yates).
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
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
/// Uses ChaCha8 word position, so capture is O(1) no matter how many values
/// have been drawn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}
