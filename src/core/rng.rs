//! Deterministic random number generation for dealing and self-play.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical sequence
//! - **Per-game streams**: Each game of a run is seeded from its number
//! - **Context streams**: Independent sequences for the deal and each seat
//! - **Serializable**: O(1) state capture and restore, used to replay deals
//!
//! ## Self-play Usage
//!
//! ```
//! use big2::core::GameRng;
//!
//! // One stream per game, keyed by the game's position in the run
//! let game = GameRng::for_game(42, 7);
//!
//! // Separate streams for the deal and for each player's decisions
//! let mut deal = game.for_context("deal");
//! let mut seat0 = game.for_context("seat0");
//! assert_ne!(deal.gen_range(0..1000), seat0.gen_range(0..1000));
//! ```

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Deterministic RNG built on ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// RNG for the `game_number`-th game of a self-play run.
    ///
    /// The seed is `base_seed + game_number`, so a run is reproducible
    /// whichever worker thread ends up playing the game.
    #[must_use]
    pub fn for_game(base_seed: u64, game_number: u64) -> Self {
        Self::new(base_seed.wrapping_add(game_number))
    }

    /// Independent stream for a named context.
    ///
    /// The same context always produces the same stream from the same seed,
    /// on every platform and toolchain.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        Self::new(
            self.seed
                .wrapping_add(context_hash(context).wrapping_mul(0x9E37_79B9_7F4A_7C15)),
        )
    }

    /// The seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform integer in `range`.
    pub fn gen_range(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }

    /// Uniform pick from `slice`, `None` if it is empty.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        slice.choose(&mut self.inner)
    }

    /// Capture the stream position.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Resume a stream captured by [`state`](Self::state).
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

/// 64-bit FNV-1a over the context's bytes.
const fn context_hash(context: &str) -> u64 {
    let bytes = context.as_bytes();
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    let mut i = 0;
    while i < bytes.len() {
        hash ^= bytes[i] as u64;
        hash = hash.wrapping_mul(0x0100_0000_01b3);
        i += 1;
    }
    hash
}

/// Serializable RNG state.
///
/// Uses the ChaCha8 word position, so capture is O(1) however far the
/// stream has advanced.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameRngState {
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}
