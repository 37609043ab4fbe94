//! Pluggable randomness for the computer opponent.
//!
//! Easy difficulty picks uniformly among legal moves. The pick goes through
//! the [`RandomSource`] trait so callers decide where randomness comes from:
//!
//! - [`GameRng`]: seedable ChaCha8 stream, the default for real games
//! - [`ScriptedRng`]: replays a fixed index sequence, for tests
//!
//! ```
//! use rust_othello::core::{GameRng, RandomSource};
//!
//! let mut a = GameRng::new(7);
//! let mut b = GameRng::new(7);
//! assert_eq!(a.next_index(10), b.next_index(10));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Source of uniform indices.
pub trait RandomSource {
    /// Return an index uniformly distributed in `0..upper`.
    ///
    /// `upper` is always at least 1.
    fn next_index(&mut self, upper: usize) -> usize;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_index(&mut self, upper: usize) -> usize {
        (**self).next_index(upper)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn next_index(&mut self, upper: usize) -> usize {
        (**self).next_index(upper)
    }
}

/// Deterministic RNG for move sampling.
///
/// Uses ChaCha8 for speed. The same seed always yields the same sequence,
/// and the position in the stream can be captured and restored.
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
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// Create from an optional seed, falling back to entropy.
    #[must_use]
    pub fn from_seed_opt(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::new)
    }

    /// The seed this stream started from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
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

impl RandomSource for GameRng {
    fn next_index(&mut self, upper: usize) -> usize {
        self.gen_range_usize(0..upper)
    }
}

/// Serializable RNG position.
///
/// ChaCha8's word position makes capture O(1) regardless of how many
/// numbers have been drawn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

/// Replays a fixed list of indices, wrapping around at the end.
///
/// Each scripted value is reduced modulo `upper`, so a script written for a
/// long move list stays valid for shorter ones.
#[derive(Clone, Debug)]
pub struct ScriptedRng {
    script: Vec<usize>,
    cursor: usize,
}

impl ScriptedRng {
    /// Create from a non-empty script.
    #[must_use]
    pub fn new(script: Vec<usize>) -> Self {
        assert!(!script.is_empty(), "ScriptedRng needs at least one value");
        Self { script, cursor: 0 }
    }

    /// Number of indices handed out so far.
    #[must_use]
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedRng {
    fn next_index(&mut self, upper: usize) -> usize {
        let value = self.script[self.cursor % self.script.len()];
        self.cursor += 1;
        value % upper
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.next_index(1000), rng2.next_index(1000));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..10).map(|_| rng1.next_index(1000)).collect();
        let seq2: Vec<_> = (0..10).map(|_| rng2.next_index(1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_next_index_in_range() {
        let mut rng = GameRng::new(9);
        for upper in 1..20 {
            for _ in 0..20 {
                assert!(rng.next_index(upper) < upper);
            }
        }
    }

    #[test]
    fn test_state_restore() {
        let mut rng = GameRng::new(42);
        for _ in 0..100 {
            rng.next_index(1000);
        }

        let state = rng.state();
        let expected: Vec<_> = (0..10).map(|_| rng.next_index(1000)).collect();

        let mut restored = GameRng::from_state(&state);
        let actual: Vec<_> = (0..10).map(|_| restored.next_index(1000)).collect();

        assert_eq!(expected, actual);
        assert_eq!(restored.seed(), 42);
    }

    #[test]
    fn test_state_serde() {
        let state = GameRngState {
            seed: 42,
            word_pos: 12345,
        };

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameRngState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }

    #[test]
    fn test_from_seed_opt() {
        assert_eq!(GameRng::from_seed_opt(Some(5)).seed(), 5);
        // entropy path just has to produce a usable stream
        let mut rng = GameRng::from_seed_opt(None);
        assert!(rng.next_index(4) < 4);
    }

    #[test]
    fn test_scripted_wraps_and_reduces() {
        let mut rng = ScriptedRng::new(vec![0, 5, 2]);

        assert_eq!(rng.next_index(4), 0);
        assert_eq!(rng.next_index(4), 1); // 5 % 4
        assert_eq!(rng.next_index(4), 2);
        assert_eq!(rng.next_index(4), 0); // wrapped
        assert_eq!(rng.draws(), 4);
    }

    #[test]
    fn test_random_source_through_reference() {
        fn draw(mut source: impl RandomSource) -> usize {
            source.next_index(3)
        }

        let mut rng = ScriptedRng::new(vec![2]);
        assert_eq!(draw(&mut rng), 2);
        assert_eq!(rng.draws(), 1);

        let boxed: Box<dyn RandomSource> = Box::new(ScriptedRng::new(vec![1]));
        assert_eq!(draw(boxed), 1);
    }

    #[test]
    #[should_panic(expected = "ScriptedRng needs at least one value")]
    fn test_scripted_empty_panics() {
        let _ = ScriptedRng::new(Vec::new());
    }
}
