//! Word scrambling
//!
//! Fisher-Yates shuffles over a word's letters. Hard puzzles run the shuffle
//! several times; repeated uniform shuffles are still uniform, so this only
//! changes how the puzzle feels, not the distribution.

use crate::core::Difficulty;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of randomness for shuffling
pub trait RandomSource {
    /// Uniform index in `0..bound`; `bound` is always at least 1
    fn index_below(&mut self, bound: usize) -> usize;
}

/// Standard RNG backed source
pub struct StdRandom(StdRng);

impl StdRandom {
    /// Seeded from the operating system, so every session differs
    #[must_use]
    pub fn from_entropy() -> Self {
        Self(StdRng::from_os_rng())
    }

    /// Reproducible source for tests and benchmarks
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl RandomSource for StdRandom {
    fn index_below(&mut self, bound: usize) -> usize {
        self.0.random_range(0..bound)
    }
}

/// Shuffle `letters` in place with one Fisher-Yates pass
pub fn shuffle<T, R: RandomSource + ?Sized>(letters: &mut [T], rng: &mut R) {
    for i in (1..letters.len()).rev() {
        let j = rng.index_below(i + 1);
        letters.swap(i, j);
    }
}

/// Scramble a word for the given difficulty
///
/// Returns a permutation of the word's characters. Words with fewer than two
/// characters come back unchanged. The result can equal the input; callers
/// that need a visibly different puzzle can use [`scramble_distinct`].
///
/// # Examples
/// ```
/// use word_scramble::core::Difficulty;
/// use word_scramble::puzzle::{StdRandom, scramble};
///
/// let mut rng = StdRandom::seeded(7);
/// let scrambled = scramble("planet", Difficulty::Medium, &mut rng);
///
/// let mut a: Vec<char> = scrambled.chars().collect();
/// let mut b: Vec<char> = "planet".chars().collect();
/// a.sort_unstable();
/// b.sort_unstable();
/// assert_eq!(a, b);
/// ```
pub fn scramble<R: RandomSource + ?Sized>(
    word: &str,
    difficulty: Difficulty,
    rng: &mut R,
) -> String {
    let mut letters: Vec<char> = word.chars().collect();
    if letters.len() < 2 {
        return word.to_string();
    }

    for _ in 0..difficulty.shuffle_passes() {
        shuffle(&mut letters, rng);
    }

    letters.into_iter().collect()
}

/// Scramble, retrying a few times if the result matches the original order
///
/// Words whose letters are all the same (or shorter than two) can never
/// differ and are returned as the last attempt.
pub fn scramble_distinct<R: RandomSource + ?Sized>(
    word: &str,
    difficulty: Difficulty,
    rng: &mut R,
) -> String {
    const MAX_ATTEMPTS: usize = 8;

    let mut scrambled = scramble(word, difficulty, rng);
    for _ in 1..MAX_ATTEMPTS {
        if scrambled != word {
            break;
        }
        scrambled = scramble(word, difficulty, rng);
    }
    scrambled
}
