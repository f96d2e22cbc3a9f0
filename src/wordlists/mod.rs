//! Word lists for the puzzle tiers
//!
//! Provides embedded word lists compiled into the binary, plus a
//! [`WordSource`] that hands each difficulty its list.

mod embedded;
pub mod loader;

use crate::core::{Difficulty, HARD_MIN_LEN};
use anyhow::{Context, Result};
use std::path::Path;

pub use embedded::{EASY, EASY_COUNT, LONG, LONG_COUNT, MEDIUM, MEDIUM_COUNT};

/// Immutable per-tier word lists for a session
///
/// `hard` only ever contains words of at least [`HARD_MIN_LEN`] letters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordSource {
    easy: Vec<String>,
    medium: Vec<String>,
    hard: Vec<String>,
}

impl WordSource {
    /// Build from raw lists; the hard tier is filtered from `long`
    pub fn new<S: AsRef<str>>(easy: &[S], medium: &[S], long: &[S]) -> Self {
        let hard = loader::normalize_words(long)
            .into_iter()
            .filter(|w| w.chars().count() >= HARD_MIN_LEN)
            .collect();

        Self {
            easy: loader::normalize_words(easy),
            medium: loader::normalize_words(medium),
            hard,
        }
    }

    /// Lists compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(EASY, MEDIUM, LONG)
    }

    /// Load `easy.txt`, `medium.txt` and `long.txt` from a directory
    ///
    /// # Errors
    ///
    /// Returns an error if any of the three files cannot be read.
    pub fn from_dir(dir: &Path) -> Result<Self> {
        let read = |name: &str| {
            let path = dir.join(name);
            loader::load_from_file(&path)
                .with_context(|| format!("failed to read word list: {}", path.display()))
        };

        Ok(Self::new(
            &read("easy.txt")?,
            &read("medium.txt")?,
            &read("long.txt")?,
        ))
    }

    #[must_use]
    pub fn list(&self, difficulty: Difficulty) -> &[String] {
        match difficulty {
            Difficulty::Easy => &self.easy,
            Difficulty::Medium => &self.medium,
            Difficulty::Hard => &self.hard,
        }
    }

    /// Case-insensitive membership in any tier's list
    #[must_use]
    pub fn is_valid_word(&self, word: &str) -> bool {
        let word = word.trim().to_lowercase();
        Difficulty::ALL
            .iter()
            .any(|&d| self.list(d).iter().any(|w| *w == word))
    }
}
