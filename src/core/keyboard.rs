//! Keyboard state aggregation
//!
//! Folds the feedback of every guess in a round into one best-known status
//! per letter. A letter's status only ever strengthens, so the result does
//! not depend on the order guesses are folded in.

use super::status::LetterStatus;
use rustc_hash::FxHashMap;

/// Strongest observed status per letter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardState {
    keys: FxHashMap<char, LetterStatus>,
}

impl KeyboardState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one observation, keeping it only if strictly stronger than what is known
    ///
    /// Returns true when the recorded status changed.
    pub fn record(&mut self, letter: char, status: LetterStatus) -> bool {
        let letter = letter.to_lowercase().next().unwrap_or(letter);
        match self.keys.get(&letter) {
            Some(&known) if known >= status => false,
            _ => {
                self.keys.insert(letter, status);
                true
            }
        }
    }

    /// Fold one guess and its statuses into the state
    ///
    /// Positions beyond the shorter of the two are ignored.
    pub fn apply(&mut self, guess: &str, statuses: &[LetterStatus]) {
        for (letter, &status) in guess.chars().zip(statuses) {
            self.record(letter, status);
        }
    }

    /// Combine with another state using the same strongest-wins rule
    pub fn merge(&mut self, other: &Self) {
        for (&letter, &status) in &other.keys {
            self.record(letter, status);
        }
    }

    /// Status for a letter, if it has been guessed this round
    #[must_use]
    pub fn status(&self, letter: char) -> Option<LetterStatus> {
        let letter = letter.to_lowercase().next().unwrap_or(letter);
        self.keys.get(&letter).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn clear(&mut self) {
        self.keys.clear();
    }

    /// Letters and statuses in alphabetical order
    #[must_use]
    pub fn sorted(&self) -> Vec<(char, LetterStatus)> {
        let mut entries: Vec<_> = self.keys.iter().map(|(&k, &v)| (k, v)).collect();
        entries.sort_unstable_by_key(|&(k, _)| k);
        entries
    }
}

/// Build a keyboard state from a sequence of guesses and their statuses
pub fn aggregate<'a, I, S>(guesses: I) -> KeyboardState
where
    I: IntoIterator<Item = (&'a str, S)>,
    S: AsRef<[LetterStatus]>,
{
    let mut state = KeyboardState::new();
    for (guess, statuses) in guesses {
        state.apply(guess, statuses.as_ref());
    }
    state
}
