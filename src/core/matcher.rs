//! Guess evaluation against a hidden target word
//!
//! Implements Wordle's feedback rules for words of any length, including
//! correct handling of repeated letters.

use super::status::{Feedback, LetterStatus};
use rustc_hash::FxHashMap;
use thiserror::Error;

/// Errors returned when a guess cannot be evaluated
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    /// Guess and target differ in length; comparison is never truncated
    #[error("guess has {guess_len} letters but the target has {target_len}")]
    LengthMismatch { guess_len: usize, target_len: usize },

    #[error("guess is empty")]
    EmptyGuess,

    #[error("no puzzle round is active")]
    NoActiveRound,
}

/// Calculate per-letter feedback for `guess` against `target`
///
/// Comparison is case-insensitive. Mismatched lengths are rejected with
/// [`GuessError::LengthMismatch`]. An empty guess against an empty target
/// produces empty feedback.
///
/// # Algorithm
/// 1. Count every letter of the target
/// 2. First pass: mark exact position matches correct and remove them from the pool
/// 3. Second pass: mark remaining letters present while the pool still holds them
///
/// # Errors
/// Returns [`GuessError::LengthMismatch`] when the lengths differ.
///
/// # Examples
/// ```
/// use word_scramble::core::{evaluate, LetterStatus::*};
///
/// let feedback = evaluate("cot", "CAT").unwrap();
/// assert_eq!(feedback.statuses(), &[Correct, Absent, Correct]);
/// ```
pub fn evaluate(guess: &str, target: &str) -> Result<Feedback, GuessError> {
    let guess: Vec<char> = guess.to_lowercase().chars().collect();
    let target: Vec<char> = target.to_lowercase().chars().collect();

    if guess.len() != target.len() {
        return Err(GuessError::LengthMismatch {
            guess_len: guess.len(),
            target_len: target.len(),
        });
    }

    let mut available = letter_counts(&target);
    let mut result = vec![LetterStatus::Absent; guess.len()];
    let mut consumed = vec![false; guess.len()];

    // First pass: exact matches
    for (i, (&g, &t)) in guess.iter().zip(&target).enumerate() {
        if g == t {
            result[i] = LetterStatus::Correct;
            consumed[i] = true;
            if let Some(count) = available.get_mut(&g) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: present letters from what is left
    for (i, &g) in guess.iter().enumerate() {
        if consumed[i] {
            continue;
        }
        if let Some(count) = available.get_mut(&g)
            && *count > 0
        {
            result[i] = LetterStatus::Present;
            *count -= 1;
        }
    }

    Ok(Feedback::new(result))
}

fn letter_counts(letters: &[char]) -> FxHashMap<char, usize> {
    let mut counts = FxHashMap::default();
    for &ch in letters {
        *counts.entry(ch).or_insert(0) += 1;
    }
    counts
}
