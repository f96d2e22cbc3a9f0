//! Check command
//!
//! Evaluates one guess against a target word.

use crate::core::{Feedback, GuessError, evaluate};
use crate::wordlists::WordSource;

/// Result of checking a guess
pub struct CheckResult {
    pub guess: String,
    pub target: String,
    pub feedback: Feedback,
    /// Whether the guess appears in any tier's list
    pub in_word_list: bool,
}

/// Evaluate `guess` against `target`, noting whether `source` knows the guess
///
/// # Errors
///
/// Returns an error if the guess is empty or its length differs from the target.
pub fn check_guess(
    guess: &str,
    target: &str,
    source: &WordSource,
) -> Result<CheckResult, GuessError> {
    let guess = guess.trim().to_lowercase();
    if guess.is_empty() {
        return Err(GuessError::EmptyGuess);
    }
    let target = target.trim().to_lowercase();
    let feedback = evaluate(&guess, &target)?;
    let in_word_list = source.is_valid_word(&guess);

    Ok(CheckResult {
        guess,
        target,
        feedback,
        in_word_list,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterStatus::{Absent, Correct};

    fn source() -> WordSource {
        WordSource::new(&["cat", "dog"], &["garden"], &["language"])
    }

    #[test]
    fn check_normalizes_input() {
        let result = check_guess(" COT ", "Cat", &source()).unwrap();
        assert_eq!(result.guess, "cot");
        assert_eq!(result.target, "cat");
        assert_eq!(result.feedback.statuses(), &[Correct, Absent, Correct]);
    }

    #[test]
    fn check_rejects_empty_and_mismatched() {
        assert!(matches!(
            check_guess("", "cat", &source()),
            Err(GuessError::EmptyGuess)
        ));
        assert!(matches!(
            check_guess("cats", "cat", &source()),
            Err(GuessError::LengthMismatch { .. })
        ));
    }

    #[test]
    fn check_flags_words_outside_lists() {
        assert!(check_guess("DOG", "cat", &source()).unwrap().in_word_list);
        assert!(!check_guess("cot", "cat", &source()).unwrap().in_word_list);
    }
}
