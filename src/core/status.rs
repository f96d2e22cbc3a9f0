//! Per-letter feedback for a single guess
//!
//! A [`Feedback`] holds one [`LetterStatus`] per guessed character:
//! - Absent (letter not available in the target)
//! - Present (letter in the target, wrong position)
//! - Correct (letter in the correct position)

use std::fmt;

/// Status of one guessed letter
///
/// Variants are declared weakest first so the derived ordering is
/// `Correct > Present > Absent`, which is what keyboard aggregation relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterStatus {
    Absent,
    Present,
    Correct,
}

impl LetterStatus {
    /// Emoji square used in shareable output
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }

    /// Single-character code (`G`, `Y`, `-`)
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
        }
    }
}

/// Letter statuses for one guess, in guess order
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Feedback(Vec<LetterStatus>);

impl Feedback {
    #[must_use]
    pub const fn new(statuses: Vec<LetterStatus>) -> Self {
        Self(statuses)
    }

    #[inline]
    #[must_use]
    pub fn statuses(&self) -> &[LetterStatus] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when every position is correct
    ///
    /// An empty feedback never counts as solved.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&s| s == LetterStatus::Correct)
    }

    #[must_use]
    pub fn count(&self, status: LetterStatus) -> usize {
        self.0.iter().filter(|&&s| s == status).count()
    }

    /// Convert to an emoji string like "🟩⬜🟩"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|s| s.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for status in &self.0 {
            write!(f, "{}", status.code())?;
        }
        Ok(())
    }
}

impl From<Vec<LetterStatus>> for Feedback {
    fn from(statuses: Vec<LetterStatus>) -> Self {
        Self(statuses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use LetterStatus::{Absent, Correct, Present};

    #[test]
    fn status_ordering_by_strength() {
        assert!(Correct > Present);
        assert!(Present > Absent);
        assert_eq!([Present, Correct, Absent].iter().max(), Some(&Correct));
    }

    #[test]
    fn feedback_solved_only_when_all_correct() {
        assert!(Feedback::new(vec![Correct, Correct]).is_solved());
        assert!(!Feedback::new(vec![Correct, Present]).is_solved());
        assert!(!Feedback::default().is_solved());
    }

    #[test]
    fn feedback_counts() {
        let feedback = Feedback::new(vec![Correct, Absent, Present, Absent]);
        assert_eq!(feedback.count(Correct), 1);
        assert_eq!(feedback.count(Present), 1);
        assert_eq!(feedback.count(Absent), 2);
    }

    #[test]
    fn feedback_display_and_emoji() {
        let feedback = Feedback::new(vec![Correct, Absent, Present]);
        assert_eq!(feedback.to_string(), "G-Y");
        assert_eq!(feedback.to_emoji(), "🟩⬜🟨");
        assert_eq!(Feedback::default().to_string(), "");
    }
}
