//! Puzzle progress tracking
//!
//! One [`TierState`] per difficulty: every tracked word with its hint count
//! and solved flag, plus the tier's selection cursor. A word's `solved` flag
//! flips from false to true at most once, which is what keeps scoring
//! idempotent.

use crate::core::Difficulty;
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::{debug, warn};

/// One word tracked within a tier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    word: String,
    hints_used: u32,
    solved: bool,
}

impl WordEntry {
    #[must_use]
    pub fn new(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            hints_used: 0,
            solved: false,
        }
    }

    #[inline]
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    #[inline]
    #[must_use]
    pub const fn hints_used(&self) -> u32 {
        self.hints_used
    }

    #[inline]
    #[must_use]
    pub const fn is_solved(&self) -> bool {
        self.solved
    }

    fn add_hint(&mut self) {
        self.hints_used = self.hints_used.saturating_add(1);
    }

    /// Returns true only on the first call
    fn mark_solved(&mut self) -> bool {
        let first = !self.solved;
        self.solved = true;
        first
    }
}

/// Words and cursor for one difficulty tier
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TierState {
    pub(super) entries: Vec<WordEntry>,
    pub(super) curr_word_index: usize,
}

impl TierState {
    /// Build a tier from a word list
    ///
    /// Words are lowercased; repeated words keep only their first occurrence.
    #[must_use]
    pub fn from_words<S: AsRef<str>>(words: &[S]) -> Self {
        let mut seen = FxHashSet::default();
        let mut entries = Vec::with_capacity(words.len());

        for word in words {
            let word = word.as_ref().trim().to_lowercase();
            if seen.insert(word.clone()) {
                entries.push(WordEntry::new(word));
            } else {
                debug!(%word, "skipping duplicate word in tier list");
            }
        }

        Self {
            entries,
            curr_word_index: 0,
        }
    }

    #[must_use]
    pub fn entries(&self) -> &[WordEntry] {
        &self.entries
    }

    #[must_use]
    pub fn entry(&self, word: &str) -> Option<&WordEntry> {
        let word = word.to_lowercase();
        self.entries.iter().find(|e| e.word == word)
    }

    fn entry_mut(&mut self, word: &str) -> Option<&mut WordEntry> {
        let word = word.to_lowercase();
        self.entries.iter_mut().find(|e| e.word == word)
    }

    /// Index of the next word to serve
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.curr_word_index
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn count_solved(&self) -> usize {
        self.entries.iter().filter(|e| e.solved).count()
    }

    #[must_use]
    pub fn total_hints(&self) -> u32 {
        self.entries.iter().map(|e| e.hints_used).sum()
    }
}

/// Result of marking a word solved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolveOutcome {
    /// The word was already solved; callers must not award score again
    pub already_solved: bool,
}

/// Solved/total counts across every tier
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressSummary {
    pub total: usize,
    pub completed: usize,
    pub percentage: f64,
}

/// Per-session progress across all difficulty tiers
///
/// Tiers are created lazily from their word lists. Operations on a tier
/// that has not been materialized, or on a word the tier does not track,
/// are logged and leave the store unchanged.
#[derive(Debug, Clone, Default)]
pub struct ProgressStore {
    tiers: FxHashMap<Difficulty, TierState>,
}

impl ProgressStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the tier from `words` unless it already exists
    pub fn materialize<S: AsRef<str>>(
        &mut self,
        difficulty: Difficulty,
        words: &[S],
    ) -> &mut TierState {
        self.tiers.entry(difficulty).or_insert_with(|| {
            debug!(%difficulty, words = words.len(), "materializing tier");
            TierState::from_words(words)
        })
    }

    #[must_use]
    pub fn tier(&self, difficulty: Difficulty) -> Option<&TierState> {
        self.tiers.get(&difficulty)
    }

    pub fn tier_mut(&mut self, difficulty: Difficulty) -> Option<&mut TierState> {
        self.tiers.get_mut(&difficulty)
    }

    /// Increment the hint count for `word`
    ///
    /// Returns false (and logs) when the word is not tracked.
    pub fn record_hint(&mut self, difficulty: Difficulty, word: &str) -> bool {
        let Some(entry) = self.lookup_mut(difficulty, word) else {
            return false;
        };
        entry.add_hint();
        debug!(%difficulty, word, hints = entry.hints_used, "hint recorded");
        true
    }

    /// Hints used so far for `word`, or None if it is not tracked
    #[must_use]
    pub fn hints_for(&self, difficulty: Difficulty, word: &str) -> Option<u32> {
        self.tier(difficulty)?.entry(word).map(WordEntry::hints_used)
    }

    /// Mark `word` solved
    ///
    /// Only the first call for a word mutates state. A missing word is
    /// logged and reported as `already_solved: false` without any change.
    pub fn mark_solved(&mut self, difficulty: Difficulty, word: &str) -> SolveOutcome {
        let Some(entry) = self.lookup_mut(difficulty, word) else {
            return SolveOutcome {
                already_solved: false,
            };
        };

        let first = entry.mark_solved();
        if first {
            debug!(%difficulty, word, "word solved");
        } else {
            debug!(%difficulty, word, "word already solved, no score change");
        }
        SolveOutcome {
            already_solved: !first,
        }
    }

    /// Number of solved words in a tier (0 for a tier that does not exist)
    #[must_use]
    pub fn count_solved(&self, difficulty: Difficulty) -> usize {
        self.tier(difficulty).map_or(0, TierState::count_solved)
    }

    /// Completion across all materialized tiers
    #[must_use]
    pub fn summary(&self) -> ProgressSummary {
        let total: usize = self.tiers.values().map(TierState::len).sum();
        let completed: usize = self.tiers.values().map(TierState::count_solved).sum();
        let percentage = if total == 0 {
            0.0
        } else {
            completed as f64 / total as f64 * 100.0
        };

        ProgressSummary {
            total,
            completed,
            percentage,
        }
    }

    fn lookup_mut(&mut self, difficulty: Difficulty, word: &str) -> Option<&mut WordEntry> {
        let Some(tier) = self.tiers.get_mut(&difficulty) else {
            warn!(%difficulty, word, "tier has no word list");
            return None;
        };
        let entry = tier.entry_mut(word);
        if entry.is_none() {
            warn!(%difficulty, word, "word not tracked in tier");
        }
        entry
    }
}
