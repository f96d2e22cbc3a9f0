//! Puzzle session: the synchronous facade front ends drive
//!
//! A session owns the word source, the progress store and the active round.
//! Local state is always updated first; hint and score reports are queued
//! for the sync worker and never block or fail gameplay.

use super::progress::ProgressStore;
use super::scramble::{RandomSource, scramble_distinct};
use crate::core::{Difficulty, Feedback, GuessError, KeyboardState, evaluate};
use crate::sync::{SyncEvent, SyncKind, SyncSender};
use crate::wordlists::WordSource;
use tracing::{debug, info, warn};

/// One submitted guess and its feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    pub guess: String,
    pub feedback: Feedback,
}

/// A single puzzle: one target word, its scramble and the guesses so far
#[derive(Debug, Clone)]
pub struct Round {
    target: String,
    scrambled: String,
    difficulty: Difficulty,
    guesses: Vec<GuessRecord>,
    keyboard: KeyboardState,
    solved: bool,
}

impl Round {
    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    #[must_use]
    pub fn scrambled(&self) -> &str {
        &self.scrambled
    }

    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub fn guesses(&self) -> &[GuessRecord] {
        &self.guesses
    }

    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardState {
        &self.keyboard
    }

    #[must_use]
    pub const fn is_solved(&self) -> bool {
        self.solved
    }

    #[must_use]
    pub fn target_len(&self) -> usize {
        self.target.chars().count()
    }
}

/// Result of a submitted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessOutcome {
    pub feedback: Feedback,
    pub solved: bool,
    /// First solve of this word in its tier; score was reported
    pub newly_scored: bool,
}

/// Letters revealed by a hint request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hint {
    pub hints_used: u32,
    /// The first `hints_used` letters of the target (never the whole word)
    pub revealed: String,
}

/// Per-player puzzle state
pub struct PuzzleSession<R: RandomSource> {
    user: String,
    source: WordSource,
    progress: ProgressStore,
    difficulty: Difficulty,
    round: Option<Round>,
    rng: R,
    sync: Option<SyncSender>,
}

impl<R: RandomSource> PuzzleSession<R> {
    /// Create a session; `sync` is None for offline play
    pub fn new(
        user: impl Into<String>,
        source: WordSource,
        rng: R,
        sync: Option<SyncSender>,
    ) -> Self {
        Self {
            user: user.into(),
            source,
            progress: ProgressStore::new(),
            difficulty: Difficulty::default(),
            round: None,
            rng,
            sync,
        }
    }

    #[must_use]
    pub fn user(&self) -> &str {
        &self.user
    }

    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Switch tiers; the current round (if any) keeps its own difficulty
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    #[must_use]
    pub const fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    #[must_use]
    pub const fn progress(&self) -> &ProgressStore {
        &self.progress
    }

    #[must_use]
    pub const fn source(&self) -> &WordSource {
        &self.source
    }

    /// Select and scramble the next word of the current tier
    ///
    /// Returns None when the tier has no words. The keyboard starts empty.
    pub fn start_round(&mut self) -> Option<&Round> {
        let difficulty = self.difficulty;
        let words = self.source.list(difficulty);
        let tier = self.progress.materialize(difficulty, words);

        let Some(target) = tier.next_word(words) else {
            warn!(%difficulty, "cannot start round: tier has no words");
            self.round = None;
            return None;
        };
        let target = target.to_string();

        let scrambled = scramble_distinct(&target, difficulty, &mut self.rng);
        debug!(%difficulty, cursor = tier.cursor(), "round started");

        self.round = Some(Round {
            target,
            scrambled,
            difficulty,
            guesses: Vec::new(),
            keyboard: KeyboardState::new(),
            solved: false,
        });
        self.round.as_ref()
    }

    /// Evaluate a guess against the active round's target
    ///
    /// A fully correct guess marks the word solved; the score is reported
    /// only on the first solve of that word in its tier.
    ///
    /// # Errors
    ///
    /// - [`GuessError::NoActiveRound`] if no round has been started
    /// - [`GuessError::EmptyGuess`] for a blank guess
    /// - [`GuessError::LengthMismatch`] if the guess length differs from the target
    pub fn submit_guess(&mut self, guess: &str) -> Result<GuessOutcome, GuessError> {
        let round = self.round.as_mut().ok_or(GuessError::NoActiveRound)?;

        let guess = guess.trim().to_lowercase();
        if guess.is_empty() {
            return Err(GuessError::EmptyGuess);
        }

        let feedback = evaluate(&guess, &round.target)?;
        round.keyboard.apply(&guess, feedback.statuses());
        round.guesses.push(GuessRecord {
            guess,
            feedback: feedback.clone(),
        });

        let solved = feedback.is_solved();
        let mut newly_scored = false;
        if solved {
            round.solved = true;
            let difficulty = round.difficulty;
            let word = round.target.clone();

            let outcome = self.progress.mark_solved(difficulty, &word);
            if outcome.already_solved {
                info!(%difficulty, %word, "solved again, no score awarded");
            } else {
                newly_scored = self
                    .progress
                    .tier(difficulty)
                    .and_then(|t| t.entry(&word))
                    .is_some();
                if newly_scored {
                    self.report(SyncKind::Score, difficulty, word);
                }
            }
        }

        Ok(GuessOutcome {
            feedback,
            solved,
            newly_scored,
        })
    }

    /// Record a hint for the active round's word and reveal more of it
    ///
    /// Returns None when no round is active or the word is not tracked.
    pub fn request_hint(&mut self) -> Option<Hint> {
        let Some(round) = self.round.as_ref() else {
            warn!("hint requested without an active round");
            return None;
        };
        let difficulty = round.difficulty;
        let word = round.target.clone();

        if !self.progress.record_hint(difficulty, &word) {
            return None;
        }
        let hints_used = self.progress.hints_for(difficulty, &word)?;

        // Never give the whole word away
        let reveal = (hints_used as usize).min(round.target_len().saturating_sub(1));
        let revealed = word.chars().take(reveal).collect();

        self.report(SyncKind::Hint, difficulty, word);

        Some(Hint {
            hints_used,
            revealed,
        })
    }

    fn report(&self, kind: SyncKind, difficulty: Difficulty, word: String) {
        let Some(sync) = &self.sync else {
            debug!(?kind, %difficulty, %word, "offline, report dropped");
            return;
        };

        let event = SyncEvent {
            kind,
            user: self.user.clone(),
            difficulty,
            word,
        };
        if sync.send(event).is_err() {
            warn!(?kind, %difficulty, "sync worker gone, report dropped");
        }
    }
}
