//! Word Scramble
//!
//! A word-unscrambling puzzle engine: tiered word lists, scrambling,
//! Wordle-style guess feedback, per-tier progress and optional backend sync
//! of hints and scores.
//!
//! # Quick Start
//!
//! ```rust
//! use word_scramble::core::{Difficulty, LetterStatus, evaluate};
//! use word_scramble::puzzle::{PuzzleSession, StdRandom};
//! use word_scramble::wordlists::WordSource;
//!
//! // Per-letter feedback for a guess
//! let feedback = evaluate("cot", "cat").unwrap();
//! assert_eq!(feedback.statuses()[1], LetterStatus::Absent);
//!
//! // An offline session over the built-in word lists
//! let mut session = PuzzleSession::new("guest", WordSource::embedded(), StdRandom::seeded(1), None);
//! session.set_difficulty(Difficulty::Easy);
//! let round = session.start_round().unwrap();
//! println!("Unscramble: {}", round.scrambled());
//! ```

// Core domain types
pub mod core;

// Scrambling, word selection, progress and sessions
pub mod puzzle;

// Backend sync of hints and scores
pub mod sync;

// Word lists
pub mod wordlists;

// Configuration
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
