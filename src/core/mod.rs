//! Core domain types for the word puzzle
//!
//! Pure, synchronous building blocks: difficulty tiers, letter feedback,
//! guess evaluation and keyboard aggregation.

mod difficulty;
mod keyboard;
mod matcher;
mod status;

pub use difficulty::{Difficulty, DifficultyParseError, HARD_MIN_LEN};
pub use keyboard::{KeyboardState, aggregate};
pub use matcher::{GuessError, evaluate};
pub use status::{Feedback, LetterStatus};
