//! Puzzle engine
//!
//! Word selection, scrambling, progress tracking and the session that ties
//! them together for a single player.

mod progress;
mod scramble;
mod selector;
mod session;

pub use progress::{ProgressStore, ProgressSummary, SolveOutcome, TierState, WordEntry};
pub use scramble::{RandomSource, StdRandom, scramble, scramble_distinct, shuffle};
pub use session::{GuessOutcome, GuessRecord, Hint, PuzzleSession, Round};
