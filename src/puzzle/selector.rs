//! Next-word selection
//!
//! Each tier keeps a cursor into its word list. Selection returns the word
//! at the cursor and then advances it, wrapping to the start once the list
//! is exhausted so a tier replays its words instead of running out.

use super::progress::TierState;
use tracing::warn;

impl TierState {
    /// Serve the next word from `word_list` and advance the cursor
    ///
    /// Returns None (and logs) for an empty list, leaving the cursor alone.
    pub fn next_word<'a, S: AsRef<str>>(&mut self, word_list: &'a [S]) -> Option<&'a str> {
        if word_list.is_empty() {
            warn!("no words available for selection");
            return None;
        }

        if self.curr_word_index >= word_list.len() {
            self.curr_word_index = 0;
        }

        let word = word_list[self.curr_word_index].as_ref();
        self.curr_word_index += 1;
        Some(word)
    }
}

#[cfg(test)]
mod tests {
    use crate::core::Difficulty;
    use crate::puzzle::{ProgressStore, TierState};

    #[test]
    fn wraps_after_last_word() {
        let words = ["alpha", "bravo", "charlie"];
        let mut tier = TierState::from_words(&words);

        let served: Vec<&str> = (0..4).filter_map(|_| tier.next_word(&words)).collect();
        assert_eq!(served, ["alpha", "bravo", "charlie", "alpha"]);
        assert_eq!(tier.cursor(), 1);
    }

    #[test]
    fn post_increment_cursor() {
        let words = ["cat", "dog"];
        let mut tier = TierState::from_words(&words);

        assert_eq!(tier.next_word(&words), Some("cat"));
        assert_eq!(tier.cursor(), 1);
    }

    #[test]
    fn cursor_stays_within_list() {
        let words = ["cat", "dog"];
        let mut tier = TierState::from_words(&words);
        for _ in 0..5 {
            tier.next_word(&words);
            assert!(tier.cursor() <= words.len());
        }
    }

    #[test]
    fn cursor_past_shorter_list_resets() {
        let long = ["a", "b", "c", "d"];
        let short = ["x", "y"];
        let mut tier = TierState::from_words(&long);
        tier.next_word(&long);
        tier.next_word(&long);
        tier.next_word(&long);

        assert_eq!(tier.next_word(&short), Some("x"));
        assert_eq!(tier.cursor(), 1);
    }

    #[test]
    fn empty_list_returns_none() {
        let words: [&str; 0] = [];
        let mut tier = TierState::default();
        assert_eq!(tier.next_word(&words), None);
        assert_eq!(tier.cursor(), 0);
    }

    #[test]
    fn tiers_advance_independently() {
        let easy = ["cat", "dog"];
        let medium = ["garden", "castle", "ladder"];
        let mut store = ProgressStore::new();
        store.materialize(Difficulty::Easy, &easy);
        store.materialize(Difficulty::Medium, &medium);

        let easy_tier = store.tier_mut(Difficulty::Easy).unwrap();
        easy_tier.next_word(&easy);
        easy_tier.next_word(&easy);

        assert_eq!(store.tier(Difficulty::Easy).unwrap().cursor(), 2);
        assert_eq!(store.tier(Difficulty::Medium).unwrap().cursor(), 0);
    }
}
