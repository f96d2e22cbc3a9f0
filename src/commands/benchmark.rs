//! Benchmark command
//!
//! Measures how well scrambling hides each word of a tier: how often a
//! scramble comes back unchanged and how many letters move on average.

use crate::core::Difficulty;
use crate::puzzle::{StdRandom, scramble};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Number of words listed as weakest
const WEAKEST_SHOWN: usize = 5;

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub difficulty: Difficulty,
    pub total_words: usize,
    pub samples_per_word: usize,
    /// Share of scrambles identical to the input
    pub unchanged_rate: f64,
    /// Mean share of positions holding a different letter after scrambling
    pub mean_displaced: f64,
    pub duration: Duration,
    pub scrambles_per_second: f64,
    /// Words most often left unchanged, with their rate
    pub weakest: Vec<(String, f64)>,
}

struct WordStats {
    word: String,
    unchanged: usize,
    displaced: f64,
}

/// Scramble every word `samples` times and collect statistics
///
/// With a `seed`, word `i` uses seed `seed + i` so runs are reproducible.
pub fn run_benchmark(
    words: &[String],
    difficulty: Difficulty,
    samples: usize,
    seed: Option<u64>,
    show_progress: bool,
) -> BenchmarkResult {
    let start = Instant::now();

    let pb = if show_progress {
        ProgressBar::new(words.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let stats: Vec<WordStats> = words
        .par_iter()
        .enumerate()
        .map(|(i, word)| {
            let mut rng = match seed {
                Some(s) => StdRandom::seeded(s.wrapping_add(i as u64)),
                None => StdRandom::from_entropy(),
            };
            let stats = sample_word(word, difficulty, samples, &mut rng);
            pb.inc(1);
            stats
        })
        .collect();

    pb.finish_and_clear();
    let duration = start.elapsed();

    let total_scrambles = words.len() * samples;
    let unchanged: usize = stats.iter().map(|s| s.unchanged).sum();
    let displaced: f64 = stats.iter().map(|s| s.displaced).sum();

    let (unchanged_rate, mean_displaced) = if total_scrambles == 0 {
        (0.0, 0.0)
    } else {
        (
            unchanged as f64 / total_scrambles as f64,
            displaced / total_scrambles as f64,
        )
    };

    let mut weakest: Vec<(String, f64)> = stats
        .into_iter()
        .filter(|s| s.unchanged > 0)
        .map(|s| (s.word, s.unchanged as f64 / samples as f64))
        .collect();
    weakest.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    weakest.truncate(WEAKEST_SHOWN);

    let secs = duration.as_secs_f64();
    BenchmarkResult {
        difficulty,
        total_words: words.len(),
        samples_per_word: samples,
        unchanged_rate,
        mean_displaced,
        duration,
        scrambles_per_second: if secs > 0.0 {
            total_scrambles as f64 / secs
        } else {
            0.0
        },
        weakest,
    }
}

fn sample_word(
    word: &str,
    difficulty: Difficulty,
    samples: usize,
    rng: &mut StdRandom,
) -> WordStats {
    let original: Vec<char> = word.chars().collect();
    let mut unchanged = 0;
    let mut displaced = 0.0;

    for _ in 0..samples {
        let scrambled = scramble(word, difficulty, rng);
        if scrambled == word {
            unchanged += 1;
        }
        if !original.is_empty() {
            let moved = scrambled
                .chars()
                .zip(&original)
                .filter(|(a, b)| a != *b)
                .count();
            displaced += moved as f64 / original.len() as f64;
        }
    }

    WordStats {
        word: word.to_string(),
        unchanged,
        displaced,
    }
}
