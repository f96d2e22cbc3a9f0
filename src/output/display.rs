//! Display functions for command results

use super::formatters::{colored_guess, create_progress_bar, keyboard_lines};
use crate::commands::{BenchmarkResult, CheckResult};
use crate::core::{Difficulty, KeyboardState};
use crate::puzzle::ProgressStore;
use colored::Colorize;

/// Print the statuses for a single checked guess
pub fn print_check_result(result: &CheckResult) {
    println!(
        "\n{}  {}",
        colored_guess(&result.guess, &result.feedback),
        result.feedback.to_emoji()
    );
    if result.feedback.is_solved() {
        println!("{}", "✅ Exact match!".green().bold());
    }
    if !result.in_word_list {
        println!(
            "{}",
            format!("'{}' is not in any word list", result.guess).bright_black()
        );
    }
}

/// Print the on-screen keyboard
pub fn print_keyboard(keyboard: &KeyboardState) {
    println!();
    for line in keyboard_lines(keyboard) {
        println!("  {line}");
    }
    println!();
}

/// Print solved counts per tier and overall completion
pub fn print_progress(progress: &ProgressStore) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(" {} ", "PROGRESS".bright_cyan().bold());
    println!("{}", "─".repeat(60).cyan());

    for difficulty in Difficulty::ALL {
        let Some(tier) = progress.tier(difficulty) else {
            println!("   {:<8} {}", difficulty.to_string(), "not started".bright_black());
            continue;
        };
        let solved = tier.count_solved();
        let bar = create_progress_bar(solved as f64, tier.len() as f64, 20);
        println!(
            "   {:<8} [{}] {}/{}  hints: {}",
            difficulty.to_string(),
            bar.green(),
            solved,
            tier.len(),
            tier.total_hints()
        );
    }

    let summary = progress.summary();
    println!(
        "\n   Overall: {} of {} words ({})",
        summary.completed,
        summary.total,
        format!("{:.1}%", summary.percentage).bright_yellow()
    );
}

/// Print the result of a scramble benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SCRAMBLE BENCHMARK".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Strength:".bright_cyan().bold());
    println!("   Tier:               {}", result.difficulty);
    println!("   Words tested:       {}", result.total_words);
    println!("   Scrambles per word: {}", result.samples_per_word);
    println!(
        "   Unchanged:          {}",
        format!("{:.2}%", result.unchanged_rate * 100.0)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Letters displaced:  {}",
        format!("{:.1}%", result.mean_displaced * 100.0).green()
    );
    println!("   Time taken:         {:.2}s", result.duration.as_secs_f64());
    println!("   Scrambles/second:   {:.0}", result.scrambles_per_second);

    if !result.weakest.is_empty() {
        println!("\n📉 {}", "Most often unchanged:".bright_cyan().bold());
        for (word, rate) in &result.weakest {
            let bar = create_progress_bar(*rate, 1.0, 30);
            println!(
                "   {:<12} {} {:5.1}%",
                word.to_uppercase(),
                bar.yellow(),
                rate * 100.0
            );
        }
    }
}
