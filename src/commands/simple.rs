//! Simple interactive CLI mode
//!
//! Line-based game loop without TUI

use crate::core::{Difficulty, GuessError};
use crate::output::formatters::{colored_guess, spaced_letters};
use crate::output::{print_keyboard, print_progress};
use crate::puzzle::{PuzzleSession, RandomSource};
use anyhow::{Context, Result, bail};
use colored::Colorize;
use std::io::{self, BufRead, Write};
use tracing::warn;

/// Prefix that marks a line as a command rather than a guess
pub const COMMAND_PREFIX: char = '/';

/// A parsed line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Guess(String),
    Hint,
    New,
    Difficulty(Difficulty),
    Progress,
    Help,
    Quit,
    /// `/level` with a tier name that does not parse
    UnknownDifficulty(String),
    Unknown(String),
}

impl Command {
    /// Parse one input line
    ///
    /// Commands start with `/`; any other line is a guess, so a word such
    /// as `progress` can always be submitted.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }
        let lower = input.to_lowercase();
        let Some(name) = lower.strip_prefix(COMMAND_PREFIX) else {
            return Some(Self::Guess(lower));
        };

        let command = match name.trim() {
            "quit" | "q" | "exit" => Self::Quit,
            "hint" | "h" | "?" => Self::Hint,
            "new" | "n" | "skip" => Self::New,
            "progress" | "p" => Self::Progress,
            "help" => Self::Help,
            other => match other.strip_prefix("level") {
                Some(level) => match level.parse() {
                    Ok(difficulty) => Self::Difficulty(difficulty),
                    Err(_) => Self::UnknownDifficulty(level.trim().to_string()),
                },
                None => Self::Unknown(other.to_string()),
            },
        };
        Some(command)
    }
}

/// Run the line-based game on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<R: RandomSource>(session: &mut PuzzleSession<R>) -> Result<()> {
    let stdin = io::stdin();
    run_with_input(session, &mut stdin.lock())
}

/// Run the game reading commands from `input`
///
/// Ends on `/quit` or end of input.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_with_input<R: RandomSource, B: BufRead>(
    session: &mut PuzzleSession<R>,
    input: &mut B,
) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Word Scramble - Simple Mode                  ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    print_help();

    begin_round(session)?;

    loop {
        let Some(line) = read_line(input, "Guess")? else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };
        let Some(command) = Command::parse(&line) else {
            continue;
        };

        match command {
            Command::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            Command::Help => print_help(),
            Command::UnknownDifficulty(level) => {
                warn!(level = %level, "unknown difficulty requested");
                println!("❌ Unknown difficulty '{level}'. Use easy, medium or hard.\n");
            }
            Command::Unknown(name) => {
                println!("❌ Unknown command '/{name}'. Type /help for the list.\n");
            }
            Command::Progress => print_progress(session.progress()),
            Command::New => begin_round(session)?,
            Command::Difficulty(difficulty) => {
                session.set_difficulty(difficulty);
                println!("\n🔄 Difficulty set to {}", difficulty.to_string().bright_cyan());
                begin_round(session)?;
            }
            Command::Hint => match session.request_hint() {
                Some(hint) => println!(
                    "💡 Hint {}: the word starts with {}\n",
                    hint.hints_used,
                    hint.revealed.to_uppercase().bright_yellow().bold()
                ),
                None => println!("No hint available for this word.\n"),
            },
            Command::Guess(guess) => {
                if !handle_guess(session, &guess, input)? {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
            }
        }
    }
}

/// Returns false when the player declines another round
fn handle_guess<R: RandomSource, B: BufRead>(
    session: &mut PuzzleSession<R>,
    guess: &str,
    input: &mut B,
) -> Result<bool> {
    let outcome = match session.submit_guess(guess) {
        Ok(outcome) => outcome,
        Err(GuessError::LengthMismatch { target_len, .. }) => {
            println!("❌ The word has {target_len} letters.\n");
            return Ok(true);
        }
        Err(e) => {
            println!("❌ {e}\n");
            return Ok(true);
        }
    };

    let Some(round) = session.round() else {
        bail!("round ended unexpectedly");
    };
    println!("\n  {}", colored_guess(&guess.to_lowercase(), &outcome.feedback));

    if !outcome.solved {
        print_keyboard(round.keyboard());
        return Ok(true);
    }

    let turns = round.guesses().len();
    println!("\n{}", "═".repeat(60).bright_cyan());
    println!(
        "{}",
        format!("    🎉  S O L V E D :  {}  🎉", round.target().to_uppercase())
            .bright_green()
            .bold()
    );
    println!("{}", "═".repeat(60).bright_cyan());
    println!(
        "\n  Found in {} {}",
        turns.to_string().bright_cyan().bold(),
        if turns == 1 { "guess" } else { "guesses" }
    );
    if !outcome.newly_scored {
        println!("  {}", "Already solved before, no new score.".bright_black());
    }
    println!();

    match read_line(input, "Play again? (yes/no)")? {
        Some(answer) if matches!(answer.to_lowercase().as_str(), "yes" | "y" | "") => {
            begin_round(session)?;
            Ok(true)
        }
        _ => Ok(false),
    }
}

fn begin_round<R: RandomSource>(session: &mut PuzzleSession<R>) -> Result<()> {
    let difficulty = session.difficulty();
    let Some(round) = session.start_round() else {
        bail!("no words available for {difficulty} difficulty");
    };

    println!("────────────────────────────────────────────────────────────");
    println!(
        "{} puzzle, {} letters",
        difficulty.to_string().bright_cyan(),
        round.target_len()
    );
    println!("────────────────────────────────────────────────────────────");
    println!("\n    {}\n", spaced_letters(round.scrambled()).bright_white().bold());
    Ok(())
}

fn print_help() {
    println!("Unscramble the letters to find the word. After each guess:");
    println!("  🟩 right letter, right place");
    println!("  🟨 in the word, wrong place");
    println!("  ⬛ not in the word\n");
    println!("Type a word to guess it. Commands start with '/':");
    println!("  /hint  /new  /level easy|medium|hard  /progress  /help  /quit\n");
}

/// Prompt and read one trimmed line; None at end of input
fn read_line<B: BufRead>(input: &mut B, prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush().context("failed to flush stdout")?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("failed to read input")?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::StdRandom;
    use crate::wordlists::WordSource;
    use std::io::Cursor;

    fn session() -> PuzzleSession<StdRandom> {
        let source = WordSource::new(&["cat", "dog"], &["garden"], &["language"]);
        let mut session = PuzzleSession::new("guest", source, StdRandom::seeded(9), None);
        session.set_difficulty(Difficulty::Easy);
        session
    }

    #[test]
    fn parse_commands() {
        assert_eq!(Command::parse("  "), None);
        assert_eq!(Command::parse("/Q"), Some(Command::Quit));
        assert_eq!(Command::parse("/hint"), Some(Command::Hint));
        assert_eq!(Command::parse("/skip"), Some(Command::New));
        assert_eq!(
            Command::parse("/level HARD"),
            Some(Command::Difficulty(Difficulty::Hard))
        );
        assert_eq!(Command::parse("Garden"), Some(Command::Guess("garden".into())));
        assert_eq!(Command::parse("/dance"), Some(Command::Unknown("dance".into())));
    }

    #[test]
    fn command_words_without_prefix_are_guesses() {
        for word in ["progress", "hint", "new", "quit", "help"] {
            assert_eq!(Command::parse(word), Some(Command::Guess(word.into())));
        }
    }

    #[test]
    fn unknown_level_is_reported() {
        assert_eq!(
            Command::parse("/level extreme"),
            Some(Command::UnknownDifficulty("extreme".into()))
        );
    }

    #[test]
    fn unknown_level_keeps_round() {
        colored::control::set_override(false);
        let mut session = session();
        let mut input = Cursor::new("/level extreme\n/quit\n");

        run_with_input(&mut session, &mut input).unwrap();
        assert_eq!(session.difficulty(), Difficulty::Easy);
        assert!(session.round().unwrap().guesses().is_empty());
    }

    #[test]
    fn solves_word_named_like_a_command() {
        colored::control::set_override(false);
        let source = WordSource::new(&["cat"], &["garden"], &["progress"]);
        let mut session = PuzzleSession::new("guest", source, StdRandom::seeded(4), None);
        session.set_difficulty(Difficulty::Hard);
        let mut input = Cursor::new("progress\nno\n");

        run_with_input(&mut session, &mut input).unwrap();
        let round = session.round().unwrap();
        assert_eq!(round.target(), "progress");
        assert_eq!(round.guesses().len(), 1);
        assert!(round.is_solved());
        assert_eq!(session.progress().count_solved(Difficulty::Hard), 1);
    }

    #[test]
    fn scripted_game_tracks_progress() {
        colored::control::set_override(false);
        let mut session = session();
        let mut input = Cursor::new("cot\n/hint\ncats\n/quit\n");

        run_with_input(&mut session, &mut input).unwrap();

        let round = session.round().unwrap();
        assert_eq!(round.target(), "cat");
        assert_eq!(round.guesses().len(), 1);
        assert_eq!(session.progress().hints_for(Difficulty::Easy, "cat"), Some(1));
    }

    #[test]
    fn solving_then_declining_ends_game() {
        colored::control::set_override(false);
        let mut session = session();
        let mut input = Cursor::new("cat\nno\n/hint\n");

        run_with_input(&mut session, &mut input).unwrap();
        assert!(session.round().unwrap().is_solved());
        assert_eq!(session.progress().count_solved(Difficulty::Easy), 1);
        assert_eq!(session.progress().hints_for(Difficulty::Easy, "cat"), Some(0));
    }

    #[test]
    fn end_of_input_stops() {
        let mut session = session();
        let mut input = Cursor::new("/level medium\n");

        run_with_input(&mut session, &mut input).unwrap();
        assert_eq!(session.difficulty(), Difficulty::Medium);
        assert_eq!(session.round().unwrap().target(), "garden");
    }
}
