//! Word Scramble - CLI
//!
//! Unscramble-the-word puzzle game with TUI and line-based modes, plus
//! tools for checking guesses and measuring scramble strength.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs::File;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;
use word_scramble::{
    commands::{check_guess, run_benchmark, run_simple},
    config::{GameConfig, load_config},
    core::Difficulty,
    interactive::{App, run_tui},
    output::{formatters::spaced_letters, print_benchmark_result, print_check_result},
    puzzle::{PuzzleSession, StdRandom, scramble_distinct},
    sync::{HttpSync, spawn_worker, sync_channel},
    wordlists::WordSource,
};

#[derive(Parser)]
#[command(
    name = "word_scramble",
    about = "Unscramble words across three difficulty tiers",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Difficulty tier: easy, medium or hard
    #[arg(short, long, global = true)]
    difficulty: Option<Difficulty>,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Backend base URL for hint and score sync
    #[arg(short, long, global = true)]
    backend: Option<String>,

    /// Player identity reported to the backend
    #[arg(short, long, global = true)]
    user: Option<String>,

    /// Directory with easy.txt, medium.txt and long.txt
    #[arg(short = 'w', long, global = true)]
    words_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based game without TUI)
    Simple,

    /// Show the feedback for one guess against a target word
    Check {
        /// The guessed word
        guess: String,

        /// The word being guessed
        target: String,
    },

    /// Scramble a word using the tier's shuffle strength
    Scramble {
        /// Word to scramble
        word: String,

        /// Number of scrambles to print
        #[arg(short = 'n', long, default_value = "1")]
        count: usize,

        /// Seed for reproducible output
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Measure how well scrambling hides the words of a tier
    Benchmark {
        /// Scrambles per word
        #[arg(short = 'n', long, default_value = "1000")]
        samples: usize,

        /// Seed for reproducible runs
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

enum GameMode {
    Tui,
    Simple,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Play);

    let mut config = load_config(cli.config.as_deref())?;
    if let Some(difficulty) = cli.difficulty {
        config.difficulty = difficulty;
    }
    if let Some(url) = cli.backend {
        config.backend_url = Some(url);
    }
    if let Some(user) = cli.user {
        config.user = user;
    }
    if let Some(dir) = cli.words_dir {
        config.words_dir = Some(dir);
    }

    init_tracing(&config, matches!(command, Commands::Play))?;
    debug!(?config, "configuration loaded");

    match command {
        Commands::Play => run_game(GameMode::Tui, config).await,
        Commands::Simple => run_game(GameMode::Simple, config).await,
        Commands::Check { guess, target } => {
            let source = load_words(&config)?;
            let result = check_guess(&guess, &target, &source)?;
            print_check_result(&result);
            Ok(())
        }
        Commands::Scramble { word, count, seed } => {
            run_scramble_command(&word, count, seed, config.difficulty);
            Ok(())
        }
        Commands::Benchmark { samples, seed } => {
            let source = load_words(&config)?;
            let words = source.list(config.difficulty);
            println!(
                "Running benchmark on {} {} words, {samples} scrambles each...",
                words.len(),
                config.difficulty
            );
            let result = run_benchmark(words, config.difficulty, samples, seed, true);
            print_benchmark_result(&result);
            Ok(())
        }
    }
}

/// Log to stderr for line-based commands; the TUI logs to `log_file` or nowhere
fn init_tracing(config: &GameConfig, tui: bool) -> Result<()> {
    let default_level = if tui { "word_scramble=info" } else { "word_scramble=warn" };
    let filter = EnvFilter::from_default_env().add_directive(default_level.parse()?);
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match &config.log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create log file: {}", path.display()))?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).init();
        }
        None if tui => builder.with_writer(std::io::sink).init(),
        None => builder.with_writer(std::io::stderr).init(),
    }
    Ok(())
}

fn load_words(config: &GameConfig) -> Result<WordSource> {
    match &config.words_dir {
        Some(dir) => WordSource::from_dir(dir),
        None => Ok(WordSource::embedded()),
    }
}

/// Play until the player quits, then flush pending sync reports
async fn run_game(mode: GameMode, config: GameConfig) -> Result<()> {
    let source = load_words(&config)?;

    let (sync, worker) = match &config.backend_url {
        Some(url) => {
            let adapter = HttpSync::new(url, config.timeout_secs)?;
            info!(backend = adapter.base_url(), user = %config.user, "sync enabled");
            let (tx, rx) = sync_channel();
            (Some(tx), Some(spawn_worker(Arc::new(adapter), rx)))
        }
        None => {
            info!("no backend configured, playing offline");
            (None, None)
        }
    };

    let mut session = PuzzleSession::new(config.user, source, StdRandom::from_entropy(), sync);
    session.set_difficulty(config.difficulty);

    // The session owns the only sender; dropping it lets the worker drain and stop
    tokio::task::spawn_blocking(move || match mode {
        GameMode::Tui => run_tui(App::new(session)),
        GameMode::Simple => run_simple(&mut session),
    })
    .await??;

    if let Some(worker) = worker {
        match worker.await {
            Ok(report) => info!(
                delivered = report.delivered,
                failed = report.failed,
                "sync finished"
            ),
            Err(e) => warn!(error = %e, "sync worker panicked"),
        }
    }
    Ok(())
}

fn run_scramble_command(word: &str, count: usize, seed: Option<u64>, difficulty: Difficulty) {
    let mut rng = seed.map_or_else(StdRandom::from_entropy, StdRandom::seeded);
    let word = word.trim().to_lowercase();

    println!("{difficulty} scrambles of {}:", word.to_uppercase());
    for _ in 0..count.max(1) {
        println!("  {}", spaced_letters(&scramble_distinct(&word, difficulty, &mut rng)));
    }
}
