//! TUI application state and logic

use crate::core::GuessError;
use crate::puzzle::{Hint, PuzzleSession, RandomSource, Round};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Messages kept on screen
const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App<R: RandomSource> {
    pub session: PuzzleSession<R>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub hint: Option<Hint>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    Solved,
    /// The current tier has no words
    Idle,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Rounds played in this run of the TUI
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub rounds: usize,
    pub solved: usize,
    pub guesses: usize,
}

impl<R: RandomSource> App<R> {
    #[must_use]
    pub fn new(session: PuzzleSession<R>) -> Self {
        Self {
            session,
            input_buffer: String::new(),
            messages: vec![Message {
                text: "Unscramble the letters! Type a guess and press Enter.".to_string(),
                style: MessageStyle::Info,
            }],
            hint: None,
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Idle,
        }
    }

    #[must_use]
    pub const fn round(&self) -> Option<&Round> {
        self.session.round()
    }

    pub fn new_round(&mut self) {
        self.input_buffer.clear();
        self.hint = None;

        let difficulty = self.session.difficulty();
        if let Some(round) = self.session.start_round() {
            let len = round.target_len();
            self.stats.rounds += 1;
            self.input_mode = InputMode::Guessing;
            self.add_message(
                &format!("New {difficulty} word: {len} letters"),
                MessageStyle::Info,
            );
        } else {
            self.input_mode = InputMode::Idle;
            self.add_message(
                &format!("No words available for {difficulty}"),
                MessageStyle::Error,
            );
        }
    }

    pub fn cycle_difficulty(&mut self) {
        let next = self.session.difficulty().cycle();
        self.session.set_difficulty(next);
        self.new_round();
    }

    pub fn push_char(&mut self, c: char) {
        let Some(round) = self.session.round() else {
            return;
        };
        if c.is_alphabetic() && self.input_buffer.chars().count() < round.target_len() {
            self.input_buffer.extend(c.to_lowercase());
        }
    }

    pub fn submit_guess(&mut self) {
        let guess = std::mem::take(&mut self.input_buffer);

        match self.session.submit_guess(&guess) {
            Ok(outcome) => {
                self.stats.guesses += 1;
                if outcome.solved {
                    self.stats.solved += 1;
                    self.input_mode = InputMode::Solved;
                    let text = if outcome.newly_scored {
                        format!("🎉 Solved: {}! Score recorded.", guess.to_uppercase())
                    } else {
                        format!("🎉 Solved: {} (already counted)", guess.to_uppercase())
                    };
                    self.add_message(&text, MessageStyle::Success);
                    self.add_message("Press Enter for the next word.", MessageStyle::Info);
                } else {
                    self.add_message(
                        &format!("{} {}", guess.to_uppercase(), outcome.feedback.to_emoji()),
                        MessageStyle::Info,
                    );
                }
            }
            Err(GuessError::LengthMismatch { target_len, .. }) => {
                self.input_buffer = guess;
                self.add_message(
                    &format!("Guess must be {target_len} letters"),
                    MessageStyle::Error,
                );
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn request_hint(&mut self) {
        match self.session.request_hint() {
            Some(hint) => {
                self.add_message(
                    &format!("💡 Starts with {}", hint.revealed.to_uppercase()),
                    MessageStyle::Info,
                );
                self.hint = Some(hint);
            }
            None => self.add_message("No hint available", MessageStyle::Error),
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => self.cycle_difficulty(),
            _ => match self.input_mode {
                InputMode::Guessing => match key.code {
                    KeyCode::Char('?') => self.request_hint(),
                    KeyCode::Char(c) => self.push_char(c),
                    KeyCode::Backspace => {
                        self.input_buffer.pop();
                    }
                    KeyCode::Enter => self.submit_guess(),
                    KeyCode::F(5) => self.new_round(),
                    _ => {}
                },
                InputMode::Solved | InputMode::Idle => match key.code {
                    KeyCode::Char('q') => self.should_quit = true,
                    KeyCode::Char('n') | KeyCode::Enter | KeyCode::F(5) => self.new_round(),
                    _ => {}
                },
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<R: RandomSource>(app: App<R>) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend, R: RandomSource>(
    terminal: &mut Terminal<B>,
    mut app: App<R>,
) -> Result<()> {
    app.new_round();

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Difficulty;
    use crate::puzzle::StdRandom;
    use crate::wordlists::WordSource;

    fn app() -> App<StdRandom> {
        let source = WordSource::new(&["cat", "dog"], &["garden"], &["language"]);
        let mut session = PuzzleSession::new("guest", source, StdRandom::seeded(4), None);
        session.set_difficulty(Difficulty::Easy);
        let mut app = App::new(session);
        app.new_round();
        app
    }

    fn press(app: &mut App<StdRandom>, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_word(app: &mut App<StdRandom>, word: &str) {
        for c in word.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn input_is_capped_at_word_length() {
        let mut app = app();
        type_word(&mut app, "CATS1");
        assert_eq!(app.input_buffer, "cat");

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.input_buffer, "ca");
    }

    #[test]
    fn wrong_guess_keeps_playing() {
        let mut app = app();
        type_word(&mut app, "cot");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.input_mode, InputMode::Guessing);
        assert!(app.input_buffer.is_empty());
        assert_eq!(app.round().unwrap().guesses().len(), 1);
        assert_eq!(app.stats.guesses, 1);
    }

    #[test]
    fn short_guess_is_kept_for_editing() {
        let mut app = app();
        type_word(&mut app, "ca");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.input_buffer, "ca");
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);
        assert!(app.round().unwrap().guesses().is_empty());
    }

    #[test]
    fn solve_then_next_round() {
        let mut app = app();
        type_word(&mut app, "cat");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.input_mode, InputMode::Solved);
        assert_eq!(app.stats.solved, 1);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.input_mode, InputMode::Guessing);
        assert_eq!(app.round().unwrap().target(), "dog");
        assert_eq!(app.stats.rounds, 2);
    }

    #[test]
    fn hint_key_reveals_prefix() {
        let mut app = app();
        press(&mut app, KeyCode::Char('?'));

        assert_eq!(app.hint.as_ref().unwrap().revealed, "c");
        assert!(app.input_buffer.is_empty());
    }

    #[test]
    fn tab_cycles_difficulty() {
        let mut app = app();
        press(&mut app, KeyCode::Tab);

        assert_eq!(app.session.difficulty(), Difficulty::Medium);
        assert_eq!(app.round().unwrap().target(), "garden");
        assert!(app.hint.is_none());
    }

    #[test]
    fn quit_keys() {
        let mut app = app();
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);
        assert_eq!(app.input_buffer, "q");

        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn messages_are_bounded() {
        let mut app = app();
        for i in 0..10 {
            app.add_message(&format!("m{i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), MAX_MESSAGES);
        assert_eq!(app.messages.last().unwrap().text, "m9");
    }

    #[test]
    fn empty_tier_is_idle() {
        let empty: [&str; 0] = [];
        let source = WordSource::new(&empty, &empty, &empty);
        let session = PuzzleSession::new("guest", source, StdRandom::seeded(1), None);
        let mut app = App::new(session);
        app.new_round();

        assert_eq!(app.input_mode, InputMode::Idle);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}
