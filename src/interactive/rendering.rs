//! TUI rendering with ratatui
//!
//! Scrambled letters, the guess grid, the on-screen keyboard and per-tier
//! progress.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{Difficulty, KeyboardState, LetterStatus};
use crate::output::formatters::{KEYBOARD_ROWS, spaced_letters};
use crate::puzzle::RandomSource;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui<R: RandomSource>(f: &mut Frame, app: &App<R>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔤 WORD SCRAMBLE")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_main_panel<R: RandomSource>(f: &mut Frame, app: &App<R>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Min(4)])
        .split(area);

    render_scramble(f, app, chunks[0]);
    render_guesses(f, app, chunks[1]);
}

fn render_scramble<R: RandomSource>(f: &mut Frame, app: &App<R>, area: Rect) {
    let block = Block::default()
        .title(" Scrambled ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    let Some(round) = app.round() else {
        f.render_widget(Paragraph::new("No puzzle loaded").block(block), area);
        return;
    };

    let mut content = vec![
        Line::from(Span::styled(
            spaced_letters(round.scrambled()),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(format!(
            "{} letters · {}",
            round.target_len(),
            round.difficulty()
        )),
    ];
    if let Some(hint) = &app.hint {
        content.push(Line::from(vec![
            Span::raw("Hint: "),
            Span::styled(
                format!("{}…", hint.revealed.to_uppercase()),
                Style::default().fg(Color::Magenta),
            ),
        ]));
    }
    if app.input_mode == InputMode::Solved {
        content.push(Line::from(Span::styled(
            format!("Answer: {}", round.target().to_uppercase()),
            Style::default().fg(Color::Green),
        )));
    }

    let paragraph = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_guesses<R: RandomSource>(f: &mut Frame, app: &App<R>, area: Rect) {
    let items: Vec<ListItem> = app
        .round()
        .map(|round| {
            round
                .guesses()
                .iter()
                .enumerate()
                .rev()
                .map(|(i, record)| {
                    let mut spans = vec![Span::raw(format!("{:>2}: ", i + 1))];
                    spans.extend(
                        record
                            .guess
                            .chars()
                            .zip(record.feedback.statuses())
                            .map(|(c, &status)| tile(c, Some(status))),
                    );
                    ListItem::new(Line::from(spans))
                })
                .collect()
        })
        .unwrap_or_default();

    let list =
        List::new(items).block(Block::default().title(" Guesses ").borders(Borders::ALL));
    f.render_widget(list, area);
}

fn render_info_panel<R: RandomSource>(f: &mut Frame, app: &App<R>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Keyboard
            Constraint::Length(5), // Tier progress
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    let empty = KeyboardState::new();
    let keyboard = app.round().map_or(&empty, |r| r.keyboard());
    render_keyboard(f, keyboard, chunks[0]);
    render_progress(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_keyboard(f: &mut Frame, keyboard: &KeyboardState, area: Rect) {
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(indent, row)| {
            let mut spans = vec![Span::raw(" ".repeat(indent))];
            spans.extend(row.chars().map(|c| tile(c, keyboard.status(c))));
            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_progress<R: RandomSource>(f: &mut Frame, app: &App<R>, area: Rect) {
    let block = Block::default()
        .title(" Progress ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1); 3])
        .split(inner);

    let progress = app.session.progress();
    for (difficulty, row) in Difficulty::ALL.into_iter().zip(rows.iter()) {
        let total = app.session.source().list(difficulty).len();
        let solved = progress.count_solved(difficulty);
        let ratio = if total == 0 {
            0.0
        } else {
            (solved as f64 / total as f64).min(1.0)
        };
        let color = if difficulty == app.session.difficulty() {
            Color::Cyan
        } else {
            Color::DarkGray
        };

        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(color))
            .ratio(ratio)
            .label(format!("{difficulty}: {solved}/{total}"));
        f.render_widget(gauge, *row);
    }
}

fn render_messages<R: RandomSource>(f: &mut Frame, app: &App<R>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));
    f.render_widget(messages_list, area);
}

fn render_input<R: RandomSource>(f: &mut Frame, app: &App<R>, area: Rect) {
    let (title, color) = match app.input_mode {
        InputMode::Guessing => (" Your Guess | Enter: submit  ?: hint ", Color::Yellow),
        InputMode::Solved => (" 🎉 SOLVED! | Enter/n: next word  q: quit ", Color::Green),
        InputMode::Idle => (" No puzzle | Tab: change difficulty  q: quit ", Color::Red),
    };

    let input = Paragraph::new(app.input_buffer.to_uppercase())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );
    f.render_widget(input, area);
}

fn render_status<R: RandomSource>(f: &mut Frame, app: &App<R>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(50),
        ])
        .split(area);

    let player = Paragraph::new(format!("Player: {}", app.session.user()))
        .alignment(Alignment::Center);
    f.render_widget(player, chunks[0]);

    let stats = Paragraph::new(format!(
        "Solved: {}/{} | Guesses: {}",
        app.stats.solved, app.stats.rounds, app.stats.guesses
    ))
    .alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help = Paragraph::new("Esc: Quit | Tab: Difficulty | F5: New Word | ?: Hint")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

fn tile(letter: char, status: Option<LetterStatus>) -> Span<'static> {
    let style = match status {
        Some(LetterStatus::Correct) => Style::default().fg(Color::Black).bg(Color::Green),
        Some(LetterStatus::Present) => Style::default().fg(Color::Black).bg(Color::Yellow),
        Some(LetterStatus::Absent) => Style::default().fg(Color::White).bg(Color::DarkGray),
        None => Style::default(),
    };
    Span::styled(
        format!(" {} ", letter.to_ascii_uppercase()),
        style.add_modifier(Modifier::BOLD),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::{PuzzleSession, StdRandom};
    use crate::wordlists::WordSource;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn renders_scramble_and_progress() {
        let source = WordSource::new(&["cat"], &["garden"], &["language"]);
        let mut session = PuzzleSession::new("ana", source, StdRandom::seeded(8), None);
        session.set_difficulty(Difficulty::Medium);
        let mut app = App::new(session);
        app.new_round();

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("WORD SCRAMBLE"));
        assert!(text.contains("Scrambled"));
        assert!(text.contains("medium: 0/1"));
        assert!(text.contains("Player: ana"));
    }

    #[test]
    fn renders_without_round() {
        let empty: [&str; 0] = [];
        let source = WordSource::new(&empty, &empty, &empty);
        let session = PuzzleSession::new("ana", source, StdRandom::seeded(1), None);
        let app = App::new(session);

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();
        assert!(buffer_text(&terminal).contains("No puzzle loaded"));
    }
}
