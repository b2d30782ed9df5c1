//! TUI application state and logic

use crate::core::{Difficulty, GuessOutcome, Hint};
use crate::game::{RoundSummary, Session, settle_round};
use crate::stats::StatsTracker;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Longest input accepted in the guess box
const MAX_INPUT_LEN: usize = 6;

/// Application state
pub struct App {
    pub screen: Screen,
    pub selected: Difficulty,
    pub session: Option<Session>,
    pub history: Vec<HistoryEntry>,
    pub last_summary: Option<RoundSummary>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: StatsTracker,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Menu,
    Playing,
    RoundOver,
}

#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub guess: i32,
    pub outcome: GuessOutcome,
    pub hint: Option<Hint>,
    pub range_after: (i32, i32),
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    #[must_use]
    pub fn new() -> Self {
        Self {
            screen: Screen::Menu,
            selected: Difficulty::Medium,
            session: None,
            history: Vec::new(),
            last_summary: None,
            input_buffer: String::new(),
            messages: vec![Message {
                text: "Welcome to DigitDash! Pick a difficulty to start.".to_string(),
                style: MessageStyle::Info,
            }],
            stats: StatsTracker::new(),
            should_quit: false,
        }
    }

    pub fn select_next(&mut self) {
        self.selected = match self.selected {
            Difficulty::Easy => Difficulty::Medium,
            Difficulty::Medium | Difficulty::Hard => Difficulty::Hard,
        };
    }

    pub fn select_previous(&mut self) {
        self.selected = match self.selected {
            Difficulty::Easy | Difficulty::Medium => Difficulty::Easy,
            Difficulty::Hard => Difficulty::Medium,
        };
    }

    /// Begin a round on `difficulty`, discarding any round in progress
    pub fn start_round(&mut self, difficulty: Difficulty) {
        self.selected = difficulty;
        match self.session.as_mut() {
            Some(session) => session.restart(difficulty),
            None => self.session = Some(Session::start(difficulty)),
        }

        self.history.clear();
        self.last_summary = None;
        self.input_buffer.clear();
        self.screen = Screen::Playing;

        let profile = difficulty.profile();
        self.add_message(
            &format!(
                "{difficulty}: guess a number from {} to {} in {} attempts.",
                profile.min_value(),
                profile.max_value(),
                profile.max_attempts()
            ),
            MessageStyle::Info,
        );
    }

    /// Return to the menu; an unfinished round is abandoned unrecorded
    pub fn back_to_menu(&mut self) {
        if self.screen == Screen::Playing {
            self.add_message("Round abandoned.", MessageStyle::Info);
        }
        self.input_buffer.clear();
        self.screen = Screen::Menu;
    }

    pub fn push_input(&mut self, c: char) {
        let is_sign = c == '-' && self.input_buffer.is_empty();
        if (c.is_ascii_digit() || is_sign) && self.input_buffer.len() < MAX_INPUT_LEN {
            self.input_buffer.push(c);
        }
    }

    /// Submit the input buffer as a guess
    pub fn handle_guess(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };

        let input = std::mem::take(&mut self.input_buffer);
        let value = match session.parse_guess(&input) {
            Ok(value) => value,
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                return;
            }
        };

        let report = match session.submit(value) {
            Ok(report) => report,
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                return;
            }
        };

        self.history.push(HistoryEntry {
            guess: report.guess,
            outcome: report.outcome,
            hint: report.hint,
            range_after: session.engine().remaining_range(),
        });

        if report.repeated {
            self.add_message(&format!("You already tried {value}."), MessageStyle::Info);
        }

        if let Some(result) = report.result {
            let summary = settle_round(&result, &mut self.stats);

            match summary.score {
                Some(score) => self.add_message(
                    &format!(
                        "🎉 Correct in {} attempts! +{score} points",
                        result.attempts_used
                    ),
                    MessageStyle::Success,
                ),
                None => self.add_message(
                    &format!("❌ Out of attempts! The number was {}.", result.secret),
                    MessageStyle::Error,
                ),
            }
            let unlocked: Vec<String> = summary
                .achievements
                .iter()
                .map(|a| format!("🏆 {a}"))
                .collect();
            for text in unlocked {
                self.add_message(&text, MessageStyle::Success);
            }

            self.last_summary = Some(summary);
            self.screen = Screen::RoundOver;
        } else {
            let mut text = format!("{value}: {}", report.outcome.message());
            if let Some(hint) = report.hint {
                text.push(' ');
                text.push_str(hint.temperature.emoji());
                text.push(' ');
                text.push_str(hint.temperature.message());
            }
            self.add_message(&text, MessageStyle::Info);
            if let Some(focus) = report.hint.and_then(|h| h.focus) {
                self.add_message(&format!("💭 {}", focus.message()), MessageStyle::Info);
            }
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 8 messages
        if self.messages.len() > 8 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    match res {
        Ok(app) => {
            crate::output::print_farewell(&app.stats);
            Ok(())
        }
        Err(err) => {
            eprintln!("Error: {err}");
            Ok(())
        }
    }
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<App> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                app.should_quit = true;
            }

            match app.screen {
                Screen::Menu => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
                    KeyCode::Char('1') => app.start_round(Difficulty::Easy),
                    KeyCode::Char('2') => app.start_round(Difficulty::Medium),
                    KeyCode::Char('3') => app.start_round(Difficulty::Hard),
                    KeyCode::Up | KeyCode::Char('k') => app.select_previous(),
                    KeyCode::Down | KeyCode::Char('j') => app.select_next(),
                    KeyCode::Enter => app.start_round(app.selected),
                    _ => {}
                },
                Screen::Playing => match key.code {
                    KeyCode::Esc => app.back_to_menu(),
                    KeyCode::Char(c) => app.push_input(c),
                    KeyCode::Backspace => {
                        app.input_buffer.pop();
                    }
                    KeyCode::Enter => app.handle_guess(),
                    _ => {}
                },
                Screen::RoundOver => match key.code {
                    KeyCode::Char('q') => app.should_quit = true,
                    KeyCode::Char('n') | KeyCode::Enter => app.start_round(app.selected),
                    KeyCode::Char('m') | KeyCode::Esc => app.back_to_menu(),
                    _ => {}
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(app)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play_to_win(app: &mut App) {
        let secret = app
            .session
            .as_ref()
            .map(|s| s.engine().secret_number())
            .unwrap();
        for c in secret.to_string().chars() {
            app.push_input(c);
        }
        app.handle_guess();
    }

    #[test]
    fn starts_on_menu() {
        let app = App::new();
        assert_eq!(app.screen, Screen::Menu);
        assert!(app.session.is_none());
        assert_eq!(app.selected, Difficulty::Medium);
    }

    #[test]
    fn selection_clamps_at_ends() {
        let mut app = App::new();
        app.select_next();
        app.select_next();
        assert_eq!(app.selected, Difficulty::Hard);
        app.select_previous();
        app.select_previous();
        app.select_previous();
        assert_eq!(app.selected, Difficulty::Easy);
    }

    #[test]
    fn input_accepts_digits_only() {
        let mut app = App::new();
        app.start_round(Difficulty::Easy);
        for c in "4x2a".chars() {
            app.push_input(c);
        }
        assert_eq!(app.input_buffer, "42");

        for c in "1234567".chars() {
            app.push_input(c);
        }
        assert_eq!(app.input_buffer.len(), MAX_INPUT_LEN);
    }

    #[test]
    fn invalid_guess_is_not_counted() {
        let mut app = App::new();
        app.start_round(Difficulty::Easy);
        for c in "99".chars() {
            app.push_input(c);
        }
        app.handle_guess();

        assert!(app.history.is_empty());
        assert_eq!(
            app.messages.last().map(|m| m.style),
            Some(MessageStyle::Error)
        );
        assert!(app.input_buffer.is_empty());
    }

    #[test]
    fn winning_moves_to_round_over_and_records() {
        let mut app = App::new();
        app.start_round(Difficulty::Hard);
        play_to_win(&mut app);

        assert_eq!(app.screen, Screen::RoundOver);
        assert_eq!(app.stats.total_wins(), 1);
        assert_eq!(app.history.len(), 1);
        assert!(app.last_summary.as_ref().and_then(|s| s.score).is_some());
    }

    #[test]
    fn new_round_resets_history() {
        let mut app = App::new();
        app.start_round(Difficulty::Easy);
        play_to_win(&mut app);
        app.start_round(app.selected);

        assert_eq!(app.screen, Screen::Playing);
        assert!(app.history.is_empty());
        assert!(app.last_summary.is_none());
        assert_eq!(app.stats.total_games(), 1);
    }

    #[test]
    fn abandoning_records_nothing() {
        let mut app = App::new();
        app.start_round(Difficulty::Medium);
        app.back_to_menu();

        assert_eq!(app.screen, Screen::Menu);
        assert_eq!(app.stats.total_games(), 0);
    }

    #[test]
    fn messages_are_capped() {
        let mut app = App::new();
        for i in 0..20 {
            app.add_message(&format!("m{i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 8);
        assert_eq!(app.messages.last().map(|m| m.text.as_str()), Some("m19"));
    }
}
