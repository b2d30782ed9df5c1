//! TUI rendering with ratatui
//!
//! Screens for the DigitDash interface.

use super::app::{App, MessageStyle, Screen};
use crate::core::{Difficulty, GuessOutcome};
use crate::output::formatters::format_time;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Left panel
            Constraint::Percentage(40), // Right panel
        ])
        .split(chunks[1]);

    match app.screen {
        Screen::Menu => render_menu(f, app, main_chunks[0]),
        Screen::Playing | Screen::RoundOver => render_round_panel(f, app, main_chunks[0]),
    }
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

const fn difficulty_color(difficulty: Difficulty) -> Color {
    match difficulty {
        Difficulty::Easy => Color::Green,
        Difficulty::Medium => Color::Yellow,
        Difficulty::Hard => Color::Red,
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎯 DIGITDASH - The Number Guessing Game")
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

fn render_menu(f: &mut Frame, app: &App, area: Rect) {
    let mut content = vec![Line::from("Choose your challenge:"), Line::from("")];

    for (i, difficulty) in Difficulty::ALL.iter().enumerate() {
        let profile = difficulty.profile();
        let selected = *difficulty == app.selected;
        let marker = if selected { "▶ " } else { "  " };
        let mut style = Style::default().fg(difficulty_color(*difficulty));
        if selected {
            style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
        }

        content.push(Line::from(vec![
            Span::raw(marker),
            Span::styled(
                format!(
                    "{}. {:<7} {}-{}, {} attempts, x{:.1}",
                    i + 1,
                    difficulty.name(),
                    profile.min_value(),
                    profile.max_value(),
                    profile.max_attempts(),
                    profile.score_multiplier()
                ),
                style,
            ),
        ]));
        content.push(Line::from(format!("     {}", difficulty.description())));
    }

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Main Menu ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn render_round_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Round info
            Constraint::Length(3), // Remaining range
            Constraint::Min(3),    // History
        ])
        .split(area);

    render_round_info(f, app, chunks[0]);
    render_range_gauge(f, app, chunks[1]);
    render_history(f, app, chunks[2]);
}

fn render_round_info(f: &mut Frame, app: &App, area: Rect) {
    let Some(session) = app.session.as_ref() else {
        return;
    };
    let engine = session.engine();
    let difficulty = engine.difficulty();
    let profile = difficulty.profile();
    let seconds = app
        .last_summary
        .as_ref()
        .map_or_else(|| session.elapsed().as_secs(), |s| s.result.elapsed_seconds);

    let mut content = vec![
        Line::from(vec![
            Span::raw("Difficulty: "),
            Span::styled(
                difficulty.name(),
                Style::default()
                    .fg(difficulty_color(difficulty))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(
                "  ({}-{})",
                profile.min_value(),
                profile.max_value()
            )),
        ]),
        Line::from(format!(
            "Attempts:   {}/{} used, {} left",
            engine.attempt_count(),
            profile.max_attempts(),
            engine.attempts_remaining()
        )),
        Line::from(format!("Time:       {}", format_time(seconds))),
    ];

    if let Some(summary) = app.last_summary.as_ref() {
        let line = match (summary.score, summary.grade) {
            (Some(score), Some(grade)) => Line::from(Span::styled(
                format!("Score: {score}  Grade: {grade}"),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )),
            _ => Line::from(Span::styled(
                format!("The number was {}", summary.result.secret),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
        };
        content.push(line);
    }

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Current Round ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(paragraph, area);
}

fn render_range_gauge(f: &mut Frame, app: &App, area: Rect) {
    let Some(session) = app.session.as_ref() else {
        return;
    };
    let engine = session.engine();
    let profile = engine.difficulty().profile();
    let (low, high) = engine.remaining_range();

    let remaining = (high - low + 1).max(0);
    let total = i32::try_from(profile.range_size()).unwrap_or(i32::MAX).max(1);
    let eliminated_pct = u16::try_from((total - remaining) * 100 / total).unwrap_or(100);

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Range Eliminated ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(eliminated_pct.min(100))
        .label(format!("secret is in {low}-{high} | {remaining} candidates"));

    f.render_widget(gauge, area);
}

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    let history_items: Vec<ListItem> = app
        .history
        .iter()
        .enumerate()
        .rev()
        .map(|(i, entry)| {
            let (arrow, color) = match entry.outcome {
                GuessOutcome::TooLow => ("↑ higher", Color::Blue),
                GuessOutcome::TooHigh => ("↓ lower", Color::Magenta),
                GuessOutcome::Correct => ("✔ correct", Color::Green),
            };
            let hint = entry
                .hint
                .map(|h| format!(" {}", h.temperature.emoji()))
                .unwrap_or_default();

            ListItem::new(Line::from(vec![
                Span::raw(format!("{:>2}. {:>4} ", i + 1, entry.guess)),
                Span::styled(arrow, Style::default().fg(color)),
                Span::raw(format!(
                    "{hint}  [{}-{}]",
                    entry.range_after.0, entry.range_after.1
                )),
            ]))
        })
        .collect();

    let history =
        List::new(history_items).block(Block::default().title(" History ").borders(Borders::ALL));

    f.render_widget(history, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(50), // Statistics
            Constraint::Percentage(50), // Messages
        ])
        .split(area);

    render_statistics(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_statistics(f: &mut Frame, app: &App, area: Rect) {
    let stats = &app.stats;
    let mut content = vec![
        Line::from(format!(
            "Games: {}  Won: {}  Lost: {}",
            stats.total_games(),
            stats.total_wins(),
            stats.total_losses()
        )),
        Line::from(format!("Win rate: {:.1}%", stats.win_rate())),
        Line::from(format!(
            "Score: {}  Rank: {}",
            stats.total_score(),
            stats.rank()
        )),
    ];

    for difficulty in Difficulty::ALL {
        if stats.wins(difficulty) == 0 {
            continue;
        }
        content.push(Line::from(Span::styled(
            format!(
                "{:<7} wins {}  best {}  avg {:.1}",
                difficulty.name(),
                stats.wins(difficulty),
                stats.best_attempts(difficulty),
                stats.average_attempts(difficulty)
            ),
            Style::default().fg(difficulty_color(difficulty)),
        )));
    }

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Statistics ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
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

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.screen {
        Screen::Menu => (
            " Press 1-3 or Enter to start ".to_string(),
            "",
            Color::Cyan,
        ),
        Screen::Playing => {
            let range = app
                .session
                .as_ref()
                .map(|s| s.engine().difficulty().profile())
                .map(|p| format!("{}-{}", p.min_value(), p.max_value()))
                .unwrap_or_default();
            (
                format!(" Enter your guess ({range}) | Enter to submit "),
                app.input_buffer.as_str(),
                Color::Yellow,
            )
        }
        Screen::RoundOver => {
            let won = app
                .last_summary
                .as_ref()
                .is_some_and(|s| s.result.is_win());
            let title = if won {
                " 🎉 YOU WIN! 🎉 | 'n' new round, 'm' menu, 'q' quit "
            } else {
                " GAME OVER | 'n' new round, 'm' menu, 'q' quit "
            };
            (
                title.to_string(),
                "",
                if won { Color::Green } else { Color::Red },
            )
        }
    };

    let input = Paragraph::new(content)
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

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let mode_text = match app.screen {
        Screen::Menu => "Mode: Menu",
        Screen::Playing => "Mode: Playing",
        Screen::RoundOver => "Mode: Round Over",
    };
    let mode = Paragraph::new(mode_text).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games(),
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let selected_text = format!("Difficulty: {}", app.selected.name());
    let selected = Paragraph::new(selected_text).alignment(Alignment::Center);
    f.render_widget(selected, chunks[2]);

    let help_text = match app.screen {
        Screen::Menu => "q: Quit | ↑↓: Select | Enter: Play",
        Screen::Playing => "Esc: Menu | Enter: Submit",
        Screen::RoundOver => "q: Quit | n: New Round | m: Menu",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
