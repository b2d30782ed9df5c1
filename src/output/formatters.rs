//! Formatting utilities for terminal output

use crate::core::{Difficulty, GuessOutcome};
use colored::Color;

/// Format whole seconds as `"42 seconds"` or `"2 min 5 sec"`
#[must_use]
pub fn format_time(seconds: u64) -> String {
    if seconds < 60 {
        format!("{seconds} seconds")
    } else {
        format!("{} min {} sec", seconds / 60, seconds % 60)
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Draw the still-possible window `[low, high]` inside `[min, max]`
///
/// Cells overlapping the window are filled; at least one cell is always lit
/// so a single remaining value stays visible.
#[must_use]
pub fn range_window(low: i32, high: i32, min: i32, max: i32, width: usize) -> String {
    if width == 0 {
        return String::new();
    }

    let span = f64::from(max - min + 1);
    let cell = |value: i32| {
        let offset = f64::from(value - min) / span * width as f64;
        (offset.max(0.0) as usize).min(width - 1)
    };

    let start = cell(low);
    let end = cell(high).max(start);

    (0..width)
        .map(|i| if (start..=end).contains(&i) { '█' } else { '░' })
        .collect()
}

/// Color band for the attempts left: red at 2 or fewer, yellow at 4 or fewer
#[must_use]
pub const fn attempts_color(remaining: u32) -> Color {
    if remaining <= 2 {
        Color::Red
    } else if remaining <= 4 {
        Color::Yellow
    } else {
        Color::Green
    }
}

#[must_use]
pub const fn difficulty_color(difficulty: Difficulty) -> Color {
    match difficulty {
        Difficulty::Easy => Color::Green,
        Difficulty::Medium => Color::Yellow,
        Difficulty::Hard => Color::Red,
    }
}

/// Banner text for a guess outcome
#[must_use]
pub const fn outcome_label(outcome: GuessOutcome) -> &'static str {
    match outcome {
        GuessOutcome::TooLow => "📈 Too Low! Go Higher!",
        GuessOutcome::TooHigh => "📉 Too High! Go Lower!",
        GuessOutcome::Correct => "🎉 Correct! You guessed it!",
    }
}
