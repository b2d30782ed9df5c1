//! Simple interactive CLI mode
//!
//! Text-based game loop without TUI

use crate::core::Difficulty;
use crate::game::{Session, settle_round};
use crate::output::{
    print_attempt_banner, print_farewell, print_guess_report, print_instructions,
    print_round_header, print_round_summary, print_statistics,
};
use crate::stats::StatsTracker;
use colored::Colorize;
use std::io::{self, Write};

/// Main menu entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Play(Difficulty),
    Statistics,
    Instructions,
    Exit,
}

impl MenuChoice {
    /// Parse a menu selection (1-6, or a difficulty / command name)
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "4" | "stats" | "s" => Some(Self::Statistics),
            "5" | "help" | "?" => Some(Self::Instructions),
            "6" | "quit" | "q" | "exit" => Some(Self::Exit),
            other => other.parse::<Difficulty>().ok().map(Self::Play),
        }
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple() -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║              DigitDash - The Number Guessing Game            ║");
    println!("╚══════════════════════════════════════════════════════════════╝");

    let mut stats = StatsTracker::new();

    loop {
        print_menu();

        let choice = loop {
            let input = get_user_input("Enter your choice (1-6)")?;
            if let Some(choice) = MenuChoice::parse(&input) {
                break choice;
            }
            println!("{}", "Invalid choice! Please enter 1-6.".red());
        };

        match choice {
            MenuChoice::Play(difficulty) => play_round(difficulty, &mut stats)?,
            MenuChoice::Statistics => print_statistics(&stats),
            MenuChoice::Instructions => print_instructions(),
            MenuChoice::Exit => {
                print_farewell(&stats);
                return Ok(());
            }
        }

        get_user_input("\nPress Enter to continue")?;
    }
}

fn print_menu() {
    println!("\n{}", "┌─────────────── MAIN MENU ───────────────┐".bold());
    println!("{}", "│  1. Play Easy     (1-50, 12 attempts)   │".green());
    println!("{}", "│  2. Play Medium   (1-100, 10 attempts)  │".yellow());
    println!("{}", "│  3. Play Hard     (1-500, 8 attempts)   │".red());
    println!("{}", "│  4. View Statistics                     │".blue());
    println!("{}", "│  5. Instructions                        │".magenta());
    println!("{}", "│  6. Exit Game                           │".cyan());
    println!("{}", "└─────────────────────────────────────────┘".bold());
}

fn play_round(difficulty: Difficulty, stats: &mut StatsTracker) -> Result<(), String> {
    let profile = difficulty.profile();
    let mut session = Session::start(difficulty);
    print_round_header(difficulty);

    loop {
        print_attempt_banner(session.engine().attempt_count() + 1, profile.max_attempts());

        let guess = loop {
            let input = get_user_input(&format!(
                "Enter your guess ({}-{})",
                profile.min_value(),
                profile.max_value()
            ))?;
            match session.parse_guess(&input) {
                Ok(value) => break value,
                Err(e) => println!("{}", format!("⚠ {e}").red()),
            }
        };

        let report = session.submit(guess).map_err(|e| e.to_string())?;
        print_guess_report(
            &report,
            session.engine().remaining_range(),
            (profile.min_value(), profile.max_value()),
        );

        if let Some(result) = report.result {
            let summary = settle_round(&result, stats);
            print_round_summary(&summary);
            return Ok(());
        }
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;
    if read == 0 {
        return Err("Input closed".to_string());
    }

    Ok(input.trim().to_string())
}
