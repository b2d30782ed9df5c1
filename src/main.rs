//! DigitDash - CLI
//!
//! Number-guessing game with TUI and line-oriented modes, plus an automatic
//! simulator.

use anyhow::Result;
use clap::{Parser, Subcommand};
use digitdash::{
    commands::{Autoplayer, SimulationConfig, run_simple, run_simulation},
    core::Difficulty,
    output::{print_instructions, print_simulation_result},
};

#[derive(Parser)]
#[command(
    name = "digitdash",
    about = "DigitDash: guess the secret number before your attempts run out",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (menu-driven game without TUI)
    Simple,

    /// Play many rounds automatically and report statistics
    Simulate {
        /// Number of rounds to play
        #[arg(short = 'n', long, default_value = "1000")]
        count: usize,

        /// Difficulty: easy, medium, hard
        #[arg(short, long, default_value = "medium")]
        difficulty: String,

        /// Guessing strategy: bisect (default), random
        #[arg(short, long, default_value = "bisect")]
        strategy: String,
    },

    /// Show the rules and scoring
    Rules,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(),
        Commands::Simple => run_simple().map_err(|e| anyhow::anyhow!(e)),
        Commands::Simulate {
            count,
            difficulty,
            strategy,
        } => run_simulate_command(count, &difficulty, &strategy),
        Commands::Rules => {
            print_instructions();
            Ok(())
        }
    }
}

fn run_simulate_command(count: usize, difficulty: &str, strategy: &str) -> Result<()> {
    let difficulty: Difficulty = difficulty.parse().map_err(|e| anyhow::anyhow!("{e}"))?;
    let player = Autoplayer::from_name(strategy);

    println!(
        "Simulating {count} {} rounds with the {} player...",
        difficulty.name(),
        player.name()
    );

    let result = run_simulation(SimulationConfig {
        difficulty,
        rounds: count,
        player,
        show_progress: true,
    });
    print_simulation_result(&result);
    Ok(())
}

fn run_play_command() -> Result<()> {
    use digitdash::interactive::{App, run_tui};

    let app = App::new();
    run_tui(app)
}
