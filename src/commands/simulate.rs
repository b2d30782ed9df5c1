//! Simulate command
//!
//! Plays many rounds automatically through the core and aggregates the results
//! into a fresh [`StatsTracker`].

use crate::core::{Difficulty, GuessOutcome, RoundEngine};
use crate::game::{RoundOutcome, RoundResult, settle_round};
use crate::stats::StatsTracker;
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Automatic guessing policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Autoplayer {
    /// Always guess the middle of the remaining range
    Bisect,
    /// Guess uniformly inside the remaining range
    Random,
}

impl Autoplayer {
    /// Create a player from its name
    ///
    /// Supported names: "bisect", "binary", "random". Unrecognized names
    /// fall back to bisect with a warning.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "bisect" | "binary" => Self::Bisect,
            "random" => Self::Random,
            other => {
                log::warn!("unknown player '{other}', using bisect");
                Self::Bisect
            }
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bisect => "bisect",
            Self::Random => "random",
        }
    }

    /// Pick a guess inside `[low, high]`
    pub fn next_guess<R: Rng>(self, low: i32, high: i32, rng: &mut R) -> i32 {
        match self {
            Self::Bisect => low + (high - low) / 2,
            Self::Random => rng.random_range(low..=high.max(low)),
        }
    }
}

/// Parameters of a simulation run
#[derive(Debug, Clone, Copy)]
pub struct SimulationConfig {
    pub difficulty: Difficulty,
    pub rounds: usize,
    pub player: Autoplayer,
    pub show_progress: bool,
}

/// Result of a simulation run
#[derive(Debug)]
pub struct SimulationResult {
    pub difficulty: Difficulty,
    pub player: Autoplayer,
    pub stats: StatsTracker,
    /// Attempts used → number of wins
    pub attempts_distribution: HashMap<u32, usize>,
    pub duration: Duration,
}

/// Play `config.rounds` rounds with the configured player
pub fn run_simulation(config: SimulationConfig) -> SimulationResult {
    let progress = if config.show_progress {
        let pb = ProgressBar::new(config.rounds as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let mut engine = RoundEngine::new(config.difficulty);
    let mut rng = rand::rng();
    let mut stats = StatsTracker::new();
    let mut attempts_distribution: HashMap<u32, usize> = HashMap::new();

    let start = Instant::now();

    for round in 0..config.rounds {
        engine.start_round(config.difficulty);
        let result = play_round(&mut engine, config.player, &mut rng);

        if result.is_win() {
            *attempts_distribution
                .entry(result.attempts_used)
                .or_insert(0) += 1;
        }
        settle_round(&result, &mut stats);

        if round % 100 == 0 {
            progress.set_message(format!("Win rate: {:.1}%", stats.win_rate()));
        }
        progress.inc(1);
    }

    progress.finish_with_message("Complete!");

    let duration = start.elapsed();
    log::info!(
        "simulated {} {} rounds with {} player: {:.1}% won",
        config.rounds,
        config.difficulty,
        config.player.name(),
        stats.win_rate()
    );

    SimulationResult {
        difficulty: config.difficulty,
        player: config.player,
        stats,
        attempts_distribution,
        duration,
    }
}

/// Play the engine's current round to completion
fn play_round<E, R: Rng>(
    engine: &mut RoundEngine<E>,
    player: Autoplayer,
    rng: &mut R,
) -> RoundResult {
    let started = Instant::now();

    let outcome = loop {
        let (low, high) = engine.remaining_range();
        let guess = player.next_guess(low, high, rng);

        if engine.submit_guess(guess) == GuessOutcome::Correct {
            break RoundOutcome::Won;
        }
        if engine.attempts_remaining() == 0 {
            break RoundOutcome::Lost;
        }
    };

    RoundResult {
        difficulty: engine.difficulty(),
        attempts_used: engine.attempt_count(),
        elapsed_seconds: started.elapsed().as_secs(),
        outcome,
        secret: engine.secret_number(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(difficulty: Difficulty, rounds: usize, player: Autoplayer) -> SimulationConfig {
        SimulationConfig {
            difficulty,
            rounds,
            player,
            show_progress: false,
        }
    }

    #[test]
    fn bisect_always_wins_easy() {
        let result = run_simulation(config(Difficulty::Easy, 200, Autoplayer::Bisect));

        assert_eq!(result.stats.total_games(), 200);
        assert_eq!(result.stats.total_wins(), 200);
        // 50 values need at most 6 halvings
        assert!(result.attempts_distribution.keys().all(|&a| (1..=6).contains(&a)));
    }

    #[test]
    fn distribution_sums_to_wins() {
        let result = run_simulation(config(Difficulty::Hard, 300, Autoplayer::Bisect));

        let wins: usize = result.attempts_distribution.values().sum();
        assert_eq!(wins, result.stats.total_wins() as usize);
        assert_eq!(
            result.stats.total_games(),
            result.stats.total_wins() + result.stats.total_losses()
        );
    }

    #[test]
    fn random_player_respects_attempt_cap() {
        let result = run_simulation(config(Difficulty::Medium, 200, Autoplayer::Random));

        assert_eq!(result.stats.total_games(), 200);
        let max = Difficulty::Medium.profile().max_attempts();
        assert!(result.attempts_distribution.keys().all(|&a| a <= max));
    }

    #[test]
    fn zero_rounds() {
        let result = run_simulation(config(Difficulty::Easy, 0, Autoplayer::Bisect));
        assert_eq!(result.stats.total_games(), 0);
        assert!(result.attempts_distribution.is_empty());
    }

    #[test]
    fn bisect_guesses_midpoint() {
        let mut rng = rand::rng();
        assert_eq!(Autoplayer::Bisect.next_guess(1, 100, &mut rng), 50);
        assert_eq!(Autoplayer::Bisect.next_guess(51, 100, &mut rng), 75);
        assert_eq!(Autoplayer::Bisect.next_guess(7, 7, &mut rng), 7);
    }

    #[test]
    fn random_guess_stays_in_window() {
        let mut rng = rand::rng();
        for _ in 0..1000 {
            let guess = Autoplayer::Random.next_guess(31, 89, &mut rng);
            assert!((31..=89).contains(&guess));
        }
    }

    #[test]
    fn player_names() {
        assert_eq!(Autoplayer::from_name("random"), Autoplayer::Random);
        assert_eq!(Autoplayer::from_name("bisect"), Autoplayer::Bisect);
        assert_eq!(Autoplayer::from_name("binary"), Autoplayer::Bisect);
        assert_eq!(Autoplayer::from_name("whatever"), Autoplayer::Bisect);
        assert_eq!(Autoplayer::Random.name(), "random");
    }
}
