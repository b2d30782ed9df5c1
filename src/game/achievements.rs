//! Achievements unlocked by a win

use super::RoundResult;
use crate::core::Difficulty;
use crate::scoring::PERFECT_GAME_ATTEMPTS;
use crate::stats::StatsTracker;
use std::fmt;

/// Wins on MEDIUM or HARD faster than this earn [`Achievement::SpeedDemon`]
pub const SPEED_DEMON_SECONDS: u64 = 30;

/// Total-win counts that unlock a milestone
pub const WIN_MILESTONES: [u32; 3] = [10, 50, 100];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Achievement {
    /// First win on this tier
    FirstVictory(Difficulty),
    PerfectGame,
    SpeedDemon,
    /// Total wins just reached this count
    Milestone(u32),
}

impl fmt::Display for Achievement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FirstVictory(difficulty) => write!(f, "First {difficulty} Victory!"),
            Self::PerfectGame => write!(f, "Perfect Game!"),
            Self::SpeedDemon => write!(f, "Speed Demon!"),
            Self::Milestone(wins) => write!(f, "{wins} Total Wins!"),
        }
    }
}

/// Achievements unlocked by `result`
///
/// Must be called after the win has been recorded in `stats`. Losses unlock
/// nothing.
#[must_use]
pub fn unlocked_by(result: &RoundResult, stats: &StatsTracker) -> Vec<Achievement> {
    if !result.is_win() {
        return Vec::new();
    }

    let mut unlocked = Vec::new();

    if stats.wins(result.difficulty) == 1 {
        unlocked.push(Achievement::FirstVictory(result.difficulty));
    }

    if result.attempts_used <= PERFECT_GAME_ATTEMPTS {
        unlocked.push(Achievement::PerfectGame);
    }

    if result.difficulty != Difficulty::Easy && result.elapsed_seconds < SPEED_DEMON_SECONDS {
        unlocked.push(Achievement::SpeedDemon);
    }

    let total_wins = stats.total_wins();
    if WIN_MILESTONES.contains(&total_wins) {
        unlocked.push(Achievement::Milestone(total_wins));
    }

    unlocked
}
