//! Process-lifetime aggregate of finished rounds

use crate::core::Difficulty;
use crate::scoring::rank_for;
use rustc_hash::FxHashMap;

/// Win statistics for one difficulty tier
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DifficultyStats {
    pub wins: u32,
    pub total_attempts: u64,
    /// Fewest attempts in a win; `None` until the first win
    pub best_attempts: Option<u32>,
    pub total_time_seconds: u64,
}

impl DifficultyStats {
    fn record_win(&mut self, attempts_used: u32, elapsed_seconds: u64) {
        self.wins += 1;
        self.total_attempts += u64::from(attempts_used);
        self.total_time_seconds += elapsed_seconds;
        self.best_attempts = Some(
            self.best_attempts
                .map_or(attempts_used, |best| best.min(attempts_used)),
        );
    }

    #[must_use]
    pub fn average_attempts(&self) -> f64 {
        if self.wins == 0 {
            return 0.0;
        }
        self.total_attempts as f64 / f64::from(self.wins)
    }

    #[must_use]
    pub fn average_time(&self) -> f64 {
        if self.wins == 0 {
            return 0.0;
        }
        self.total_time_seconds as f64 / f64::from(self.wins)
    }
}

/// Cumulative results for every round played in this process
///
/// Starts empty; nothing is persisted. Losses only touch the overall counters
/// and are not attributed to a tier.
#[derive(Debug, Clone)]
pub struct StatsTracker {
    total_games: u32,
    total_wins: u32,
    total_losses: u32,
    total_score: i64,
    per_difficulty: FxHashMap<Difficulty, DifficultyStats>,
}

impl Default for StatsTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl StatsTracker {
    #[must_use]
    pub fn new() -> Self {
        let per_difficulty = Difficulty::ALL
            .iter()
            .map(|&difficulty| (difficulty, DifficultyStats::default()))
            .collect();

        Self {
            total_games: 0,
            total_wins: 0,
            total_losses: 0,
            total_score: 0,
            per_difficulty,
        }
    }

    /// Record a won round and its score
    pub fn record_win(
        &mut self,
        difficulty: Difficulty,
        attempts_used: u32,
        elapsed_seconds: u64,
        score: i64,
    ) {
        self.total_games += 1;
        self.total_wins += 1;
        self.total_score += score;

        self.per_difficulty
            .entry(difficulty)
            .or_default()
            .record_win(attempts_used, elapsed_seconds);

        log::debug!(
            "recorded {difficulty} win: {attempts_used} attempts, {elapsed_seconds}s, {score} points"
        );
    }

    /// Record a lost round
    pub fn record_loss(&mut self) {
        self.total_games += 1;
        self.total_losses += 1;
        log::debug!("recorded loss ({} games total)", self.total_games);
    }

    #[inline]
    #[must_use]
    pub const fn total_games(&self) -> u32 {
        self.total_games
    }

    #[inline]
    #[must_use]
    pub const fn total_wins(&self) -> u32 {
        self.total_wins
    }

    #[inline]
    #[must_use]
    pub const fn total_losses(&self) -> u32 {
        self.total_losses
    }

    #[inline]
    #[must_use]
    pub const fn total_score(&self) -> i64 {
        self.total_score
    }

    /// Percentage of games won (0-100), or 0 before any game
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            return 0.0;
        }
        f64::from(self.total_wins) / f64::from(self.total_games) * 100.0
    }

    /// Mean score per win, or 0 before any win
    #[must_use]
    pub fn average_score(&self) -> f64 {
        if self.total_wins == 0 {
            return 0.0;
        }
        self.total_score as f64 / f64::from(self.total_wins)
    }

    /// Snapshot of a tier's statistics
    #[must_use]
    pub fn difficulty_stats(&self, difficulty: Difficulty) -> DifficultyStats {
        self.per_difficulty
            .get(&difficulty)
            .copied()
            .unwrap_or_default()
    }

    #[must_use]
    pub fn wins(&self, difficulty: Difficulty) -> u32 {
        self.difficulty_stats(difficulty).wins
    }

    /// Fewest attempts in a win on `difficulty`, or 0 with no wins yet
    #[must_use]
    pub fn best_attempts(&self, difficulty: Difficulty) -> u32 {
        self.difficulty_stats(difficulty).best_attempts.unwrap_or(0)
    }

    /// Mean attempts per win on `difficulty`, or 0 with no wins yet
    #[must_use]
    pub fn average_attempts(&self, difficulty: Difficulty) -> f64 {
        self.difficulty_stats(difficulty).average_attempts()
    }

    /// Mean seconds per win on `difficulty`, or 0 with no wins yet
    #[must_use]
    pub fn average_time(&self, difficulty: Difficulty) -> f64 {
        self.difficulty_stats(difficulty).average_time()
    }

    /// Rank title for the accumulated score
    #[must_use]
    pub fn rank(&self) -> &'static str {
        rank_for(self.total_score)
    }
}
