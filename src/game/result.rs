//! Finished-round summary

use crate::core::Difficulty;
use crate::scoring::compute_score;

/// How a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    Won,
    /// Attempts ran out
    Lost,
}

/// Everything needed to score and record one finished round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    pub difficulty: Difficulty,
    pub attempts_used: u32,
    pub elapsed_seconds: u64,
    pub outcome: RoundOutcome,
    pub secret: i32,
}

impl RoundResult {
    #[inline]
    #[must_use]
    pub const fn is_win(&self) -> bool {
        matches!(self.outcome, RoundOutcome::Won)
    }

    /// Score for a win; `None` for a loss
    #[must_use]
    pub fn score(&self) -> Option<i64> {
        self.is_win()
            .then(|| compute_score(self.difficulty, self.attempts_used, self.elapsed_seconds))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn win_has_score() {
        let result = RoundResult {
            difficulty: Difficulty::Easy,
            attempts_used: 3,
            elapsed_seconds: 20,
            outcome: RoundOutcome::Won,
            secret: 17,
        };
        assert!(result.is_win());
        assert_eq!(result.score(), Some(2688));
    }

    #[test]
    fn loss_has_no_score() {
        let result = RoundResult {
            difficulty: Difficulty::Hard,
            attempts_used: 8,
            elapsed_seconds: 300,
            outcome: RoundOutcome::Lost,
            secret: 321,
        };
        assert!(!result.is_win());
        assert_eq!(result.score(), None);
    }
}
