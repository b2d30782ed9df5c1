//! Session control and round settlement
//!
//! Ties the core together for a front end: a [`Session`] runs one round, and
//! [`settle_round`] scores it, records it and evaluates achievements.

pub mod achievements;
mod result;
mod session;

pub use achievements::{Achievement, unlocked_by};
pub use result::{RoundOutcome, RoundResult};
pub use session::{GuessError, GuessReport, Session};

use crate::scoring::grade_for;
use crate::stats::StatsTracker;

/// Everything a front end shows after a round ends
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundSummary {
    pub result: RoundResult,
    /// `None` for a loss
    pub score: Option<i64>,
    pub grade: Option<&'static str>,
    pub achievements: Vec<Achievement>,
}

/// Score a finished round, record it in `stats` and evaluate achievements
///
/// # Examples
/// ```
/// use digitdash::core::Difficulty;
/// use digitdash::game::{RoundOutcome, RoundResult, settle_round};
/// use digitdash::stats::StatsTracker;
///
/// let mut stats = StatsTracker::new();
/// let result = RoundResult {
///     difficulty: Difficulty::Easy,
///     attempts_used: 3,
///     elapsed_seconds: 20,
///     outcome: RoundOutcome::Won,
///     secret: 42,
/// };
///
/// let summary = settle_round(&result, &mut stats);
/// assert_eq!(summary.score, Some(2688));
/// assert_eq!(summary.grade, Some("A+"));
/// assert_eq!(stats.total_wins(), 1);
/// ```
pub fn settle_round(result: &RoundResult, stats: &mut StatsTracker) -> RoundSummary {
    let score = result.score();

    match score {
        Some(points) => stats.record_win(
            result.difficulty,
            result.attempts_used,
            result.elapsed_seconds,
            points,
        ),
        None => stats.record_loss(),
    }

    RoundSummary {
        result: *result,
        score,
        grade: score.map(grade_for),
        achievements: unlocked_by(result, stats),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Difficulty;

    #[test]
    fn settle_loss_records_loss_only() {
        let mut stats = StatsTracker::new();
        let result = RoundResult {
            difficulty: Difficulty::Medium,
            attempts_used: 10,
            elapsed_seconds: 75,
            outcome: RoundOutcome::Lost,
            secret: 33,
        };

        let summary = settle_round(&result, &mut stats);

        assert_eq!(summary.score, None);
        assert_eq!(summary.grade, None);
        assert!(summary.achievements.is_empty());
        assert_eq!(stats.total_losses(), 1);
        assert_eq!(stats.wins(Difficulty::Medium), 0);
    }

    #[test]
    fn settle_win_feeds_stats_and_achievements() {
        let mut stats = StatsTracker::new();
        let result = RoundResult {
            difficulty: Difficulty::Hard,
            attempts_used: 5,
            elapsed_seconds: 45,
            outcome: RoundOutcome::Won,
            secret: 250,
        };

        let summary = settle_round(&result, &mut stats);

        // 2000 + 3×50 + 200 = 2350
        assert_eq!(summary.score, Some(2350));
        assert_eq!(summary.grade, Some("A"));
        assert_eq!(
            summary.achievements,
            vec![Achievement::FirstVictory(Difficulty::Hard)]
        );
        assert_eq!(stats.total_score(), 2350);
        assert_eq!(stats.best_attempts(Difficulty::Hard), 5);
    }

    #[test]
    fn session_round_trip_through_settlement() {
        let mut stats = StatsTracker::new();
        let mut session = Session::start(Difficulty::Easy);
        let secret = session.engine().secret_number();

        let report = session.submit(secret).unwrap();
        let result = report.result.unwrap();
        let summary = settle_round(&result, &mut stats);

        assert!(summary.score.is_some());
        assert_eq!(stats.total_games(), 1);
        assert_eq!(stats.best_attempts(Difficulty::Easy), 1);
    }
}
