//! Scoring rules
//!
//! Pure functions from a won round to a score, and from scores to grades and
//! ranks.

mod calculator;
mod grade;

pub use calculator::{
    ATTEMPT_BONUS_MULTIPLIER, BASE_SCORE, EFFICIENCY_MULTIPLIER, PERFECT_GAME_ATTEMPTS,
    PERFECT_GAME_BONUS, TIME_BONUS, TIME_BONUS_THRESHOLD, compute_score,
};
pub use grade::{grade_for, rank_for};
