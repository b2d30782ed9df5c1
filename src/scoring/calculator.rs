//! Score computation for won rounds

use crate::core::Difficulty;

/// Points every win starts from, before the tier multiplier
pub const BASE_SCORE: i64 = 1000;

/// Points per unused attempt
pub const ATTEMPT_BONUS_MULTIPLIER: i64 = 50;

/// Rounds finished in fewer seconds than this earn [`TIME_BONUS`]
pub const TIME_BONUS_THRESHOLD: u64 = 60;

pub const TIME_BONUS: i64 = 200;

/// Wins in this many attempts or fewer earn [`PERFECT_GAME_BONUS`]
pub const PERFECT_GAME_ATTEMPTS: u32 = 3;

pub const PERFECT_GAME_BONUS: i64 = 500;

/// Applied last when at most half the attempts were used
pub const EFFICIENCY_MULTIPLIER: f64 = 1.25;

/// Compute the score for a won round
///
/// Steps, in order: base score, tier multiplier, unused-attempt bonus, time
/// bonus, perfect-game bonus, efficiency multiplier. The final value is
/// rounded half away from zero.
///
/// Only meaningful for wins; a loss contributes no score. If `attempts_used`
/// exceeds the tier's cap the attempt bonus goes negative.
///
/// # Examples
/// ```
/// use digitdash::core::Difficulty;
/// use digitdash::scoring::compute_score;
///
/// // 1000 + 9×50 + 200 + 500 = 2150, ×1.25 = 2687.5
/// assert_eq!(compute_score(Difficulty::Easy, 3, 20), 2688);
/// ```
#[must_use]
pub fn compute_score(difficulty: Difficulty, attempts_used: u32, elapsed_seconds: u64) -> i64 {
    let profile = difficulty.profile();

    let mut score = BASE_SCORE as f64 * profile.score_multiplier();

    let attempts_remaining = i64::from(profile.max_attempts()) - i64::from(attempts_used);
    score += (attempts_remaining * ATTEMPT_BONUS_MULTIPLIER) as f64;

    if elapsed_seconds < TIME_BONUS_THRESHOLD {
        score += TIME_BONUS as f64;
    }

    if attempts_used <= PERFECT_GAME_ATTEMPTS {
        score += PERFECT_GAME_BONUS as f64;
    }

    if attempts_used <= profile.max_attempts() / 2 {
        score *= EFFICIENCY_MULTIPLIER;
    }

    score.round() as i64
}
