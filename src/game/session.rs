//! Game-session controller
//!
//! A [`Session`] wraps a [`RoundEngine`] with the rules the engine leaves to
//! its caller: input parsing and range checks, the attempt cap, timing, and
//! producing a [`RoundResult`] once the round is decided.

use super::{RoundOutcome, RoundResult};
use crate::core::{Difficulty, GuessOutcome, Hint, RoundEngine};
use rand::rngs::ThreadRng;
use rand::{CryptoRng, Rng};
use std::fmt;
use std::time::{Duration, Instant};

/// Error type for rejected guesses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    NotANumber(String),
    OutOfRange { min: i32, max: i32 },
    /// The round was already won or lost
    RoundOver,
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotANumber(input) => write!(f, "'{input}' is not a number"),
            Self::OutOfRange { min, max } => {
                write!(f, "Number must be between {min} and {max}")
            }
            Self::RoundOver => write!(f, "This round is already over"),
        }
    }
}

impl std::error::Error for GuessError {}

/// What happened after one accepted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessReport {
    pub guess: i32,
    pub outcome: GuessOutcome,
    /// 1-based attempt number of this guess
    pub attempt: u32,
    pub attempts_remaining: u32,
    /// The value had already been tried this round
    pub repeated: bool,
    /// Proximity hint, only while the round continues
    pub hint: Option<Hint>,
    /// Set once the round is won or out of attempts
    pub result: Option<RoundResult>,
}

/// One player's round in progress
#[derive(Debug)]
pub struct Session<R = ThreadRng> {
    engine: RoundEngine<R>,
    started: Instant,
    result: Option<RoundResult>,
}

impl Session<ThreadRng> {
    /// Begin a round on `difficulty`
    #[must_use]
    pub fn start(difficulty: Difficulty) -> Self {
        Self::from_engine(RoundEngine::new(difficulty))
    }
}

impl<R: Rng + CryptoRng> Session<R> {
    /// Abandon the current round and begin a new one
    pub fn restart(&mut self, difficulty: Difficulty) {
        self.engine.start_round(difficulty);
        self.started = Instant::now();
        self.result = None;
    }
}

impl<R> Session<R> {
    /// Wrap an engine whose round has just started
    #[must_use]
    pub fn from_engine(engine: RoundEngine<R>) -> Self {
        Self {
            engine,
            started: Instant::now(),
            result: None,
        }
    }

    /// Parse player input into a guess inside the tier's range
    ///
    /// # Errors
    ///
    /// Returns `GuessError::NotANumber` for non-integer input and
    /// `GuessError::OutOfRange` for integers outside the tier's range.
    pub fn parse_guess(&self, input: &str) -> Result<i32, GuessError> {
        let trimmed = input.trim();
        let value: i32 = trimmed
            .parse()
            .map_err(|_| GuessError::NotANumber(trimmed.to_string()))?;

        let profile = self.engine.difficulty().profile();
        if !profile.contains(value) {
            return Err(GuessError::OutOfRange {
                min: profile.min_value(),
                max: profile.max_value(),
            });
        }

        Ok(value)
    }

    /// Submit a guess
    ///
    /// # Errors
    ///
    /// Returns `GuessError::RoundOver` if the round was already decided.
    pub fn submit(&mut self, value: i32) -> Result<GuessReport, GuessError> {
        let elapsed = self.started.elapsed();
        self.submit_after(value, elapsed)
    }

    fn submit_after(&mut self, value: i32, elapsed: Duration) -> Result<GuessReport, GuessError> {
        if self.result.is_some() {
            return Err(GuessError::RoundOver);
        }

        let repeated = self.engine.has_been_guessed(value);
        let outcome = self.engine.submit_guess(value);
        let attempts_remaining = self.engine.attempts_remaining();

        let finished = if outcome.is_correct() {
            Some(RoundOutcome::Won)
        } else if attempts_remaining == 0 {
            Some(RoundOutcome::Lost)
        } else {
            None
        };

        self.result = finished.map(|outcome| RoundResult {
            difficulty: self.engine.difficulty(),
            attempts_used: self.engine.attempt_count(),
            elapsed_seconds: elapsed.as_secs(),
            outcome,
            secret: self.engine.secret_number(),
        });

        let hint = finished.is_none().then(|| self.engine.hint_for(value));

        Ok(GuessReport {
            guess: value,
            outcome,
            attempt: self.engine.attempt_count(),
            attempts_remaining,
            repeated,
            hint,
            result: self.result,
        })
    }

    #[inline]
    #[must_use]
    pub const fn engine(&self) -> &RoundEngine<R> {
        &self.engine
    }

    #[inline]
    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.engine.difficulty()
    }

    #[inline]
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.result.is_some()
    }

    /// Time since the round started
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Temperature;

    fn session_with_secret(difficulty: Difficulty, secret: i32) -> Session {
        Session::from_engine(RoundEngine::with_secret(difficulty, secret))
    }

    #[test]
    fn parse_guess_accepts_in_range() {
        let session = session_with_secret(Difficulty::Easy, 10);
        assert_eq!(session.parse_guess(" 25 \n"), Ok(25));
        assert_eq!(session.parse_guess("1"), Ok(1));
        assert_eq!(session.parse_guess("50"), Ok(50));
    }

    #[test]
    fn parse_guess_rejects_bad_input() {
        let session = session_with_secret(Difficulty::Easy, 10);
        assert_eq!(
            session.parse_guess("abc"),
            Err(GuessError::NotANumber("abc".to_string()))
        );
        assert_eq!(
            session.parse_guess("51"),
            Err(GuessError::OutOfRange { min: 1, max: 50 })
        );
        assert_eq!(
            session.parse_guess("0"),
            Err(GuessError::OutOfRange { min: 1, max: 50 })
        );
    }

    #[test]
    fn winning_guess_produces_result() {
        let mut session = session_with_secret(Difficulty::Medium, 64);

        let first = session.submit_after(50, Duration::from_secs(3)).unwrap();
        assert_eq!(first.outcome, GuessOutcome::TooLow);
        assert_eq!(first.attempt, 1);
        assert_eq!(first.attempts_remaining, 9);
        assert!(first.hint.is_some());
        assert!(first.result.is_none());

        let second = session.submit_after(64, Duration::from_secs(12)).unwrap();
        assert_eq!(second.outcome, GuessOutcome::Correct);
        assert!(second.hint.is_none());

        let result = second.result.unwrap();
        assert_eq!(result.outcome, RoundOutcome::Won);
        assert_eq!(result.attempts_used, 2);
        assert_eq!(result.elapsed_seconds, 12);
        assert_eq!(result.secret, 64);
        assert!(session.is_over());
    }

    #[test]
    fn exhausting_attempts_loses() {
        let mut session = session_with_secret(Difficulty::Hard, 499);

        for guess in 1..8 {
            let report = session.submit_after(guess, Duration::from_secs(1)).unwrap();
            assert!(report.result.is_none());
        }

        let last = session.submit_after(8, Duration::from_secs(90)).unwrap();
        assert_eq!(last.attempts_remaining, 0);
        assert!(last.hint.is_none());

        let result = last.result.unwrap();
        assert_eq!(result.outcome, RoundOutcome::Lost);
        assert_eq!(result.attempts_used, 8);
        assert_eq!(result.secret, 499);
        assert_eq!(result.score(), None);
    }

    #[test]
    fn guesses_after_round_over_are_rejected() {
        let mut session = session_with_secret(Difficulty::Easy, 5);
        session.submit_after(5, Duration::ZERO).unwrap();

        assert_eq!(
            session.submit_after(6, Duration::ZERO),
            Err(GuessError::RoundOver)
        );
        assert_eq!(session.engine().attempt_count(), 1);
    }

    #[test]
    fn unvalidated_extreme_guesses_get_cold_hints() {
        let mut session = session_with_secret(Difficulty::Medium, 50);

        for guess in [i32::MIN, i32::MAX] {
            let report = session.submit(guess).unwrap();
            assert_ne!(report.outcome, GuessOutcome::Correct);
            assert_eq!(
                report.hint.map(|h| h.temperature),
                Some(Temperature::Cold)
            );
        }
        assert_eq!(session.engine().attempt_count(), 2);
    }

    #[test]
    fn repeated_guess_is_flagged_and_counted() {
        let mut session = session_with_secret(Difficulty::Easy, 40);
        let first = session.submit_after(10, Duration::ZERO).unwrap();
        let again = session.submit_after(10, Duration::ZERO).unwrap();

        assert!(!first.repeated);
        assert!(again.repeated);
        assert_eq!(again.attempt, 2);
    }

    #[test]
    fn restart_clears_result_and_history() {
        let mut session = session_with_secret(Difficulty::Easy, 5);
        session.submit_after(5, Duration::ZERO).unwrap();
        assert!(session.is_over());

        session.restart(Difficulty::Hard);
        assert!(!session.is_over());
        assert_eq!(session.difficulty(), Difficulty::Hard);
        assert_eq!(session.engine().attempt_count(), 0);
        assert_eq!(session.engine().remaining_range(), (1, 500));
    }
}
