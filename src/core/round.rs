//! Single-round state and guess evaluation
//!
//! A [`RoundEngine`] always has an active round: constructing one draws the
//! first secret, and [`RoundEngine::start_round`] replaces it unconditionally.

use super::{Difficulty, GuessOutcome, Hint};
use rand::rngs::ThreadRng;
use rand::{CryptoRng, Rng};

/// Owner of one round's secret, guess history and attempt count
///
/// Generic over the random source so tests can inject a seeded CSPRNG; the
/// default is the thread-local generator, which is reseeded from the OS.
#[derive(Debug)]
pub struct RoundEngine<R = ThreadRng> {
    rng: R,
    difficulty: Difficulty,
    secret: i32,
    history: Vec<i32>,
}

impl RoundEngine<ThreadRng> {
    /// Start a round on `difficulty` with the thread-local secure generator
    #[must_use]
    pub fn new(difficulty: Difficulty) -> Self {
        Self::with_rng(difficulty, rand::rng())
    }
}

impl<R: Rng + CryptoRng> RoundEngine<R> {
    /// Start a round on `difficulty` drawing secrets from `rng`
    #[must_use]
    pub fn with_rng(difficulty: Difficulty, mut rng: R) -> Self {
        let secret = draw_secret(&mut rng, difficulty);
        log::debug!("round started on {difficulty}");

        Self {
            rng,
            difficulty,
            secret,
            history: Vec::new(),
        }
    }

    /// Discard the current round and begin a new one
    ///
    /// Clears the guess history and draws a fresh secret from the new tier's
    /// range. There is no "already in progress" check.
    pub fn start_round(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        self.secret = draw_secret(&mut self.rng, difficulty);
        self.history.clear();
        log::debug!("round restarted on {difficulty}");
    }
}

impl<R> RoundEngine<R> {
    /// Record a guess and compare it with the secret
    ///
    /// The value is not range-checked; that is the caller's concern.
    pub fn submit_guess(&mut self, value: i32) -> GuessOutcome {
        self.history.push(value);
        let outcome = GuessOutcome::evaluate(value, self.secret);
        log::debug!(
            "attempt {} on {}: {value} -> {outcome:?}",
            self.history.len(),
            self.difficulty
        );
        outcome
    }

    /// Tightest `(low, high)` interval consistent with every guess so far
    ///
    /// # Examples
    /// ```
    /// use digitdash::core::{Difficulty, RoundEngine};
    ///
    /// let mut engine = RoundEngine::new(Difficulty::Medium);
    /// let secret = engine.secret_number();
    /// if secret > 1 {
    ///     engine.submit_guess(1);
    ///     assert_eq!(engine.remaining_range().0, 2);
    /// }
    /// ```
    #[must_use]
    pub fn remaining_range(&self) -> (i32, i32) {
        let profile = self.difficulty.profile();
        self.history.iter().fold(
            (profile.min_value(), profile.max_value()),
            |(low, high), &guess| {
                if guess < self.secret && guess >= low {
                    (guess + 1, high)
                } else if guess > self.secret && guess <= high {
                    (low, guess - 1)
                } else {
                    (low, high)
                }
            },
        )
    }

    /// Check whether `value` was already submitted this round
    #[must_use]
    pub fn has_been_guessed(&self, value: i32) -> bool {
        self.history.contains(&value)
    }

    /// Proximity hint for `guess` against this round's secret
    #[must_use]
    pub fn hint_for(&self, guess: i32) -> Hint {
        Hint::classify(guess, self.secret, self.difficulty)
    }

    /// The secret, for revealing at the end of a round
    #[inline]
    #[must_use]
    pub const fn secret_number(&self) -> i32 {
        self.secret
    }

    #[inline]
    #[must_use]
    pub fn attempt_count(&self) -> u32 {
        self.history.len() as u32
    }

    /// Attempts left before the tier's cap is reached
    #[inline]
    #[must_use]
    pub fn attempts_remaining(&self) -> u32 {
        self.difficulty
            .profile()
            .max_attempts()
            .saturating_sub(self.attempt_count())
    }

    /// Guesses in submission order
    #[inline]
    #[must_use]
    pub fn guess_history(&self) -> &[i32] {
        &self.history
    }

    #[inline]
    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
}

fn draw_secret<R: Rng + CryptoRng>(rng: &mut R, difficulty: Difficulty) -> i32 {
    let profile = difficulty.profile();
    rng.random_range(profile.min_value()..=profile.max_value())
}

#[cfg(test)]
impl RoundEngine<ThreadRng> {
    /// Engine with a fixed secret, for deterministic tests
    pub(crate) fn with_secret(difficulty: Difficulty, secret: i32) -> Self {
        let mut engine = Self::new(difficulty);
        engine.secret = secret;
        engine
    }
}
