//! Guess evaluation results

use std::cmp::Ordering;
use std::fmt;

/// Classification of a single guess relative to the secret
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GuessOutcome {
    TooLow,
    TooHigh,
    Correct,
}

impl GuessOutcome {
    /// Compare `guess` against `secret`
    #[inline]
    #[must_use]
    pub fn evaluate(guess: i32, secret: i32) -> Self {
        match guess.cmp(&secret) {
            Ordering::Less => Self::TooLow,
            Ordering::Greater => Self::TooHigh,
            Ordering::Equal => Self::Correct,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_correct(self) -> bool {
        matches!(self, Self::Correct)
    }

    /// Short player-facing message
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::TooLow => "Too Low - Guess Higher",
            Self::TooHigh => "Too High - Guess Lower",
            Self::Correct => "Correct - You Win!",
        }
    }
}

impl fmt::Display for GuessOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
