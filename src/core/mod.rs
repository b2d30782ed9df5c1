//! Core domain types for the guessing game
//!
//! Difficulty tiers, guess evaluation, proximity hints and the round engine.
//! Nothing here performs I/O.

mod difficulty;
mod hint;
mod outcome;
mod round;

pub use difficulty::{Difficulty, DifficultyError, DifficultyProfile};
pub use hint::{Hint, RangeHalf, Temperature};
pub use outcome::GuessOutcome;
pub use round::RoundEngine;
