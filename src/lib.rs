//! DigitDash
//!
//! A console number-guessing game with difficulty tiers, proximity hints,
//! scoring with grades and ranks, and session statistics.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use digitdash::core::{Difficulty, GuessOutcome, RoundEngine};
//!
//! let mut engine = RoundEngine::new(Difficulty::Medium);
//! let (low, high) = engine.remaining_range();
//! let outcome = engine.submit_guess(low + (high - low) / 2);
//! if outcome != GuessOutcome::Correct {
//!     println!("{}", outcome.message());
//! }
//! ```

// Core domain types
pub mod core;

// Score, grade and rank
pub mod scoring;

// Session statistics
pub mod stats;

// Session control and achievements
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
