//! Cumulative statistics across rounds

mod tracker;

pub use tracker::{DifficultyStats, StatsTracker};
