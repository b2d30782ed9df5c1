//! Command implementations

pub mod simple;
pub mod simulate;

pub use simple::{MenuChoice, run_simple};
pub use simulate::{Autoplayer, SimulationConfig, SimulationResult, run_simulation};
