//! Terminal output formatting
//!
//! Display utilities for the line-oriented game and command reports.

pub mod display;
pub mod formatters;

pub use display::{
    print_attempt_banner, print_farewell, print_guess_report, print_instructions,
    print_round_header, print_round_summary, print_simulation_result, print_statistics,
};
