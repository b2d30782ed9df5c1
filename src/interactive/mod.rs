//! Interactive TUI mode
//!
//! Full-screen game built on ratatui and crossterm.

pub mod app;
mod rendering;

pub use app::{App, HistoryEntry, Message, MessageStyle, Screen, run_tui};
