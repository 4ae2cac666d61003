//! Full-screen console
//!
//! The game rendered as a terminal transcript with a scoreboard, built on
//! ratatui and crossterm.

pub mod app;
pub mod rendering;

pub use app::{App, ConsoleLine, run_tui};
