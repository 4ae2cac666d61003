//! Rock Paper Scissors Console
//!
//! Best-of-N rock paper scissors against the computer, played in a terminal
//! console.
//!
//! # Quick Start
//!
//! ```rust
//! use rps_console::core::{Choice, DEFAULT_ROUNDS, ScriptedOpponent};
//! use rps_console::game::Session;
//!
//! let mut session = Session::new(ScriptedOpponent::new([Choice::Scissors]), DEFAULT_ROUNDS);
//! session.start();
//!
//! let messages = session.submit("rock");
//! assert_eq!(messages[0].text, "Computer chose scissors... You win!");
//! ```

// Core game rules
pub mod core;

// Match lifecycle
pub mod game;

// Terminal abstraction
pub mod terminal;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
