//! Core game rules
//!
//! Choices, outcomes and match scoring. Everything here is pure: no I/O and no
//! hidden randomness, so every rule can be tested directly.

mod answer;
mod choice;
mod error;
mod match_state;
mod opponent;
mod outcome;

pub use answer::ReplayAnswer;
pub use choice::Choice;
pub use error::{InvalidInput, MatchError};
pub use match_state::{DEFAULT_ROUNDS, MatchState};
pub use opponent::{Opponent, RandomOpponent, ScriptedOpponent};
pub use outcome::Outcome;
