//! Win / lose / tie from the subject's point of view

use std::cmp::Ordering;
use std::fmt;

/// Result of a round or a whole match, relative to the subject (the player)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Win,
    Lose,
    Tie,
}

impl Outcome {
    /// The same result seen from the other side
    #[must_use]
    pub const fn reverse(self) -> Self {
        match self {
            Self::Win => Self::Lose,
            Self::Lose => Self::Win,
            Self::Tie => Self::Tie,
        }
    }

    /// Outcome of an aggregate score, subject score first
    #[must_use]
    pub fn from_scores(subject: u32, opponent: u32) -> Self {
        match subject.cmp(&opponent) {
            Ordering::Greater => Self::Win,
            Ordering::Less => Self::Lose,
            Ordering::Equal => Self::Tie,
        }
    }

    /// Message shown to the player
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Win => "You win!",
            Self::Lose => "Bad luck!",
            Self::Tie => "It's a tie!",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
