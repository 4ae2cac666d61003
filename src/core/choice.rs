//! Rock, paper, scissors
//!
//! A `Choice` is one of the three hands. Comparison goes through an explicit
//! rule table so every one of the nine pairs is spelled out.

use super::{InvalidInput, Outcome};
use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// One of the three hands a player can throw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Choice {
    Rock,
    Paper,
    Scissors,
}

impl Choice {
    /// All choices, in prompt order
    pub const ALL: [Self; 3] = [Self::Rock, Self::Paper, Self::Scissors];

    /// Canonical lowercase name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rock => "rock",
            Self::Paper => "paper",
            Self::Scissors => "scissors",
        }
    }

    /// Parse raw user text into a choice
    ///
    /// Surrounding whitespace is trimmed and case is ignored. Anything other
    /// than exactly `rock`, `paper` or `scissors` is rejected; there are no
    /// abbreviations.
    ///
    /// # Errors
    /// Returns `InvalidInput` if the normalized text is not a choice name.
    ///
    /// # Examples
    /// ```
    /// use rps_console::core::Choice;
    ///
    /// assert_eq!(Choice::parse(" Rock ").unwrap(), Choice::Rock);
    /// assert!(Choice::parse("rck").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, InvalidInput> {
        let normalized = input.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|choice| choice.name() == normalized)
            .ok_or_else(|| InvalidInput::new(input))
    }

    /// Outcome of `self` (the subject) against `opponent`
    ///
    /// Rock beats scissors, scissors beats paper, paper beats rock.
    #[must_use]
    pub const fn compare(self, opponent: Self) -> Outcome {
        match (self, opponent) {
            (Self::Rock, Self::Rock)
            | (Self::Paper, Self::Paper)
            | (Self::Scissors, Self::Scissors) => Outcome::Tie,
            (Self::Rock, Self::Scissors)
            | (Self::Scissors, Self::Paper)
            | (Self::Paper, Self::Rock) => Outcome::Win,
            (Self::Scissors, Self::Rock)
            | (Self::Paper, Self::Scissors)
            | (Self::Rock, Self::Paper) => Outcome::Lose,
        }
    }

    /// Draw a choice uniformly at random from the supplied generator
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Choice {
    type Err = InvalidInput;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
