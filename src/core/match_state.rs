//! Score keeping for one best-of-N match
//!
//! `MatchState` is a small `Copy` value. Scoring a round returns the next
//! state instead of mutating in place.

use super::{MatchError, Outcome};
use std::num::NonZeroU32;

/// Rounds in a match unless configured otherwise
pub const DEFAULT_ROUNDS: NonZeroU32 = NonZeroU32::new(5).unwrap();

/// Rounds played and points scored in the current match
///
/// Invariants: `rounds_played <= rounds_target` and
/// `player_score + computer_score <= rounds_played`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchState {
    rounds_played: u32,
    rounds_target: NonZeroU32,
    player_score: u32,
    computer_score: u32,
}

impl MatchState {
    /// A fresh match of `rounds_target` rounds
    #[must_use]
    pub const fn new(rounds_target: NonZeroU32) -> Self {
        Self {
            rounds_played: 0,
            rounds_target,
            player_score: 0,
            computer_score: 0,
        }
    }

    #[inline]
    #[must_use]
    pub const fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    #[inline]
    #[must_use]
    pub const fn rounds_target(&self) -> u32 {
        self.rounds_target.get()
    }

    #[inline]
    #[must_use]
    pub const fn player_score(&self) -> u32 {
        self.player_score
    }

    #[inline]
    #[must_use]
    pub const fn computer_score(&self) -> u32 {
        self.computer_score
    }

    /// 1-based number of the round about to be played
    #[inline]
    #[must_use]
    pub const fn current_round(&self) -> u32 {
        self.rounds_played + 1
    }

    /// True once every round of the match has been played
    #[inline]
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.rounds_played >= self.rounds_target.get()
    }

    /// Record one round
    ///
    /// A win scores for the player, a loss for the computer, a tie for
    /// nobody. The round counter always advances.
    ///
    /// # Errors
    /// Returns `MatchError::Complete` if all rounds have already been played.
    pub const fn score_round(self, outcome: Outcome) -> Result<Self, MatchError> {
        if self.is_complete() {
            return Err(MatchError::Complete(self.rounds_played));
        }

        let mut next = self;
        match outcome {
            Outcome::Win => next.player_score += 1,
            Outcome::Lose => next.computer_score += 1,
            Outcome::Tie => {}
        }
        next.rounds_played += 1;
        Ok(next)
    }

    /// Overall result from the aggregate scores
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        Outcome::from_scores(self.player_score, self.computer_score)
    }
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new(DEFAULT_ROUNDS)
    }
}
