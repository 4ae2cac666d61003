//! Sources of the computer's choice

use super::Choice;
use rand::Rng;

/// Something that picks the computer's hand each round
pub trait Opponent {
    fn choose(&mut self) -> Choice;
}

/// Uniformly random opponent backed by a caller-supplied generator
#[derive(Debug, Clone)]
pub struct RandomOpponent<R> {
    rng: R,
}

impl<R: Rng> RandomOpponent<R> {
    #[must_use]
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Opponent for RandomOpponent<R> {
    fn choose(&mut self) -> Choice {
        Choice::random(&mut self.rng)
    }
}

/// Opponent that replays a fixed sequence of choices, cycling at the end
///
/// Used to drive deterministic matches in tests and demos.
#[derive(Debug, Clone)]
pub struct ScriptedOpponent {
    choices: Vec<Choice>,
    next: usize,
}

impl ScriptedOpponent {
    /// Create a scripted opponent
    ///
    /// An empty script falls back to always throwing rock.
    #[must_use]
    pub fn new(choices: impl Into<Vec<Choice>>) -> Self {
        Self {
            choices: choices.into(),
            next: 0,
        }
    }
}

impl Opponent for ScriptedOpponent {
    fn choose(&mut self) -> Choice {
        if self.choices.is_empty() {
            return Choice::Rock;
        }
        let choice = self.choices[self.next % self.choices.len()];
        self.next += 1;
        choice
    }
}
