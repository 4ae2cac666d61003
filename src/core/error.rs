//! Error types for the game rules

use thiserror::Error;

/// Raw text that could not be understood as a choice or a yes/no answer
///
/// Always recoverable: the caller reports it and asks again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognised input: {input:?}")]
pub struct InvalidInput {
    input: String,
}

impl InvalidInput {
    pub(crate) fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }

    /// The text exactly as it was entered
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

/// Error returned when a match cannot accept another round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MatchError {
    #[error("match is already complete after {0} rounds")]
    Complete(u32),
}
