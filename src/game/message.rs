//! Console lines produced by the game

use crate::core::Outcome;

/// One line of console output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Warning,
    Error,
}

impl MessageStyle {
    /// Style used to announce an outcome
    #[must_use]
    pub const fn for_outcome(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Win => Self::Success,
            Outcome::Lose => Self::Warning,
            Outcome::Tie => Self::Info,
        }
    }
}

impl Message {
    pub fn new(text: impl Into<String>, style: MessageStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(text, MessageStyle::Info)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(text, MessageStyle::Error)
    }
}
