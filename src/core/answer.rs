//! Yes / no answers to "play again?"

use super::InvalidInput;

/// Parsed answer to the replay question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplayAnswer {
    Yes,
    No,
}

impl ReplayAnswer {
    /// Parse `y`/`yes` or `n`/`no`, ignoring case and surrounding whitespace
    ///
    /// # Errors
    /// Returns `InvalidInput` for anything else.
    pub fn parse(input: &str) -> Result<Self, InvalidInput> {
        match input.trim().to_lowercase().as_str() {
            "y" | "yes" => Ok(Self::Yes),
            "n" | "no" => Ok(Self::No),
            _ => Err(InvalidInput::new(input)),
        }
    }
}
